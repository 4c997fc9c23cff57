//! Error types for draw storage

use std::path::PathBuf;

use giftdraw_core::DrawId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no stored draw with id `{0}`")]
    UnknownDraw(DrawId),
}
