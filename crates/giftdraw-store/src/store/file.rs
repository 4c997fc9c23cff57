//! JSON file draw store.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::debug;

use giftdraw_core::{DrawId, DrawResult};

use super::{DrawStore, StoredDraws};
use crate::error::StoreError;

/// Keeps draws in a single JSON document on disk.
///
/// Nothing is cached: every call reads the file again, under an advisory
/// lock on a sibling `<file>.lock`. Reads take the lock shared, changes
/// take it exclusive for the whole read-modify-write, so several handles
/// or processes on the same file see each other's writes and never
/// interleave them. Writes go to a sibling temporary file that is then
/// renamed over the original.
#[derive(Debug)]
pub struct JsonFileDrawStore {
    path: PathBuf,
    lock_path: PathBuf,
    tmp_path: PathBuf,
}

impl JsonFileDrawStore {
    /// Opens the archive at `path`. A missing file is an empty archive.
    ///
    /// The file is parsed once here so a corrupt archive is reported early.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let store = Self {
            lock_path: sibling(&path, ".lock"),
            tmp_path: sibling(&path, ".tmp"),
            path,
        };
        let state = store.read()?;
        debug!(
            event = "store_opened",
            path = %store.path.display(),
            draws = state.draws.len() as u64
        );
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn lock_file(&self) -> Result<File, StoreError> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|source| StoreError::Io {
                path: self.lock_path.clone(),
                source,
            })
    }

    fn load(&self) -> Result<StoredDraws, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(StoredDraws::default()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoredDraws::default()),
            Err(source) => Err(self.io_err(source)),
        }
    }

    fn read(&self) -> Result<StoredDraws, StoreError> {
        let lock = self.lock_file()?;
        FileExt::lock_shared(&lock).map_err(|source| self.io_err(source))?;
        // The lock is released when `lock` is dropped.
        self.load()
    }

    fn persist(&self, state: &StoredDraws) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.tmp_path, json).map_err(|source| self.io_err(source))?;
        fs::rename(&self.tmp_path, &self.path).map_err(|source| self.io_err(source))
    }

    /// Reloads, applies `f` and writes back if `f` reports a change, all
    /// under the exclusive lock.
    fn modify<F>(&mut self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut StoredDraws) -> Result<bool, StoreError>,
    {
        let lock = self.lock_file()?;
        FileExt::lock_exclusive(&lock).map_err(|source| self.io_err(source))?;
        let mut state = self.load()?;
        if f(&mut state)? {
            self.persist(&state)?;
        }
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

impl DrawStore for JsonFileDrawStore {
    fn list(&self) -> Result<Vec<DrawResult>, StoreError> {
        Ok(self.read()?.draws)
    }

    fn append(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        self.modify(|state| {
            state.draws.push(draw);
            Ok(true)
        })
    }

    fn append_active(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        self.modify(|state| {
            state.append_active(draw);
            Ok(true)
        })
    }

    fn update(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        self.modify(|state| state.update(draw).map(|()| true))
    }

    fn active_id(&self) -> Result<Option<DrawId>, StoreError> {
        Ok(self.read()?.active)
    }

    fn set_active(&mut self, id: &DrawId) -> Result<(), StoreError> {
        self.modify(|state| state.set_active(id).map(|()| true))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.modify(|state| {
            *state = StoredDraws::default();
            Ok(true)
        })
    }

    fn update_active(
        &mut self,
        change: &mut dyn FnMut(&mut DrawResult) -> bool,
    ) -> Result<(), StoreError> {
        self.modify(|state| Ok(state.update_active(change)))
    }

    fn get_active(&self) -> Result<Option<DrawResult>, StoreError> {
        Ok(self.read()?.active().cloned())
    }
}
