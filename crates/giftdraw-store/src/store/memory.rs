//! In-memory draw store.

use giftdraw_core::{DrawId, DrawResult};

use super::{DrawStore, StoredDraws};
use crate::error::StoreError;

/// Keeps draws in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDrawStore {
    state: StoredDraws,
}

impl InMemoryDrawStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawStore for InMemoryDrawStore {
    fn list(&self) -> Result<Vec<DrawResult>, StoreError> {
        Ok(self.state.draws.clone())
    }

    fn append(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        self.state.draws.push(draw);
        Ok(())
    }

    fn append_active(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        self.state.append_active(draw);
        Ok(())
    }

    fn update(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        self.state.update(draw)
    }

    fn active_id(&self) -> Result<Option<DrawId>, StoreError> {
        Ok(self.state.active.clone())
    }

    fn set_active(&mut self, id: &DrawId) -> Result<(), StoreError> {
        self.state.set_active(id)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.state = StoredDraws::default();
        Ok(())
    }

    fn update_active(
        &mut self,
        change: &mut dyn FnMut(&mut DrawResult) -> bool,
    ) -> Result<(), StoreError> {
        self.state.update_active(change);
        Ok(())
    }

    fn get_active(&self) -> Result<Option<DrawResult>, StoreError> {
        Ok(self.state.active().cloned())
    }
}
