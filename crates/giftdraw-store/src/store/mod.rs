//! Storage capability for saved draws.

mod file;
mod memory;

use giftdraw_core::{DrawId, DrawResult};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub use file::JsonFileDrawStore;
pub use memory::InMemoryDrawStore;

/// Persistent list of draws plus a pointer to the active one.
///
/// Implementations decide where the data lives; callers that need atomic
/// read-modify-write sequences go through [`DrawRegistry`](crate::DrawRegistry).
pub trait DrawStore: Send {
    /// All saved draws, oldest first.
    fn list(&self) -> Result<Vec<DrawResult>, StoreError>;

    /// Saves a new draw. Does not change the active pointer.
    fn append(&mut self, draw: DrawResult) -> Result<(), StoreError>;

    /// Saves a new draw and points the active pointer at it, in one write.
    fn append_active(&mut self, draw: DrawResult) -> Result<(), StoreError>;

    /// Replaces the stored draw with the same id.
    fn update(&mut self, draw: DrawResult) -> Result<(), StoreError>;

    fn active_id(&self) -> Result<Option<DrawId>, StoreError>;

    /// Points the active pointer at a saved draw.
    fn set_active(&mut self, id: &DrawId) -> Result<(), StoreError>;

    /// Removes every draw and the active pointer.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Hands the current active draw to `change` and saves it when `change`
    /// returns true.
    ///
    /// Read, change and write form one step, also with respect to other
    /// handles on the same storage. Without an active draw `change` is not
    /// called.
    fn update_active(
        &mut self,
        change: &mut dyn FnMut(&mut DrawResult) -> bool,
    ) -> Result<(), StoreError>;

    /// The draw the active pointer refers to, if any.
    fn get_active(&self) -> Result<Option<DrawResult>, StoreError> {
        let Some(id) = self.active_id()? else {
            return Ok(None);
        };
        Ok(self.list()?.into_iter().find(|draw| draw.id == id))
    }
}

/// Serialized form shared by the backends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDraws {
    #[serde(default)]
    draws: Vec<DrawResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<DrawId>,
}

impl StoredDraws {
    fn update(&mut self, draw: DrawResult) -> Result<(), StoreError> {
        let slot = self
            .draws
            .iter_mut()
            .find(|stored| stored.id == draw.id)
            .ok_or_else(|| StoreError::UnknownDraw(draw.id.clone()))?;
        *slot = draw;
        Ok(())
    }

    fn set_active(&mut self, id: &DrawId) -> Result<(), StoreError> {
        if !self.draws.iter().any(|draw| &draw.id == id) {
            return Err(StoreError::UnknownDraw(id.clone()));
        }
        self.active = Some(id.clone());
        Ok(())
    }

    fn append_active(&mut self, draw: DrawResult) {
        self.active = Some(draw.id.clone());
        self.draws.push(draw);
    }

    fn active(&self) -> Option<&DrawResult> {
        let id = self.active.as_ref()?;
        self.draws.iter().find(|draw| &draw.id == id)
    }

    /// Applies `change` to a copy of the active draw and keeps the copy only
    /// when `change` reports a modification.
    fn update_active(&mut self, change: &mut dyn FnMut(&mut DrawResult) -> bool) -> bool {
        let Some(id) = self.active.as_ref() else {
            return false;
        };
        let Some(slot) = self.draws.iter_mut().find(|draw| &draw.id == id) else {
            return false;
        };
        let mut draw = slot.clone();
        if !change(&mut draw) {
            return false;
        }
        *slot = draw;
        true
    }
}
