//! Draw registry: saved draws plus one-shot token redemption.

use parking_lot::Mutex;
use tracing::{info, warn};

use giftdraw_core::{Assignment, DrawId, DrawResult};

use crate::error::StoreError;
use crate::store::DrawStore;

/// Result of redeeming a reveal token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookup {
    /// First redemption: the assignment, now marked accessed.
    Revealed(Assignment),
    /// The token was redeemed before; the receiver is not shown again.
    AlreadyConsumed,
    /// No active draw, or the active draw has no such token.
    NotFound,
}

/// Wraps a [`DrawStore`] behind a lock so lookups and the accessed flag
/// flip happen as one step.
///
/// Tokens are resolved against the active draw only.
///
/// # Example
///
/// ```
/// use giftdraw_core::{Assignment, DrawResult, Token};
/// use giftdraw_store::{DrawRegistry, InMemoryDrawStore, TokenLookup};
///
/// let registry = DrawRegistry::new(InMemoryDrawStore::new());
/// let draw = DrawResult::new(vec![Assignment::new("Ana", "Luis", Token::new("t1"))], None);
/// registry.record(draw).unwrap();
///
/// assert!(matches!(registry.consume("t1").unwrap(), TokenLookup::Revealed(_)));
/// assert_eq!(registry.consume("t1").unwrap(), TokenLookup::AlreadyConsumed);
/// ```
#[derive(Debug)]
pub struct DrawRegistry<St> {
    store: Mutex<St>,
}

impl<St: DrawStore> DrawRegistry<St> {
    pub fn new(store: St) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn into_inner(self) -> St {
        self.store.into_inner()
    }

    /// Saves a draw and makes it the active one.
    pub fn record(&self, draw: DrawResult) -> Result<DrawId, StoreError> {
        let id = draw.id.clone();
        let assignments = draw.assignments.len() as u64;
        self.store.lock().append_active(draw)?;
        info!(event = "draw_recorded", draw_id = %id, assignments);
        Ok(id)
    }

    /// Wraps assignments in a new draw stamped now, saves it and activates it.
    pub fn save_assignments(
        &self,
        assignments: Vec<Assignment>,
        name: Option<String>,
    ) -> Result<DrawId, StoreError> {
        self.record(DrawResult::new(assignments, name))
    }

    pub fn draws(&self) -> Result<Vec<DrawResult>, StoreError> {
        self.store.lock().list()
    }

    pub fn active(&self) -> Result<Option<DrawResult>, StoreError> {
        self.store.lock().get_active()
    }

    pub fn active_id(&self) -> Result<Option<DrawId>, StoreError> {
        self.store.lock().active_id()
    }

    pub fn activate(&self, id: &DrawId) -> Result<(), StoreError> {
        self.store.lock().set_active(id)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.lock().clear()
    }

    /// Looks up an assignment without touching its accessed flag.
    pub fn assignment_by_token(&self, token: &str) -> Result<Option<Assignment>, StoreError> {
        let active = self.store.lock().get_active()?;
        Ok(active.and_then(|draw| draw.assignment_by_token(token).cloned()))
    }

    /// True if the token exists in the active draw and was already redeemed.
    pub fn is_token_accessed(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self
            .assignment_by_token(token)?
            .is_some_and(|assignment| assignment.accessed))
    }

    /// Flags the token's assignment as accessed.
    ///
    /// Returns false when there is no active draw or no such token.
    pub fn mark_as_accessed(&self, token: &str) -> Result<bool, StoreError> {
        let mut marked = false;
        self.store.lock().update_active(&mut |draw| {
            marked = match draw.assignment_by_token_mut(token) {
                Some(assignment) => {
                    assignment.accessed = true;
                    true
                }
                None => false,
            };
            marked
        })?;
        Ok(marked)
    }

    /// Redeems a token: the first call reveals the assignment and flips
    /// `accessed`, every later call is refused.
    ///
    /// The check and the flip are one store step, so two registries over
    /// the same JSON file still reveal a token only once.
    pub fn consume(&self, token: &str) -> Result<TokenLookup, StoreError> {
        let mut lookup = TokenLookup::NotFound;
        let mut draw_id = None;
        self.store.lock().update_active(&mut |draw| {
            draw_id = Some(draw.id.clone());
            match draw.assignment_by_token_mut(token) {
                None => false,
                Some(assignment) if assignment.accessed => {
                    lookup = TokenLookup::AlreadyConsumed;
                    false
                }
                Some(assignment) => {
                    assignment.accessed = true;
                    lookup = TokenLookup::Revealed(assignment.clone());
                    true
                }
            }
        })?;

        if let Some(draw_id) = draw_id {
            match lookup {
                TokenLookup::Revealed(_) => info!(event = "token_consumed", draw_id = %draw_id),
                TokenLookup::AlreadyConsumed => warn!(event = "token_refused", draw_id = %draw_id),
                TokenLookup::NotFound => {}
            }
        }
        Ok(lookup)
    }
}
