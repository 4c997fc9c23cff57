//! Termination conditions bounding a search.
//!
//! A termination is consulted once per visited node. When it fires the
//! search unwinds and reports `NotFound` with
//! [`NotFoundReason::BudgetExhausted`](crate::search::NotFoundReason).

mod composite;
mod node_count;
mod time;

use std::fmt::Debug;

use giftdraw_config::SearchConfig;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to abandon a search.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        match self {
            Some(t) => t.is_terminated(scope),
            None => false,
        }
    }
}

/// Termination built from a [`SearchConfig`]: node budget OR wall clock.
pub type ConfiguredTermination =
    OrTermination<(Option<NodeCountTermination>, Option<TimeTermination>)>;

impl ConfiguredTermination {
    pub fn from_config(config: &SearchConfig) -> Self {
        OrTermination((
            config.node_limit.map(NodeCountTermination::new),
            config.time_limit().map(TimeTermination::new),
        ))
    }
}
