//! Node count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once a maximum number of nodes has been visited.
///
/// # Example
///
/// ```
/// use giftdraw_solver::termination::NodeCountTermination;
///
/// // Give up after visiting 100,000 decision points
/// let termination = NodeCountTermination::new(100_000);
/// ```
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    /// Creates a new node count termination.
    ///
    /// # Arguments
    /// * `limit` - Maximum nodes to visit before terminating
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.stats().nodes_visited > self.limit
    }
}
