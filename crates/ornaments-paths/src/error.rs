use std::time::Duration;

use thiserror::Error;

/// Errors reported by [`PathFinder::find`](crate::PathFinder::find).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError<N> {
    /// The frontier ran dry before reaching the goal.
    #[error("no path from {start:?} to {goal:?}")]
    NotFound { start: N, goal: N },
    /// Start or goal is not part of the domain.
    #[error("node {0:?} is not part of the domain")]
    UnknownNode(N),
    /// The domain listed a neighbour it has no cost for.
    #[error("domain has no cost for edge {from:?} -> {to:?}")]
    MissingCost { from: N, to: N },
    /// The domain reported a cost below zero.
    #[error("domain reported a negative cost for edge {from:?} -> {to:?}")]
    NegativeCost { from: N, to: N },
    /// The goal was not reached and some path towards it overflowed the
    /// cost type.
    #[error("path cost overflowed at {node:?}")]
    CostOverflow { node: N },
    /// The configured expansion budget was used up.
    #[error("search stopped after {limit} expansions")]
    ExpansionLimit { limit: usize },
    /// The configured time limit elapsed.
    #[error("search timed out after {limit:?}")]
    TimedOut { limit: Duration },
    /// The search's [`CancelFlag`](crate::CancelFlag) was raised.
    #[error("search cancelled")]
    Cancelled,
}

impl<N> PathError<N> {
    /// Whether the goal was proven unreachable, as opposed to the search
    /// failing or being stopped early.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
