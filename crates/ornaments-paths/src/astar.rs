use std::collections::HashMap;
use std::time::Instant;

use crate::config::{CancelFlag, SearchConfig};
use crate::cost::Cost;
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::path::Path;
use crate::traits::{Domain, Heuristic, Step};

/// Runs A* searches with an optional [`SearchConfig`] and [`CancelFlag`].
///
/// A `PathFinder` holds no search state: every call to [`find`](Self::find)
/// builds its score maps and frontier from scratch and drops them on return,
/// so one finder can serve any number of searches, from any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: SearchConfig,
    cancel: Option<CancelFlag>,
}

/// Per-call working state. Absent scores mean "not discovered yet".
struct SearchState<N, C> {
    came_from: HashMap<N, N>,
    g_score: HashMap<N, C>,
    /// Open nodes keyed by `(f, h)`: lowest total estimate first, then the
    /// node closest to the goal, then the lowest node id.
    frontier: Frontier<N, (C, C)>,
    expanded: usize,
    /// First node whose cost no longer fit the cost type.
    overflowed: Option<N>,
}

impl<N, C> SearchState<N, C>
where
    N: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug,
    C: Cost,
{
    fn new(start: N, h: C) -> Self {
        let mut state = Self {
            came_from: HashMap::new(),
            g_score: HashMap::new(),
            frontier: Frontier::new(),
            expanded: 0,
            overflowed: None,
        };
        state.g_score.insert(start, C::ZERO);
        state.frontier.push(start, (h, h));
        state
    }

    fn note_overflow(&mut self, node: N) {
        log::trace!("astar: cost overflow towards {node:?}");
        self.overflowed.get_or_insert(node);
    }

    /// Walk predecessors back from `goal`; the start has none recorded.
    fn reconstruct(&self, goal: N) -> Vec<N> {
        let mut steps = Vec::new();
        let mut current = goal;
        while let Some(&prev) = self.came_from.get(&current) {
            steps.push(current);
            current = prev;
        }
        steps
    }
}

impl PathFinder {
    /// An unbounded finder without a cancellation flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// A finder that applies the bounds in `config`.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attach a cancellation flag checked once per search iteration.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The bounds applied to every search.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// `predicate` sees every candidate step with its cost and may reject it;
    /// rejected steps are treated as missing edges. Returns
    /// [`PathError::NotFound`] if the goal cannot be reached.
    pub fn find<D, H, P>(
        &self,
        domain: &D,
        heuristic: &H,
        mut predicate: P,
        start: D::Node,
        goal: D::Node,
    ) -> Result<Path<D::Node, D::Cost>, PathError<D::Node>>
    where
        D: Domain + ?Sized,
        H: Heuristic<D::Node, D::Cost> + ?Sized,
        P: FnMut(&Step<D::Node, D::Cost>) -> bool,
    {
        for node in [start, goal] {
            if !domain.contains(node) {
                return Err(PathError::UnknownNode(node));
            }
        }

        if start == goal {
            return Ok(Path::new(start, Vec::new(), D::Cost::ZERO, 0));
        }

        log::debug!("astar: searching {start:?} -> {goal:?}");
        let started = Instant::now();
        let mut state = SearchState::new(start, heuristic.estimate(start, goal));
        let mut nbuf = Vec::with_capacity(8);

        while let Some((current, _)) = state.frontier.pop() {
            self.check_interrupt(started)?;

            if current == goal {
                let cost = state.g_score[&goal];
                log::debug!(
                    "astar: reached {goal:?} at cost {cost:?} after {} expansions",
                    state.expanded
                );
                let steps = state.reconstruct(goal);
                return Ok(Path::new(start, steps, cost, state.expanded));
            }

            if let Some(limit) = self.config.max_expansions {
                if state.expanded >= limit {
                    log::warn!("astar: expansion limit {limit} hit before reaching {goal:?}");
                    return Err(PathError::ExpansionLimit { limit });
                }
            }
            state.expanded += 1;

            let current_g = state.g_score[&current];
            log::trace!("astar: expanding {current:?} (g = {current_g:?})");

            nbuf.clear();
            domain.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                let cost = domain.cost(current, next).ok_or(PathError::MissingCost {
                    from: current,
                    to: next,
                })?;
                if cost < D::Cost::ZERO {
                    return Err(PathError::NegativeCost {
                        from: current,
                        to: next,
                    });
                }

                let step = Step {
                    from: current,
                    to: next,
                    cost,
                };
                if !predicate(&step) {
                    continue;
                }

                // An overflowing cost is worse than any representable one.
                let Some(tentative_g) = current_g.checked_add(cost) else {
                    state.note_overflow(next);
                    continue;
                };
                if let Some(&known) = state.g_score.get(&next) {
                    if tentative_g >= known {
                        continue;
                    }
                }

                let h = heuristic.estimate(next, goal);
                let Some(f) = tentative_g.checked_add(h) else {
                    state.note_overflow(next);
                    continue;
                };
                state.came_from.insert(next, current);
                state.g_score.insert(next, tentative_g);
                state.frontier.push(next, (f, h));
            }
        }

        if let Some(node) = state.overflowed {
            log::debug!("astar: {goal:?} not reached, cost overflowed at {node:?}");
            return Err(PathError::CostOverflow { node });
        }
        log::debug!(
            "astar: {goal:?} unreachable from {start:?} after {} expansions",
            state.expanded
        );
        Err(PathError::NotFound { start, goal })
    }

    fn check_interrupt<N>(&self, started: Instant) -> Result<(), PathError<N>> {
        if let Some(flag) = &self.cancel {
            if flag.is_cancelled() {
                log::warn!("astar: search cancelled");
                return Err(PathError::Cancelled);
            }
        }
        if let Some(limit) = self.config.time_limit {
            if started.elapsed() > limit {
                log::warn!("astar: search timed out after {limit:?}");
                return Err(PathError::TimedOut { limit });
            }
        }
        Ok(())
    }
}

/// Compute the cheapest path from `start` to `goal` with an unbounded
/// [`PathFinder`].
pub fn find<D, H, P>(
    domain: &D,
    heuristic: &H,
    predicate: P,
    start: D::Node,
    goal: D::Node,
) -> Result<Path<D::Node, D::Cost>, PathError<D::Node>>
where
    D: Domain + ?Sized,
    H: Heuristic<D::Node, D::Cost> + ?Sized,
    P: FnMut(&Step<D::Node, D::Cost>) -> bool,
{
    PathFinder::new().find(domain, heuristic, predicate, start, goal)
}
