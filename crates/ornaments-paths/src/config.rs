use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Optional bounds on a search. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Stop after this many node expansions.
    pub max_expansions: Option<usize>,
    /// Stop once the search has run this long. Checked once per iteration.
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    /// Stop with [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit)
    /// after `limit` expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Stop with [`PathError::TimedOut`](crate::PathError::TimedOut) once `limit` has elapsed.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Whether any bound is configured.
    pub fn is_bounded(&self) -> bool {
        self.max_expansions.is_some() || self.time_limit.is_some()
    }
}

/// Shared cancellation switch for running searches.
///
/// Clones share the same flag; raising it from any thread stops every search
/// holding a clone at its next iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// A lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag; searches holding it stop at their next iteration.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Lower the flag so the next searches run normally.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Whether the flag is raised.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default()
            .with_max_expansions(500)
            .with_time_limit(Duration::from_millis(250));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_default_to_unbounded() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"max_expansions": 3}"#).unwrap();
        assert_eq!(cfg.max_expansions, Some(3));
        assert_eq!(cfg.time_limit, None);
    }
}
