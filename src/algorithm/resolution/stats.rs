//! Resolution counters

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// Counters accumulated across resolutions, safe to update concurrently
#[derive(Debug, Default)]
pub struct ResolutionStats {
    resolved_by_id: AtomicUsize,
    resolved_by_fallback: AtomicUsize,
    unresolved: AtomicUsize,
}

impl ResolutionStats {
    /// Count a reference resolved through its id
    pub fn record_resolved_by_id(&self) {
        self.resolved_by_id.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a reference resolved through the fallback search
    pub fn record_resolved_by_fallback(&self) {
        self.resolved_by_fallback.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a reference that could not be resolved
    pub fn record_unresolved(&self) {
        self.unresolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Current values
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            resolved_by_id: self.resolved_by_id.load(Ordering::Relaxed),
            resolved_by_fallback: self.resolved_by_fallback.load(Ordering::Relaxed),
            unresolved: self.unresolved.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// References resolved through their id
    pub resolved_by_id: usize,
    /// References resolved through the fallback search
    pub resolved_by_fallback: usize,
    /// References left unresolved
    pub unresolved: usize,
}

impl StatsSnapshot {
    /// Total references attempted
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.resolved_by_id + self.resolved_by_fallback + self.unresolved
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} resolved by id, {} by fallback, {} unresolved",
            self.resolved_by_id, self.resolved_by_fallback, self.unresolved
        )
    }
}
