use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between a search and whoever owns the clock.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    pub best_action: Option<A>,
    pub score: f64,
    /// Deepest fully completed iteration; 0 when none completed.
    pub depth: u32,
    pub nodes: u64,
}

impl<A> SearchResult<A> {
    pub fn empty() -> Self {
        Self {
            best_action: None,
            score: f64::NEG_INFINITY,
            depth: 0,
            nodes: 0,
        }
    }
}
