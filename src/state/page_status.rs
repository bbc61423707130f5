//! state::page_status
//!
//! Navigation-in-flight flag for loading indicators.

use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a route transition is in flight.
///
/// Set at navigation start and cleared at completion or failure. The flag
/// has no side effects of its own.
#[derive(Debug, Default)]
pub struct PageStatusState {
    is_loading: AtomicBool,
}

impl PageStatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    pub fn set_is_loading(&self, loading: bool) {
        self.is_loading.store(loading, Ordering::SeqCst);
    }
}
