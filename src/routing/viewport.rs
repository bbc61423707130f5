//! routing::viewport
//!
//! Scroll side effects of navigation.
//!
//! # Design
//!
//! The synchronizer never touches a window directly. Whatever hosts the
//! feed implements [`Viewport`]; tests and the CLI use the in-memory
//! implementations below.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Host scroll control.
pub trait Viewport: Send + Sync {
    /// Reset the scroll position to the top of the page.
    fn scroll_to_top(&self);
}

/// Viewport that ignores scroll requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewport;

impl Viewport for NoopViewport {
    fn scroll_to_top(&self) {}
}

/// Viewport that counts scroll requests.
///
/// # Example
///
/// ```
/// use changelog_timeline::routing::viewport::{RecordingViewport, Viewport};
///
/// let viewport = RecordingViewport::new();
/// viewport.scroll_to_top();
/// assert_eq!(viewport.scroll_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingViewport {
    scrolls: AtomicUsize,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scroll-to-top requests received.
    pub fn scroll_count(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn scroll_to_top(&self) {
        (**self).scroll_to_top();
    }
}

impl<V: Viewport + ?Sized> Viewport for std::sync::Arc<V> {
    fn scroll_to_top(&self) {
        (**self).scroll_to_top();
    }
}
