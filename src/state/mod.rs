//! state
//!
//! Per-session state stores and the factory that wires them together.
//!
//! # Modules
//!
//! - [`timeline`] - Current granularity
//! - [`page_status`] - Navigation-in-flight flag
//! - [`animate`] - Consume-once entrance animation slot
//!
//! # Design
//!
//! There are no ambient singletons. A [`Session`] constructs one instance of
//! each store and is cloned (cheaply, via `Arc`) into every reader and writer:
//! the route synchronizer, user-interaction handlers and the layout model.
//! Tests build a fresh `Session` each, so no state leaks between them.

pub mod animate;
pub mod page_status;
pub mod timeline;

pub use animate::AnimatePageState;
pub use page_status::PageStatusState;
pub use timeline::TimelineState;

use std::sync::Arc;

use serde::Serialize;

use crate::core::types::Granularity;

/// Shared handles to the three stores of one browsing session.
///
/// # Example
///
/// ```
/// use changelog_timeline::core::types::Granularity;
/// use changelog_timeline::state::Session;
///
/// let session = Session::new();
/// let handler_view = session.clone();
///
/// handler_view.timeline().set_view(Granularity::Months);
/// assert_eq!(session.timeline().view(), Granularity::Months);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    timeline: Arc<TimelineState>,
    page_status: Arc<PageStatusState>,
    animate: Arc<AnimatePageState>,
}

impl Session {
    /// Create a session starting in the default (weeks) view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session starting in the given view.
    pub fn with_view(view: Granularity) -> Self {
        Self {
            timeline: Arc::new(TimelineState::new(view)),
            ..Self::default()
        }
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    pub fn page_status(&self) -> &PageStatusState {
        &self.page_status
    }

    pub fn animate(&self) -> &AnimatePageState {
        &self.animate
    }

    /// Read all three stores at once.
    ///
    /// Does not consume the animation slot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.timeline.view(),
            is_loading: self.page_status.is_loading(),
            animate_page: self.animate.animate_page(),
        }
    }
}

/// Point-in-time copy of a session's state, for renderers and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub view: Granularity,
    pub is_loading: bool,
    pub animate_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_stores() {
        let session = Session::new();
        let other = session.clone();

        other.page_status().set_is_loading(true);
        other.animate().request();
        other.timeline().set_view(Granularity::Years);

        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                view: Granularity::Years,
                is_loading: true,
                animate_page: true,
            }
        );
    }

    #[test]
    fn separate_sessions_are_isolated() {
        let a = Session::new();
        let b = Session::new();

        a.timeline().set_view(Granularity::Months);
        assert_eq!(b.timeline().view(), Granularity::Weeks);
    }

    #[test]
    fn with_view_sets_initial_granularity() {
        let session = Session::with_view(Granularity::Months);
        assert_eq!(session.snapshot().view, Granularity::Months);
        assert!(!session.snapshot().is_loading);
    }

    #[test]
    fn snapshot_does_not_consume_animation() {
        let session = Session::new();
        session.animate().request();
        assert!(session.snapshot().animate_page);
        assert!(session.snapshot().animate_page);
    }
}
