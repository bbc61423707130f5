//! state::timeline
//!
//! Current granularity of the feed.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::core::types::{Granularity, TypeError};

/// Session-wide granularity cell.
///
/// Writes are atomic and immediately visible to every reader; the last
/// write wins.
///
/// # Example
///
/// ```
/// use changelog_timeline::core::types::Granularity;
/// use changelog_timeline::state::TimelineState;
///
/// let timeline = TimelineState::default();
/// assert_eq!(timeline.view(), Granularity::Weeks);
///
/// timeline.set_view(Granularity::Years);
/// assert_eq!(timeline.view(), Granularity::Years);
///
/// assert!(timeline.set_view_named("fortnights").is_err());
/// assert_eq!(timeline.view(), Granularity::Years);
/// ```
#[derive(Debug)]
pub struct TimelineState {
    view: AtomicU8,
}

impl TimelineState {
    pub fn new(initial: Granularity) -> Self {
        Self {
            view: AtomicU8::new(initial.to_index()),
        }
    }

    /// Current granularity.
    pub fn view(&self) -> Granularity {
        Granularity::from_index(self.view.load(Ordering::SeqCst))
    }

    /// Replace the granularity. Setting the current value is a no-op.
    pub fn set_view(&self, view: Granularity) {
        let previous = Granularity::from_index(self.view.swap(view.to_index(), Ordering::SeqCst));
        if previous != view {
            tracing::debug!(from = %previous, to = %view, "timeline view changed");
        }
    }

    /// Set the granularity from an untyped name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidGranularity` for anything other than
    /// `weeks`, `months` or `years`; the current view is left unchanged.
    pub fn set_view_named(&self, name: &str) -> Result<(), TypeError> {
        let view = name.parse()?;
        self.set_view(view);
        Ok(())
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new(Granularity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_view() {
        assert_eq!(TimelineState::default().view(), Granularity::Weeks);
        assert_eq!(
            TimelineState::new(Granularity::Months).view(),
            Granularity::Months
        );
    }

    #[test]
    fn set_view_is_idempotent() {
        let timeline = TimelineState::default();
        timeline.set_view(Granularity::Months);
        timeline.set_view(Granularity::Months);
        assert_eq!(timeline.view(), Granularity::Months);
    }

    #[test]
    fn invalid_name_leaves_view_unchanged() {
        let timeline = TimelineState::new(Granularity::Years);
        let err = timeline.set_view_named("days").unwrap_err();
        assert_eq!(err, TypeError::InvalidGranularity("days".into()));
        assert_eq!(timeline.view(), Granularity::Years);
    }

    #[test]
    fn writes_visible_across_threads() {
        let timeline = std::sync::Arc::new(TimelineState::default());
        let writer = std::sync::Arc::clone(&timeline);
        std::thread::spawn(move || writer.set_view(Granularity::Years))
            .join()
            .unwrap();
        assert_eq!(timeline.view(), Granularity::Years);
    }
}
