//! state::animate
//!
//! Single-slot "play the entrance animation" mailbox.
//!
//! # Design
//!
//! The slot holds at most one pending animation. Whoever triggers an
//! animated page transition arms it; the component that plays the entrance
//! animation consumes it with [`AnimatePageState::take_and_reset`]. Arming an
//! already-armed slot does not queue a second animation, and a consumed slot
//! stays empty until it is armed again.

use std::sync::atomic::{AtomicBool, Ordering};

/// Consume-once animation flag.
///
/// # Example
///
/// ```
/// use changelog_timeline::state::AnimatePageState;
///
/// let animate = AnimatePageState::default();
/// assert!(animate.request());
/// assert!(!animate.request()); // already pending
///
/// assert!(animate.take_and_reset());
/// assert!(!animate.take_and_reset());
/// assert!(!animate.animate_page());
/// ```
#[derive(Debug, Default)]
pub struct AnimatePageState {
    pending: AtomicBool,
}

impl AnimatePageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the slot without consuming it.
    pub fn animate_page(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Overwrite the slot.
    pub fn set_animate_page(&self, animate: bool) {
        self.pending.store(animate, Ordering::SeqCst);
    }

    /// Arm the slot.
    ///
    /// Returns `false` if an animation was already pending; the slot stays
    /// armed either way.
    pub fn request(&self) -> bool {
        let was_pending = self.pending.swap(true, Ordering::SeqCst);
        if was_pending {
            tracing::debug!("entrance animation already pending");
        }
        !was_pending
    }

    /// Consume the slot, returning whether an animation was pending.
    pub fn take_and_reset(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let animate = AnimatePageState::new();
        assert!(!animate.animate_page());
        assert!(!animate.take_and_reset());
    }

    #[test]
    fn one_consumption_clears_slot() {
        let animate = AnimatePageState::new();
        animate.set_animate_page(true);
        assert!(animate.animate_page());

        assert!(animate.take_and_reset());
        assert!(!animate.animate_page());
    }

    #[test]
    fn rearming_pending_slot_yields_single_animation() {
        let animate = AnimatePageState::new();
        assert!(animate.request());
        assert!(!animate.request());

        assert!(animate.take_and_reset());
        assert!(!animate.take_and_reset());
    }

    #[test]
    fn peek_does_not_consume() {
        let animate = AnimatePageState::new();
        animate.request();
        assert!(animate.animate_page());
        assert!(animate.animate_page());
        assert!(animate.take_and_reset());
    }

    #[test]
    fn set_false_cancels_pending() {
        let animate = AnimatePageState::new();
        animate.request();
        animate.set_animate_page(false);
        assert!(!animate.take_and_reset());
    }
}
