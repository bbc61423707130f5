//! routing::synchronizer
//!
//! Keeps the session's view and loading flag in step with navigation.
//!
//! # Rules
//!
//! 1. **Mount**: the address-bar hash picks the view, once per mounted page.
//! 2. **Navigation start**: loading on, scroll to top unless the target is a
//!    detail view, then path inference.
//! 3. **Navigation complete**: loading off, then the same path inference.
//!    Completion is the authoritative value when navigations overlap.
//! 4. **Navigation error**: loading off, nothing else.
//!
//! # Failure Semantics
//!
//! Handlers never fail. A destination that does not parse is logged and
//! treated as "no inference": the view is left unchanged and no scroll
//! happens. The loading flag is still updated, so a broken URL can never
//! strand the loading indicator.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use super::hash::{fragment_of, granularity_for_hash};
use super::url::{Destination, RouteNames};
use super::viewport::{NoopViewport, Viewport};
use crate::core::types::Granularity;
use crate::state::Session;

/// Navigation lifecycle edges, as reported by a routing layer.
///
/// Routers call these with the destination URL. None of them fail.
pub trait NavigationListener {
    fn on_navigation_start(&self, url: &str);
    fn on_navigation_complete(&self, url: &str);
    fn on_navigation_error(&self, url: &str);
}

/// What a navigation edge did to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationOutcome {
    /// View pushed into the timeline, if the path implied one
    pub inferred: Option<Granularity>,
    /// Whether the viewport was scrolled to the top
    pub scrolled: bool,
}

/// Drives the session stores from mount and navigation events.
///
/// One synchronizer belongs to one mounted page. A full route change that
/// mounts a new page creates a new synchronizer; its mount rule then runs
/// again.
///
/// # Example
///
/// ```
/// use changelog_timeline::core::types::Granularity;
/// use changelog_timeline::routing::{RouteNames, RouteSynchronizer};
/// use changelog_timeline::state::Session;
///
/// let session = Session::new();
/// let sync = RouteSynchronizer::new(session.clone(), RouteNames::default());
///
/// assert!(sync.mount(Some("#years")));
/// assert_eq!(session.timeline().view(), Granularity::Years);
///
/// sync.start("/changelogs/2023/years");
/// assert!(session.page_status().is_loading());
/// sync.complete("/changelogs/2023/years");
/// assert!(!session.page_status().is_loading());
/// assert_eq!(session.timeline().view(), Granularity::Months);
/// ```
#[derive(Debug)]
pub struct RouteSynchronizer<V = NoopViewport> {
    session: Session,
    routes: RouteNames,
    viewport: V,
    mounted: AtomicBool,
}

impl RouteSynchronizer<NoopViewport> {
    /// Create a synchronizer that does not scroll anything.
    pub fn new(session: Session, routes: RouteNames) -> Self {
        Self::with_viewport(session, routes, NoopViewport)
    }
}

impl<V: Viewport> RouteSynchronizer<V> {
    pub fn with_viewport(session: Session, routes: RouteNames, viewport: V) -> Self {
        Self {
            session,
            routes,
            viewport,
            mounted: AtomicBool::new(false),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn routes(&self) -> &RouteNames {
        &self.routes
    }

    /// Apply the mount rule with the current address-bar hash.
    ///
    /// Returns `false` (and changes nothing) if this synchronizer has
    /// already mounted.
    pub fn mount(&self, hash: Option<&str>) -> bool {
        if self
            .mounted
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("mount rule already applied, ignoring hash");
            return false;
        }

        let view = granularity_for_hash(hash);
        tracing::debug!(?hash, %view, "mount");
        self.session.timeline().set_view(view);
        true
    }

    /// Apply the mount rule with the hash taken from a full URL.
    pub fn mount_url(&self, url: &str) -> bool {
        self.mount(fragment_of(url))
    }

    /// Navigation-start rule.
    pub fn start(&self, url: &str) -> NavigationOutcome {
        self.session.page_status().set_is_loading(true);

        let Some(dest) = self.parse(url) else {
            return NavigationOutcome::default();
        };

        let scrolled = !dest.is_detail_view(&self.routes);
        if scrolled {
            self.viewport.scroll_to_top();
        }

        let inferred = self.apply_inference(&dest);
        tracing::debug!(url, ?inferred, scrolled, "navigation start");
        NavigationOutcome { inferred, scrolled }
    }

    /// Navigation-complete rule.
    pub fn complete(&self, url: &str) -> NavigationOutcome {
        self.session.page_status().set_is_loading(false);

        let Some(dest) = self.parse(url) else {
            return NavigationOutcome::default();
        };

        let inferred = self.apply_inference(&dest);
        tracing::debug!(url, ?inferred, "navigation complete");
        NavigationOutcome {
            inferred,
            scrolled: false,
        }
    }

    /// Navigation-error rule.
    pub fn fail(&self, url: &str) {
        self.session.page_status().set_is_loading(false);
        tracing::debug!(url, "navigation failed");
    }

    fn parse(&self, url: &str) -> Option<Destination> {
        match Destination::parse(url) {
            Ok(dest) => Some(dest),
            Err(err) => {
                tracing::warn!(url, %err, "ignoring unparseable navigation target");
                None
            }
        }
    }

    fn apply_inference(&self, dest: &Destination) -> Option<Granularity> {
        let inferred = dest.infer_view(&self.routes);
        if let Some(view) = inferred {
            self.session.timeline().set_view(view);
        }
        inferred
    }
}

impl<V: Viewport> NavigationListener for RouteSynchronizer<V> {
    fn on_navigation_start(&self, url: &str) {
        self.start(url);
    }

    fn on_navigation_complete(&self, url: &str) {
        self.complete(url);
    }

    fn on_navigation_error(&self, url: &str) {
        self.fail(url);
    }
}
