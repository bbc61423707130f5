//! routing
//!
//! URL contract and navigation synchronization.
//!
//! # Modules
//!
//! - [`hash`] - Hash fragment to granularity mapping
//! - [`url`] - Destination parsing and path inference
//! - [`viewport`] - Scroll side-effect seam
//! - [`synchronizer`] - Mount and navigation lifecycle rules
//!
//! # Design
//!
//! Nothing here depends on a routing library. A host router reports its
//! lifecycle edges through [`NavigationListener`]; the synchronizer turns
//! them into writes on the shared [`crate::state::Session`].

pub mod hash;
pub mod synchronizer;
pub mod url;
pub mod viewport;

pub use synchronizer::{NavigationListener, NavigationOutcome, RouteSynchronizer};
pub use url::{Destination, RouteNames, UrlError};
pub use viewport::{NoopViewport, RecordingViewport, Viewport};
