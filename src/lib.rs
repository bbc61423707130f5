//! changelog-timeline - Timeline view and pagination state for a zoomable changelog feed
//!
//! A changelog feed can be browsed at three zoom levels: weeks, months and
//! years. This crate owns the small state machine behind that: which zoom
//! level is active, whether a navigation is in flight, whether the next page
//! should animate in, how the active level follows the URL, and where the
//! feed's page boundaries fall.
//!
//! # Architecture
//!
//! - [`state`] - Per-session stores for view, loading and animation
//! - [`routing`] - Route synchronizer driving the stores from navigation
//! - [`pagination`] - Page boundaries and pagination links
//! - [`layout`] - Non-visual layout decisions (title, chrome, entrance)
//! - [`feed`] - Month buckets from the data loader
//! - [`core`] - Domain types and configuration
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - User-facing output
//!
//! # Invariants
//!
//! 1. The view is always one of weeks, months or years
//! 2. Every navigation that starts also ends with the loading flag cleared
//! 3. A pending entrance animation is consumed at most once
//! 4. Pagination links always carry the current view as their hash

pub mod cli;
pub mod core;
pub mod feed;
pub mod layout;
pub mod pagination;
pub mod routing;
pub mod state;
pub mod ui;
