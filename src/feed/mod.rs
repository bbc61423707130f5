//! feed
//!
//! Presentation-independent handling of loaded changelog data.
//!
//! # Modules
//!
//! - [`months`] - Month buckets: ordering, labels, previews, drill-down

pub mod months;
