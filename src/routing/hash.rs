//! routing::hash
//!
//! Hash fragment contract.
//!
//! The address-bar hash selects the granularity on first mount and is
//! appended to every pagination link so that paging keeps the zoom level.
//! The mapping is total: anything other than `#months` or `#years`
//! (including no hash at all) means weeks.

use crate::core::types::Granularity;

/// Map a hash fragment to a granularity.
///
/// The leading `#` is optional.
///
/// # Example
///
/// ```
/// use changelog_timeline::core::types::Granularity;
/// use changelog_timeline::routing::hash::granularity_for_hash;
///
/// assert_eq!(granularity_for_hash(Some("#months")), Granularity::Months);
/// assert_eq!(granularity_for_hash(Some("years")), Granularity::Years);
/// assert_eq!(granularity_for_hash(Some("#decades")), Granularity::Weeks);
/// assert_eq!(granularity_for_hash(None), Granularity::Weeks);
/// ```
pub fn granularity_for_hash(hash: Option<&str>) -> Granularity {
    match hash.map(|h| h.strip_prefix('#').unwrap_or(h)) {
        None | Some("") => Granularity::Weeks,
        Some(name) => Granularity::parse_lenient(name),
    }
}

/// Hash suffix for a granularity, e.g. `#months`.
pub fn hash_for(view: Granularity) -> String {
    format!("#{}", view.as_str())
}

/// Fragment of a URL without the `#`, if present.
pub fn fragment_of(url: &str) -> Option<&str> {
    url.split_once('#').map(|(_, fragment)| fragment)
}
