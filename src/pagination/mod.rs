//! pagination
//!
//! Discrete page boundaries for the active granularity.
//!
//! # Rules
//!
//! - In an infinite-scrolling view there are no discrete pages at all.
//! - Otherwise a further page exists while
//!   `page < floor(total_items[view] / items_per_page)`.
//! - Page 0 with a further page exposes a single "load more" link to page 1.
//! - Any other page exposes "previous" (page - 1) when `page > 0` and
//!   "next" (page + 1) when a further page exists, independently.
//! - Every link carries the current granularity as its hash so that paging
//!   keeps the zoom level.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::core::types::{Granularity, InfiniteScrollingView, TotalItems};
use crate::routing::hash::hash_for;

/// Whether a page exists after `page` for the given view.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use changelog_timeline::core::types::{Granularity, InfiniteScrollingView, TotalItems};
/// use changelog_timeline::pagination::has_more_page;
///
/// let per_page = NonZeroUsize::new(10).unwrap();
/// let totals = TotalItems::new(25, 4, 1);
///
/// assert!(has_more_page(1, per_page, &totals, Granularity::Weeks, None));
/// assert!(!has_more_page(2, per_page, &totals, Granularity::Weeks, None));
/// assert!(!has_more_page(0, per_page, &totals, Granularity::Weeks, Some(InfiniteScrollingView::Year)));
/// ```
pub fn has_more_page(
    page: usize,
    items_per_page: NonZeroUsize,
    totals: &TotalItems,
    view: Granularity,
    infinite: Option<InfiniteScrollingView>,
) -> bool {
    if infinite.is_some() {
        return false;
    }
    page < totals.get(view) / items_per_page.get()
}

/// Inputs supplied by the page loader for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInputs {
    pub page: usize,
    pub items_per_page: NonZeroUsize,
    pub totals: TotalItems,
    pub infinite: Option<InfiniteScrollingView>,
}

impl PaginationInputs {
    /// Evaluate the inputs against the current view.
    pub fn evaluate(&self, view: Granularity) -> Pagination {
        let has_more =
            has_more_page(self.page, self.items_per_page, &self.totals, view, self.infinite);
        Pagination {
            page: self.page,
            view,
            has_more,
            controls: PaginationControls::derive(self.page, has_more, view, self.infinite),
        }
    }
}

/// Result of evaluating pagination for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub view: Granularity,
    pub has_more: bool,
    pub controls: PaginationControls,
}

/// A link to another page of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
}

impl PageLink {
    /// Link to `page`, keeping `view` in the hash.
    ///
    /// ```
    /// use changelog_timeline::core::types::Granularity;
    /// use changelog_timeline::pagination::PageLink;
    ///
    /// assert_eq!(PageLink::new(3, Granularity::Months).href, "/page/3#months");
    /// ```
    pub fn new(page: usize, view: Granularity) -> Self {
        Self {
            page,
            href: format!("/page/{}{}", page, hash_for(view)),
        }
    }
}

/// Navigation controls the renderer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationControls {
    /// Continuous scrolling; no discrete controls
    Hidden,
    /// First page with more to show
    LoadMore { link: PageLink },
    /// Previous and/or next, each present independently
    Pager {
        previous: Option<PageLink>,
        next: Option<PageLink>,
    },
}

impl PaginationControls {
    /// Derive the controls for `page`.
    pub fn derive(
        page: usize,
        has_more: bool,
        view: Granularity,
        infinite: Option<InfiniteScrollingView>,
    ) -> Self {
        if infinite.is_some() {
            return PaginationControls::Hidden;
        }

        if page == 0 && has_more {
            return PaginationControls::LoadMore {
                link: PageLink::new(1, view),
            };
        }

        PaginationControls::Pager {
            previous: (page > 0).then(|| PageLink::new(page - 1, view)),
            next: has_more.then(|| PageLink::new(page + 1, view)),
        }
    }

    /// All links, in display order.
    pub fn links(&self) -> Vec<&PageLink> {
        match self {
            PaginationControls::Hidden => Vec::new(),
            PaginationControls::LoadMore { link } => vec![link],
            PaginationControls::Pager { previous, next } => {
                previous.iter().chain(next.iter()).collect()
            }
        }
    }
}
