//! layout
//!
//! Non-visual decisions of the feed's page layout.
//!
//! # Design
//!
//! The renderer draws; this module decides what it draws. Given the
//! session and the page loader's inputs it produces a [`LayoutModel`]:
//! the meta title, whether the timeline switcher and heading appear, which
//! entrance variant the page starts in, and the pagination controls.
//!
//! Rendering a model consumes the pending entrance animation, so two
//! consecutive renders after one animated transition animate once.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::core::config::Config;
use crate::core::types::{InfiniteScrollingView, TotalItems};
use crate::pagination::{Pagination, PaginationControls, PaginationInputs};
use crate::routing::url::RouteNames;
use crate::state::Session;

/// Inputs from the page loader for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInputs {
    /// Route pathname of the page being rendered
    pub pathname: String,
    /// Discrete page index; `None` for pages outside the paged feed
    pub page: Option<usize>,
    pub items_per_page: NonZeroUsize,
    pub totals: TotalItems,
    pub infinite: Option<InfiniteScrollingView>,
}

/// Where the entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entrance {
    /// Fade in from hidden
    Hidden,
    /// Render directly in the visible state
    Visible,
}

/// Everything the renderer needs besides the changelog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutModel {
    /// `None` on detail pages, which manage their own head
    pub meta_title: Option<String>,
    pub is_blog_page: bool,
    pub show_switcher: bool,
    pub show_heading: bool,
    pub entrance: Entrance,
    pub pagination: Option<Pagination>,
}

impl LayoutModel {
    /// Controls to draw under the feed.
    pub fn controls(&self) -> PaginationControls {
        self.pagination
            .as_ref()
            .map(|p| p.controls.clone())
            .unwrap_or(PaginationControls::Hidden)
    }
}

/// Layout settings shared by every page of a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    site_title: String,
    routes: RouteNames,
}

impl Layout {
    pub fn new(site_title: impl Into<String>, routes: RouteNames) -> Self {
        Self {
            site_title: site_title.into(),
            routes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.site_title(), config.route_names())
    }

    /// Whether `pathname` is a per-entry detail page.
    pub fn is_blog_page(&self, pathname: &str) -> bool {
        pathname.starts_with(&format!("/{}/", self.routes.detail))
    }

    /// Page title: `"Page <n> - <site>"` past the first discrete page,
    /// otherwise just the site title.
    pub fn meta_title(&self, page: Option<usize>, infinite: Option<InfiniteScrollingView>) -> String {
        match page {
            Some(n) if n > 0 && infinite.is_none() => format!("Page {} - {}", n, self.site_title),
            _ => self.site_title.clone(),
        }
    }

    /// Build the layout model, consuming the pending entrance animation.
    ///
    /// # Example
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use changelog_timeline::core::types::TotalItems;
    /// use changelog_timeline::layout::{Entrance, Layout, LayoutInputs};
    /// use changelog_timeline::routing::RouteNames;
    /// use changelog_timeline::state::Session;
    ///
    /// let layout = Layout::new("Twine Changelog", RouteNames::default());
    /// let session = Session::new();
    /// session.animate().request();
    ///
    /// let inputs = LayoutInputs {
    ///     pathname: "/page/[page]".to_string(),
    ///     page: Some(2),
    ///     items_per_page: NonZeroUsize::new(10).unwrap(),
    ///     totals: TotalItems::new(25, 3, 1),
    ///     infinite: None,
    /// };
    ///
    /// let model = layout.render(&session, &inputs);
    /// assert_eq!(model.meta_title.as_deref(), Some("Page 2 - Twine Changelog"));
    /// assert_eq!(model.entrance, Entrance::Hidden);
    ///
    /// // The animation was consumed by the first render.
    /// assert_eq!(layout.render(&session, &inputs).entrance, Entrance::Visible);
    /// ```
    pub fn render(&self, session: &Session, inputs: &LayoutInputs) -> LayoutModel {
        let is_blog_page = self.is_blog_page(&inputs.pathname);
        let view = session.timeline().view();

        let entrance = if session.animate().take_and_reset() {
            Entrance::Hidden
        } else {
            Entrance::Visible
        };

        let pagination = inputs.page.map(|page| {
            PaginationInputs {
                page,
                items_per_page: inputs.items_per_page,
                totals: inputs.totals,
                infinite: inputs.infinite,
            }
            .evaluate(view)
        });

        LayoutModel {
            meta_title: (!is_blog_page).then(|| self.meta_title(inputs.page, inputs.infinite)),
            is_blog_page,
            show_switcher: !is_blog_page,
            show_heading: !is_blog_page,
            entrance,
            pagination,
        }
    }
}
