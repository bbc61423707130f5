//! Property-based tests for the timeline core.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::num::NonZeroUsize;

use proptest::prelude::*;

use changelog_timeline::core::types::{Granularity, InfiniteScrollingView, TotalItems};
use changelog_timeline::pagination::{has_more_page, PaginationControls, PaginationInputs};
use changelog_timeline::routing::hash::{granularity_for_hash, hash_for};
use changelog_timeline::routing::{RouteNames, RouteSynchronizer};
use changelog_timeline::state::Session;

fn granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Weeks),
        Just(Granularity::Months),
        Just(Granularity::Years),
    ]
}

fn infinite_view() -> impl Strategy<Value = InfiniteScrollingView> {
    prop_oneof![
        Just(InfiniteScrollingView::Year),
        Just(InfiniteScrollingView::Month),
    ]
}

fn totals() -> impl Strategy<Value = TotalItems> {
    (0usize..500, 0usize..200, 0usize..50).prop_map(|(w, m, y)| TotalItems::new(w, m, y))
}

fn per_page() -> impl Strategy<Value = NonZeroUsize> {
    (1usize..50).prop_map(|n| NonZeroUsize::new(n).unwrap())
}

/// Root-relative paths built from a small alphabet of route segments.
fn route_path() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just("changelogs".to_string()),
        Just("years".to_string()),
        Just("months".to_string()),
        Just("page".to_string()),
        "[0-9]{1,4}",
        "[a-z]{1,8}",
    ];
    prop::collection::vec(segment, 0..6).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    /// A further page exists exactly while page < floor(total / per_page).
    #[test]
    fn has_more_matches_floor_division(
        page in 0usize..100,
        ipp in per_page(),
        totals in totals(),
        view in granularity(),
    ) {
        let expected = page < totals.get(view) / ipp.get();
        prop_assert_eq!(has_more_page(page, ipp, &totals, view, None), expected);
    }

    /// Infinite scrolling never has a further page and never shows controls.
    #[test]
    fn infinite_scrolling_has_no_pages(
        page in 0usize..100,
        ipp in per_page(),
        totals in totals(),
        view in granularity(),
        infinite in infinite_view(),
    ) {
        prop_assert!(!has_more_page(page, ipp, &totals, view, Some(infinite)));

        let result = PaginationInputs { page, items_per_page: ipp, totals, infinite: Some(infinite) }
            .evaluate(view);
        prop_assert_eq!(result.controls, PaginationControls::Hidden);
    }

    /// Every link carries the current view and points at an adjacent page.
    #[test]
    fn links_are_adjacent_and_keep_view(
        page in 0usize..100,
        ipp in per_page(),
        totals in totals(),
        view in granularity(),
    ) {
        let result = PaginationInputs { page, items_per_page: ipp, totals, infinite: None }
            .evaluate(view);
        let suffix = hash_for(view);

        for link in result.controls.links() {
            prop_assert!(link.href.ends_with(&suffix));
            prop_assert!(link.page + 1 == page || link.page == page + 1);
        }
        // "next" exists exactly when there is a further page.
        let has_next = result.controls.links().iter().any(|l| l.page == page + 1);
        prop_assert_eq!(has_next, result.has_more);
    }

    /// The hash mapping is total and stable under re-encoding.
    #[test]
    fn hash_mapping_is_total_and_idempotent(hash in ".{0,12}") {
        let view = granularity_for_hash(Some(&hash));
        prop_assert_eq!(granularity_for_hash(Some(&hash_for(view))), view);
    }

    /// The view's own hash maps back to the view.
    #[test]
    fn hash_for_round_trips(view in granularity()) {
        prop_assert_eq!(granularity_for_hash(Some(&hash_for(view))), view);
    }

    /// Start then complete for one URL leaves loading off and the inferred view set.
    #[test]
    fn start_then_complete_settles(path in route_path(), initial in granularity()) {
        let session = Session::with_view(initial);
        let sync = RouteSynchronizer::new(session.clone(), RouteNames::default());

        sync.start(&path);
        prop_assert!(session.page_status().is_loading());
        let outcome = sync.complete(&path);

        prop_assert!(!session.page_status().is_loading());
        prop_assert_eq!(session.timeline().view(), outcome.inferred.unwrap_or(initial));
    }

    /// Path inference never selects years.
    #[test]
    fn inference_never_yields_years(path in route_path()) {
        let session = Session::with_view(Granularity::Weeks);
        let sync = RouteSynchronizer::new(session.clone(), RouteNames::default());

        let outcome = sync.complete(&path);
        prop_assert_ne!(outcome.inferred, Some(Granularity::Years));
        prop_assert_ne!(session.timeline().view(), Granularity::Years);
    }
}
