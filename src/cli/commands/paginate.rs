//! paginate command - Compute pagination controls for one page

use std::num::NonZeroUsize;

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::{Granularity, InfiniteScrollingView, TotalItems};
use crate::layout::Layout;
use crate::pagination::{Pagination, PaginationInputs};
use crate::state::Session;
use crate::ui::output::{self, Verbosity};

/// Page-loader inputs as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PaginateArgs {
    pub page: usize,
    pub per_page: Option<NonZeroUsize>,
    pub weeks: usize,
    pub months: usize,
    pub years: usize,
    pub view: Option<Granularity>,
    pub infinite: Option<InfiniteScrollingView>,
}

#[derive(Debug, Serialize)]
struct PaginateReport {
    title: String,
    items_per_page: usize,
    #[serde(flatten)]
    pagination: Pagination,
}

/// Evaluate pagination for one page and print the controls.
pub fn paginate(ctx: &Context, args: &PaginateArgs, json: bool) -> Result<()> {
    let config = ctx.load_config()?;
    let items_per_page = args.per_page.unwrap_or_else(|| config.items_per_page());
    let session = Session::with_view(args.view.unwrap_or_else(|| config.default_view()));

    let inputs = PaginationInputs {
        page: args.page,
        items_per_page,
        totals: TotalItems::new(args.weeks, args.months, args.years),
        infinite: args.infinite,
    };
    let pagination = inputs.evaluate(session.timeline().view());
    let title = Layout::from_config(&config).meta_title(Some(args.page), args.infinite);

    tracing::debug!(
        page = args.page,
        per_page = items_per_page.get(),
        has_more = pagination.has_more,
        "evaluated pagination"
    );

    if json {
        return output::json(&PaginateReport {
            title,
            items_per_page: items_per_page.get(),
            pagination,
        });
    }

    let verbosity = ctx.verbosity();
    if verbosity != Verbosity::Quiet {
        output::print(format!("title: {}", title), verbosity);
        output::print(
            format!(
                "page {} ({}), has more: {}",
                pagination.page,
                pagination.view,
                if pagination.has_more { "yes" } else { "no" }
            ),
            verbosity,
        );
    }
    // The controls are the result; quiet mode still prints them.
    println!("{}", output::format_controls(&pagination.controls));

    Ok(())
}
