//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Drives the timeline core
//! 3. Formats and displays output

mod completion;
mod config_cmd;
mod months;
mod paginate;
mod simulate;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{init as config_init, list as config_list, path as config_path};
pub use months::months;
pub use paginate::{paginate, PaginateArgs};
pub use simulate::{replay, simulate, SimEvent, SimStep};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Paginate {
            page,
            per_page,
            weeks,
            months,
            years,
            view,
            infinite,
            json,
        } => paginate::paginate(
            ctx,
            &PaginateArgs {
                page,
                per_page,
                weeks,
                months,
                years,
                view,
                infinite,
            },
            json,
        ),
        Command::Simulate { hash, events, json } => {
            simulate::simulate(ctx, hash.as_deref(), &events, json)
        }
        Command::Months { file, select, json } => {
            months::months(ctx, &file, select.as_deref(), json)
        }
        Command::Config { action } => match action {
            ConfigAction::List => config_cmd::list(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
            ConfigAction::Init { force } => config_cmd::init(ctx, force),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
