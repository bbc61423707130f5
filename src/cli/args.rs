//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the default locations
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::core::types::{Granularity, InfiniteScrollingView};

/// clt - Timeline view and pagination state for a zoomable changelog feed
#[derive(Parser, Debug)]
#[command(name = "clt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute pagination controls for a page of the feed
    #[command(
        name = "paginate",
        long_about = "Compute whether a further page exists and which controls to show.\n\n\
            A further page exists while page < floor(total / per-page), using the \
            total for the active view. Page 0 with more pages shows a single \
            'load more' link; other pages show 'previous' and 'next' independently. \
            In an infinite-scrolling view no controls are shown.",
        after_help = "\
WORKFLOW EXAMPLES:
    # First page of a 25-week feed, 10 per page
    clt paginate --page 0 --per-page 10 --weeks 25

    # Same feed zoomed out to months
    clt paginate --page 1 --weeks 25 --months 14 --view months

    # Machine-readable output
    clt paginate --page 2 --weeks 25 --json"
    )]
    Paginate {
        /// Current page index (0-based)
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Items per page (defaults to the configured value)
        #[arg(long, value_name = "N")]
        per_page: Option<NonZeroUsize>,

        /// Number of week buckets
        #[arg(long, default_value_t = 0)]
        weeks: usize,

        /// Number of month buckets
        #[arg(long, default_value_t = 0)]
        months: usize,

        /// Number of year buckets
        #[arg(long, default_value_t = 0)]
        years: usize,

        /// Active view (defaults to the configured start view)
        #[arg(long)]
        view: Option<Granularity>,

        /// Infinite-scrolling mode (year or month)
        #[arg(long, value_name = "MODE")]
        infinite: Option<InfiniteScrollingView>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay mount and navigation events against a fresh session
    #[command(
        name = "simulate",
        long_about = "Replay a sequence of events against a fresh session and print the \
            state after each one.\n\n\
            The page is mounted first with --hash. Events:\n  \
            start:<url>     navigation start\n  \
            complete:<url>  navigation complete\n  \
            nav:<url>       start followed by complete\n  \
            error:<url>     navigation failed\n  \
            select:<view>   direct view selection (weeks, months, years)\n  \
            animate         arm the entrance animation\n  \
            consume         consume the entrance animation",
        after_help = "\
WORKFLOW EXAMPLES:
    # Mount on the months hash
    clt simulate --hash '#months'

    # Drill into a year, then a month
    clt simulate nav:/changelogs/2023/years nav:/changelogs/2023/years/03/months

    # Overlapping navigations: completion wins
    clt simulate start:/a/years start:/a/years/1/months complete:/a/years/1/months complete:/a/years"
    )]
    Simulate {
        /// Address-bar hash at mount (e.g. '#months')
        #[arg(long)]
        hash: Option<String>,

        /// Events to replay, in order
        #[arg(value_name = "EVENT")]
        events: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List month buckets from a loader JSON file
    #[command(
        name = "months",
        long_about = "Read month buckets (month key to entries) from a JSON file and \
            list them newest first with their preview layout.\n\n\
            With --select, also drill the chosen month down into weeks and \
            print the weekly page link.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List months
    clt months data/months.json

    # Drill into March 2023
    clt months data/months.json --select 2023-03"
    )]
    Months {
        /// Loader output (JSON object of month key to entries)
        file: PathBuf,

        /// Month key to select
        #[arg(long, value_name = "KEY")]
        select: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create configuration
    #[command(
        name = "config",
        long_about = "Inspect the effective configuration or write a default config file.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show effective values
    clt config list

    # Where the config would be written
    clt config path

    # Write defaults to the canonical location
    clt config init"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for clt commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    clt completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    clt completion zsh >> ~/.zshrc

    # Fish
    clt completion fish > ~/.config/fish/completions/clt.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// List effective configuration values
    List,
    /// Print the path of the loaded (or canonical) config file
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
