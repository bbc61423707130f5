//! clt - command-line front end for changelog-timeline

use std::process::ExitCode;

use changelog_timeline::cli;
use changelog_timeline::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
