//! Command-line interface.
//!
//! Called early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use formwiz::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config) {
//!     // a one-shot command ran; exit with its result
//! }
//! // otherwise start the wizard
//! ```

pub mod args;
pub mod inspect;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use inspect::{handle_inspect_command, render_outline};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::startup::FormsConfig;

/// Run a one-shot CLI command.
///
/// Returns `None` for [`CliCommand::Fill`], which starts the TUI instead.
/// The `Version` command never returns.
pub fn run_cli_command(command: &CliCommand, config: &FormsConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Inspect { form_id, .. } => Some(handle_inspect_command(form_id, config)),
        CliCommand::Invalid(reason) => Some(Err(eyre!("{}\n\n{}", reason, USAGE))),
        CliCommand::Fill { .. } => None,
    }
}

/// The `--api` override carried by a command, if any.
pub fn api_override(command: &CliCommand) -> Option<&str> {
    match command {
        CliCommand::Fill { api_url, .. } | CliCommand::Inspect { api_url, .. } => {
            api_url.as_deref()
        }
        _ => None,
    }
}
