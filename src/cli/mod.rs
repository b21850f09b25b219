//! Command-line interface.
//!
//! Handles `--version` and `--help` before the terminal is touched and
//! turns the remaining flags into [`CliOptions`].
//!
//! ```ignore
//! use resume::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(options) = run_cli_command(command) {
//!     // start the viewer
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions, USAGE};
pub use version::{handle_version_command, VERSION};

/// Run an informational command, or hand back the options to run with.
///
/// `Version` and `Help` never return.
pub fn run_cli_command(command: CliCommand) -> Option<CliOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            std::process::exit(0)
        }
        CliCommand::Run(options) => Some(options),
    }
}
