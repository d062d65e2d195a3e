//! # Title Gate CLI
//!
//! Command-line entry point for validating a pull request title against
//! configured rules.
//!
//! The binary is meant to run inside a GitHub Actions workflow triggered by
//! a pull request event. It reads its inputs from the `INPUT_*` environment
//! variables the runner provides (or from the equivalent flags), loads the
//! triggering event, fetches the current pull request title, and exits
//! non-zero when the title violates the configured policy.
//!
//! # Examples
//!
//! ```bash
//! # As invoked by the workflow runner
//! INPUT_GITHUB_TOKEN=... INPUT_REGEX='^(fix|feat):' title-gate
//!
//! # Explicit flags for local runs
//! title-gate --github-token <token> --regex '^(fix|feat):' --min-length 5
//! ```

#![deny(missing_docs)]

use clap::Parser;
use std::process::{ExitCode, Termination};
use tracing::error;

/// Access to the triggering workflow event.
mod context;

/// Error types specific to the CLI.
mod errors;

/// The validation run itself.
mod run;

use errors::CliError;
use run::GateArgs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line interface structure for Title Gate.
///
/// There is a single operation, so the arguments live directly on the
/// top-level parser rather than behind a subcommand.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The arguments of the validation run
    #[command(flatten)]
    args: GateArgs,
}

/// Main entry point for the Title Gate CLI.
///
/// Initializes logging, parses the arguments, and executes one validation
/// run. The process exit code reflects the outcome: 0 for a passed or
/// exempted run, 1 for a rule violation, and other non-zero codes for
/// configuration, authentication, and network failures.
///
/// The error is reported through [`CliError`]'s `Termination`
/// implementation explicitly; returning a `Result` from `main` would go
/// through std's `Termination` impl for `Result` instead, which exits with
/// a generic failure code and never consults the per-variant mapping.
#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("TITLE_GATE_LOG"))
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    match run::execute(cli.args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error validating pull request title: {}", e);
            e.report()
        }
    }
}
