// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CG - Commit Message Gatekeeper
//!
//! Reads the commit message file a commit-msg hook passes as `$1` and
//! exits 0 (accepted) or 1 (rejected, diagnostic on stderr).

use cg::cli::{run, Cli};
use cg::rules::Classification;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging();

    // Classify the message and map the outcome to an exit status
    match run(cli) {
        Ok(Classification::Accepted) => {}
        Ok(Classification::Rejected { diagnostic }) => {
            eprintln!("{}", diagnostic);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging/tracing.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
