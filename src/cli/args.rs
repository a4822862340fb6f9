// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// CG - Commit Message Gatekeeper
///
/// Validates the commit message a commit-msg hook hands over and exits
/// non-zero when the message would break changelog generation.
#[derive(Parser, Debug)]
#[command(name = "cg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message gatekeeper", long_about = None)]
pub struct Cli {
    /// Path to the file containing the candidate commit message
    /// (supplied by the commit-msg hook as its first argument)
    pub message_file: PathBuf,
}
