// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Execution: read the message file, classify its contents.

use std::fs;

use crate::error::{Result, ResultExt};
use crate::rules::{classify, Classification};

use super::args::Cli;

/// Run the gatekeeper with the given arguments.
///
/// Reads the commit message once, trims surrounding whitespace, and hands
/// it to the classifier. The caller turns the classification into an exit
/// status; read failures propagate as errors.
pub fn run(cli: Cli) -> Result<Classification> {
    let raw = fs::read_to_string(&cli.message_file)
        .context(format!("failed to read {}", cli.message_file.display()))?;
    let message = raw.trim();

    tracing::debug!(path = %cli.message_file.display(), "classifying commit message");

    let outcome = classify(message);
    tracing::debug!(accepted = outcome.is_accepted(), "classification done");

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn run_on(contents: &str) -> Classification {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        let cli = Cli {
            message_file: file.path().to_path_buf(),
        };
        run(cli).unwrap()
    }

    #[test]
    fn test_run_accepts_valid_message() {
        assert!(run_on("feat: add 'comments' option\n").is_accepted());
    }

    #[test]
    fn test_run_trims_before_classifying() {
        assert!(run_on("\n\n  v2.0.0\n").is_accepted());
    }

    #[test]
    fn test_run_rejects_invalid_message() {
        assert!(!run_on("fixed the thing\n").is_accepted());
    }

    #[test]
    fn test_run_rejects_whitespace_only_message() {
        assert!(!run_on("   \n\n").is_accepted());
    }

    #[test]
    fn test_run_propagates_read_failure() {
        let cli = Cli {
            message_file: PathBuf::from("/nonexistent/COMMIT_EDITMSG"),
        };
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("COMMIT_EDITMSG"));
    }
}
