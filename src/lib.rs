// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CG - Commit Message Gatekeeper
//!
//! A commit-msg hook backend that accepts or rejects a proposed commit
//! message so automated changelog generation stays machine-parseable.
//!
//! A message passes the gate if it is either a release tag shorthand
//! (`v` followed by a digit) or a conventional commit header:
//!
//! ```text
//! (revert: )?<type>(<scope>)?: <subject>
//! ```
//!
//! # Example
//!
//! ```
//! use cg::rules::{classify, Classification};
//!
//! assert!(matches!(classify("feat: add 'comments' option"), Classification::Accepted));
//! assert!(matches!(classify("v2.0.0"), Classification::Accepted));
//! assert!(matches!(classify("update stuff"), Classification::Rejected { .. }));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use commit::CommitType;
pub use error::{CgError, Result};
pub use rules::Classification;
