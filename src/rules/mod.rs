// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message classification.
//!
//! A message is accepted when it matches either the release shorthand or
//! the conventional commit header grammar; everything else is rejected
//! with a formatted diagnostic.

mod diagnostic;
mod matcher;

pub use diagnostic::rejection_diagnostic;
pub use matcher::{classify, Classification};
