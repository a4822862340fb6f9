// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message vocabulary.

mod types;

pub use types::CommitType;
