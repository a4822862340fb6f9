// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The two accepted message grammars.

use crate::commit::CommitType;
use lazy_static::lazy_static;
use regex::Regex;

use super::diagnostic::rejection_diagnostic;

lazy_static! {
    /// Release tag shorthand: `v` followed by a decimal digit.
    static ref RELEASE_REGEX: Regex = Regex::new(r"^v\d").unwrap();

    /// Conventional commit header. Prefix match by design: the subject only
    /// needs a 1-50 character span after the separator, trailing content is
    /// the changelog generator's problem, not the gate's.
    static ref CONVENTIONAL_REGEX: Regex = {
        let types = CommitType::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"^(revert: )?({})(\([^)]+\))?: .{{1,50}}", types)).unwrap()
    };
}

/// Outcome of classifying a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The message satisfies one of the accepted grammars.
    Accepted,
    /// The message satisfies neither grammar; `diagnostic` is ready to be
    /// written to stderr.
    Rejected { diagnostic: String },
}

impl Classification {
    /// Whether the message passed the gate.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Accepted)
    }
}

/// Classify a trimmed commit message.
///
/// Pure function of the message text: same input, same outcome.
pub fn classify(message: &str) -> Classification {
    if RELEASE_REGEX.is_match(message) || CONVENTIONAL_REGEX.is_match(message) {
        Classification::Accepted
    } else {
        Classification::Rejected {
            diagnostic: rejection_diagnostic(),
        }
    }
}
