// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The closed set of accepted commit types.
//!
//! The changelog pipeline groups entries by these tokens, so the set is a
//! closed enumeration: adding or removing an accepted type is a one-line
//! change here, and the matcher derives its alternation from [`CommitType::all`]
//! rather than duplicating the list.

/// Commit type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Dx,
    Refactor,
    Perf,
    Test,
    Workflow,
    Build,
    Ci,
    Chore,
    Types,
    Wip,
    Release,
    Deps,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Dx => "dx",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Workflow => "workflow",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Types => "types",
            CommitType::Wip => "wip",
            CommitType::Release => "release",
            CommitType::Deps => "deps",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Dx => "Developer experience improvements",
            CommitType::Refactor => "Code refactoring (no feature/fix)",
            CommitType::Perf => "Performance improvements",
            CommitType::Test => "Adding or updating tests",
            CommitType::Workflow => "Workflow changes",
            CommitType::Build => "Build system changes",
            CommitType::Ci => "CI configuration changes",
            CommitType::Chore => "Auxiliary tool and maintenance changes",
            CommitType::Types => "Type definition changes",
            CommitType::Wip => "Work in progress",
            CommitType::Release => "Release commit",
            CommitType::Deps => "Dependency updates",
        }
    }

    /// Get all commit types, in the order they appear in the matcher.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Dx,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Workflow,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Types,
            CommitType::Wip,
            CommitType::Release,
            CommitType::Deps,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    // Exact tokens only. Aliases like "feature" are not part of the
    // convention and must not pass the gate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
