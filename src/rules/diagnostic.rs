// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rejection diagnostic rendering.

use console::style;

/// Format the diagnostic shown when a commit message is rejected.
///
/// Leads with a blank line so the block stands apart from whatever the git
/// hook machinery printed before it. Styling degrades to plain text when
/// stderr is not a terminal.
pub fn rejection_diagnostic() -> String {
    format!(
        "\n  {} {}\n\n{}\n\n    {}\n    {}\n\n{}",
        style(" ERROR ").white().on_red().bold(),
        style("invalid commit message format.").red(),
        style(
            "  Proper commit message format is required for automated changelog generation. Examples:"
        )
        .red(),
        style("feat: add 'comments' option").green(),
        style("fix: handle events on blur (close #28)").green(),
        style("  See .github/commit-convention.md for more details.").red(),
    )
}
