//! Plain-text message composition.

use crate::models::BuildSummary;

/// Builds the notification text: a bold headline, the committers line, and
/// the build-URL line.
///
/// Always exactly three lines joined by `\n` with no trailing newline; the
/// committers and URL lines are left empty rather than omitted. Accepts any
/// outcome label, not just the ones the policy hands out.
pub fn compose(build: &BuildSummary, outcome: &str, committers: &[String]) -> String {
    format!(
        "*{} build {} {}*\n{}\n{}",
        build.project_name,
        build.label,
        outcome,
        committers.join(", "),
        build.url.as_deref().unwrap_or_default(),
    )
}
