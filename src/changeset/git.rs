//! Git changeset-log parser.

use std::sync::LazyLock;

use jiff::civil::DateTime;
use regex::Regex;

use super::{ChangesetParser, Revision, VcsKind};
use crate::error::NotifyError;

/// Revision line of a git changeset, e.g.
/// `Revision ...a124eaf committed by John Smith  <jsmith@company.com> on 2009-12-20 09:58:14`.
/// The leading `...` marks an abbreviated hash; the email is optional.
static REVISION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Revision (?:\.\.\.)?(\S+) committed by (\S.*?)(?:\s+<[^>]*>)?\s+on\s+(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\s*$",
    )
    .expect("git revision line pattern")
});

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses the git changeset display format: one `Revision ...` header per
/// commit followed by an indented message excerpt, interleaved with
/// narrative lines and diffstat trailers that carry no revision data.
#[derive(Debug, Default)]
pub struct GitChangesetParser;

impl GitChangesetParser {
    pub fn new() -> Self {
        Self
    }
}

impl ChangesetParser for GitChangesetParser {
    fn vcs(&self) -> VcsKind {
        VcsKind::Git
    }

    fn parse(&self, raw: &str) -> Result<Vec<Revision>, NotifyError> {
        let mut revisions: Vec<Revision> = Vec::new();

        for line in raw.lines() {
            if let Some(caps) = REVISION_LINE.captures(line) {
                let committed_at = DateTime::strptime(TIMESTAMP_FORMAT, &caps[3])
                    .map_err(|e| NotifyError::Changeset {
                        reason: format!("bad commit timestamp '{}': {}", &caps[3], e),
                    })?;

                revisions.push(Revision {
                    number: caps[1].to_string(),
                    committed_by: caps[2].trim().to_string(),
                    committed_at: Some(committed_at),
                    summary: None,
                });
            } else if line.starts_with("Revision ") {
                return Err(NotifyError::Changeset {
                    reason: format!("unrecognized revision line: {line}"),
                });
            } else if let Some(excerpt) = line.strip_prefix("    ") {
                // First indented line after a header is the message excerpt.
                if let Some(current) = revisions.last_mut() {
                    if current.summary.is_none() && !excerpt.trim().is_empty() {
                        current.summary = Some(excerpt.trim().to_string());
                    }
                }
            }
        }

        Ok(revisions)
    }
}
