//! Subversion changeset-log parser.

use std::sync::LazyLock;

use jiff::civil::DateTime;
use regex::Regex;

use super::{ChangesetParser, Revision, VcsKind};
use crate::error::NotifyError;

/// Header record of an `svn log` entry, e.g.
/// `r1234 | jsmith | 2009-12-20 09:58:14 -0600 (Sun, 20 Dec 2009) | 1 line`.
static LOG_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r(\d+) \| ([^|]+?) \| (\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})[^|]*\|.*$")
        .expect("svn log header pattern")
});

const SEPARATOR: &str = "----";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `svn log` output: dash separators between entries, a `rN | author
/// | date | N lines` header, then the log message.
#[derive(Debug, Default)]
pub struct SubversionChangesetParser;

impl SubversionChangesetParser {
    pub fn new() -> Self {
        Self
    }
}

impl ChangesetParser for SubversionChangesetParser {
    fn vcs(&self) -> VcsKind {
        VcsKind::Subversion
    }

    fn parse(&self, raw: &str) -> Result<Vec<Revision>, NotifyError> {
        let mut revisions: Vec<Revision> = Vec::new();

        for line in raw.lines() {
            if let Some(caps) = LOG_HEADER.captures(line) {
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
                continue;
            }

            if line.starts_with('r') && line.contains(" | ") {
                return Err(NotifyError::Changeset {
                    reason: format!("unrecognized log header: {line}"),
                });
            }

            // Message body: first non-empty line after the header.
            if line.starts_with(SEPARATOR) || line.trim().is_empty() {
                continue;
            }
            if let Some(current) = revisions.last_mut() {
                if current.summary.is_none() {
                    current.summary = Some(line.trim().to_string());
                }
            }
        }

        Ok(revisions)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    const CHANGESET: &str = "\
------------------------------------------------------------------------
r1234 | jsmith | 2009-12-20 09:58:14 -0600 (Sun, 20 Dec 2009) | 1 line

made change
------------------------------------------------------------------------
r1235 | adoe | 2009-12-21 10:12:00 -0600 (Mon, 21 Dec 2009) | 1 line

another change
------------------------------------------------------------------------
";

    #[test]
    fn parses_log_records() {
        let revisions = SubversionChangesetParser::new().parse(CHANGESET).unwrap();
        assert_eq!(revisions.len(), 2);
        assert_eq!(revisions[0].number, "1234");
        assert_eq!(revisions[0].committed_by, "jsmith");
        assert_eq!(
            revisions[0].committed_at,
            Some(date(2009, 12, 20).at(9, 58, 14, 0))
        );
        assert_eq!(revisions[0].summary.as_deref(), Some("made change"));
        assert_eq!(revisions[1].committed_by, "adoe");
    }

    #[test]
    fn empty_log_yields_no_revisions() {
        let revisions = SubversionChangesetParser::new().parse("").unwrap();
        assert!(revisions.is_empty());
    }

    #[test]
    fn header_with_garbage_date_is_an_error() {
        let raw = "r12 | jsmith | yesterday | 1 line\n";
        let err = SubversionChangesetParser::new().parse(raw).unwrap_err();
        assert!(matches!(err, NotifyError::Changeset { .. }));
    }
}
