//! Changeset log parsing.
//!
//! The host selects a parser for the project's version-control system
//! through [`parser_for`]; each parser turns raw changeset text into
//! [`Revision`] records. Parse failures are surfaced as errors and are
//! recoverable: the notifier degrades to an empty committer list rather
//! than dropping the notification.

mod git;
mod subversion;

pub use git::GitChangesetParser;
pub use subversion::SubversionChangesetParser;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// Version-control system a changeset log came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Git,
    Subversion,
}

/// One revision record extracted from a changeset log
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    /// Revision identifier (abbreviated hash or numeric revision)
    pub number: String,
    /// Committer identity as recorded in the log
    pub committed_by: String,
    /// Commit timestamp, when the log carries one
    pub committed_at: Option<DateTime>,
    /// First line of the commit message, when present
    pub summary: Option<String>,
}

/// Parser for one version-control system's changeset log format.
pub trait ChangesetParser: Send + Sync {
    /// Which system's logs this parser understands
    fn vcs(&self) -> VcsKind;

    /// Parses raw changeset text into revision records.
    ///
    /// Narrative lines (build annotations, diffstats) are skipped; a log
    /// with no revisions is an empty result, not an error.
    fn parse(&self, raw: &str) -> Result<Vec<Revision>, NotifyError>;
}

/// Returns the parser for the given version-control system.
pub fn parser_for(vcs: VcsKind) -> Box<dyn ChangesetParser> {
    match vcs {
        VcsKind::Git => Box::new(GitChangesetParser::new()),
        VcsKind::Subversion => Box::new(SubversionChangesetParser::new()),
    }
}

/// Collects committer names from revisions, deduplicated preserving
/// first-occurrence order.
pub fn unique_committers(revisions: &[Revision]) -> Vec<String> {
    let mut committers: Vec<String> = Vec::new();
    for revision in revisions {
        if !committers.contains(&revision.committed_by) {
            committers.push(revision.committed_by.clone());
        }
    }
    committers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revision(committed_by: &str) -> Revision {
        Revision {
            number: "a124eaf".to_string(),
            committed_by: committed_by.to_string(),
            committed_at: None,
            summary: None,
        }
    }

    #[test]
    fn unique_committers_preserves_first_occurrence_order() {
        let revisions = vec![
            revision("jsmith"),
            revision("adoe"),
            revision("jsmith"),
            revision("bkim"),
            revision("adoe"),
        ];
        assert_eq!(unique_committers(&revisions), ["jsmith", "adoe", "bkim"]);
    }

    #[test]
    fn unique_committers_of_empty_log_is_empty() {
        assert!(unique_committers(&[]).is_empty());
    }

    #[test]
    fn factory_returns_parser_for_each_vcs() {
        assert_eq!(parser_for(VcsKind::Git).vcs(), VcsKind::Git);
        assert_eq!(parser_for(VcsKind::Subversion).vcs(), VcsKind::Subversion);
    }
}
