//! Build snapshot model.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of one build, handed over by the host per lifecycle
/// call. The notifier never retains or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Project the build belongs to
    pub project_name: String,
    /// Build label, e.g. a build number or revision id
    pub label: String,
    /// Whether the build passed
    pub successful: bool,
    /// Raw version-control changeset log associated with the build
    pub changeset: String,
    /// Dashboard URL for the build, when the host exposes one
    pub url: Option<String>,
}
