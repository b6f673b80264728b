//! Notifier settings

use serde::{Deserialize, Serialize};

/// Slack notifier settings.
///
/// Assigned once by the host (directly or via [`crate::config::ConfigLoader`])
/// and read-only afterwards. Field contents are passed through to the webhook
/// endpoint as-is; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Slack team base URL, e.g. `https://my.slack.com`
    pub url: String,
    /// Slackbot remote-control token. `password` is accepted as a legacy
    /// alias for this field.
    #[serde(alias = "password")]
    pub token: String,
    /// Destination channel, including any leading `#`
    pub channel: String,
    /// Suppress PASSED notifications
    pub only_failed_builds: bool,
    /// Notify only on BROKE!/WAS FIXED transitions
    pub only_fixed_and_broken_builds: bool,
    /// Report the first failure of a streak instead of every failed build
    pub only_first_failure: bool,
}

impl NotifierConfig {
    /// The notifier is enabled once url, token and channel are all present.
    /// Anything less makes delivery a silent no-op, not an error.
    pub fn enabled(&self) -> bool {
        !self.url.is_empty() && !self.token.is_empty() && !self.channel.is_empty()
    }
}
