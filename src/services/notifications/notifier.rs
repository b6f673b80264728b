//! Slack notifier lifecycle glue.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::changeset::{self, ChangesetParser, VcsKind};
use crate::config::{Environment, NotifierConfig};
use crate::error::NotifyResult;
use crate::models::BuildSummary;

use super::message::compose;
use super::policy::{BuildEvent, decide};
use super::slack::SlackWebhook;

/// Receives build lifecycle events from the host.
///
/// The host invokes exactly one method per event; implementations hold no
/// state across calls and may be shared between concurrently running
/// pipelines.
#[async_trait]
pub trait BuildEventListener: Send + Sync {
    /// A build finished; the outcome is carried by `build.successful`.
    async fn build_finished(&self, build: &BuildSummary) -> NotifyResult<()>;

    /// A build failed where the previous one passed. `previous` is
    /// informational only and never part of the message.
    async fn build_broken(
        &self,
        build: &BuildSummary,
        previous: &BuildSummary,
    ) -> NotifyResult<()>;

    /// A build passed where the previous one failed.
    async fn build_fixed(&self, build: &BuildSummary, previous: &BuildSummary)
    -> NotifyResult<()>;
}

/// Slack build notifier.
///
/// Policy runs on every lifecycle call; delivery additionally requires the
/// notifier to be [`enabled`](SlackNotifier::enabled). A disabled notifier
/// is a silent no-op, never an error.
pub struct SlackNotifier {
    config: NotifierConfig,
    parser: Box<dyn ChangesetParser>,
}

impl SlackNotifier {
    /// Creates a notifier with the default git changeset parser.
    pub fn new(config: NotifierConfig) -> Self {
        Self::with_parser(config, changeset::parser_for(VcsKind::Git))
    }

    /// Creates a notifier with a host-selected changeset parser.
    pub fn with_parser(config: NotifierConfig, parser: Box<dyn ChangesetParser>) -> Self {
        Self { config, parser }
    }

    /// Registration seam for host startup code: a notifier for every
    /// environment except [`Environment::Test`].
    pub fn for_environment(config: NotifierConfig, environment: Environment) -> Option<Self> {
        match environment {
            Environment::Test => None,
            _ => Some(Self::new(config)),
        }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Whether url, token and channel are all configured.
    pub fn enabled(&self) -> bool {
        self.config.enabled()
    }

    /// Committers behind this build, deduplicated in first-occurrence order.
    ///
    /// A changeset that fails to parse degrades to an empty list; the
    /// notification still goes out.
    pub fn changeset_committers(&self, build: &BuildSummary) -> Vec<String> {
        match self.parser.parse(&build.changeset) {
            Ok(revisions) => changeset::unique_committers(&revisions),
            Err(e) => {
                warn!(
                    vcs = ?self.parser.vcs(),
                    error = %e,
                    "changeset parse failed; notifying without committers"
                );
                Vec::new()
            }
        }
    }

    /// Composes and delivers the outcome message. Accepts any outcome label,
    /// not just the policy's. Skipped silently when the notifier is not
    /// fully configured.
    pub async fn notify_of_build_outcome(
        &self,
        build: &BuildSummary,
        outcome: &str,
    ) -> NotifyResult<()> {
        if !self.enabled() {
            return Ok(());
        }

        debug!(
            project = %build.project_name,
            label = %build.label,
            outcome,
            "sending build notice"
        );

        let committers = self.changeset_committers(build);
        let text = compose(build, outcome, &committers);
        SlackWebhook::from_config(&self.config).post(&text).await
    }

    async fn dispatch(&self, event: BuildEvent, build: &BuildSummary) -> NotifyResult<()> {
        match decide(event, &self.config) {
            Some(outcome) => self.notify_of_build_outcome(build, outcome).await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BuildEventListener for SlackNotifier {
    async fn build_finished(&self, build: &BuildSummary) -> NotifyResult<()> {
        let event = if build.successful {
            BuildEvent::FinishedSuccess
        } else {
            BuildEvent::FinishedFailure
        };
        self.dispatch(event, build).await
    }

    async fn build_broken(
        &self,
        build: &BuildSummary,
        _previous: &BuildSummary,
    ) -> NotifyResult<()> {
        self.dispatch(BuildEvent::Broken, build).await
    }

    async fn build_fixed(
        &self,
        build: &BuildSummary,
        _previous: &BuildSummary,
    ) -> NotifyResult<()> {
        self.dispatch(BuildEvent::Fixed, build).await
    }
}
