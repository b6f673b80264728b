//! Notification policy.
//!
//! Pure decision logic: given a lifecycle event and the configured flags,
//! either an outcome label to notify with, or suppression. Enablement
//! (credentials present) is a separate check made at delivery time.

use crate::config::NotifierConfig;

/// Outcome label for a passed build
pub const PASSED: &str = "PASSED";
/// Outcome label for a failed build
pub const FAILED: &str = "FAILED!";
/// Outcome label for the build that first breaks a project
pub const BROKE: &str = "BROKE!";
/// Outcome label for the build that repairs a broken project
pub const FIXED: &str = "WAS FIXED";

/// Lifecycle event reported by the build host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    /// A build finished and passed
    FinishedSuccess,
    /// A build finished and failed
    FinishedFailure,
    /// A build failed where the previous one passed
    Broken,
    /// A build passed where the previous one failed
    Fixed,
}

/// Returns the outcome label to notify with, or `None` when the flags
/// suppress the event.
///
/// Each event consults its own flags. `FinishedFailure` is suppressed only
/// by `only_first_failure`; `only_failed_builds` never suppresses a failure.
pub fn decide(event: BuildEvent, config: &NotifierConfig) -> Option<&'static str> {
    match event {
        BuildEvent::FinishedSuccess => {
            if config.only_fixed_and_broken_builds || config.only_failed_builds {
                None
            } else {
                Some(PASSED)
            }
        }
        BuildEvent::FinishedFailure => {
            if config.only_fixed_and_broken_builds || config.only_first_failure {
                None
            } else {
                Some(FAILED)
            }
        }
        BuildEvent::Broken => {
            if config.only_first_failure || config.only_fixed_and_broken_builds {
                Some(BROKE)
            } else {
                None
            }
        }
        BuildEvent::Fixed => {
            if config.only_fixed_and_broken_builds {
                Some(FIXED)
            } else {
                None
            }
        }
    }
}
