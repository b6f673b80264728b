//! ci-notify Library
//!
//! Build-server notification plugin: composes a short status message when a
//! build finishes, breaks, or is fixed, and posts it to a Slack slackbot
//! webhook endpoint.

pub mod changeset;
pub mod config;
pub mod error;
pub mod external;
pub mod models;
pub mod services;

pub use crate::config::NotifierConfig;
pub use crate::services::SlackNotifier;
