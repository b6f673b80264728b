//! Configuration management for the notifier
//!
//! Hosts can construct [`NotifierConfig`] directly, or load it through
//! [`ConfigLoader`] with layered sources:
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local overrides (not committed to version control)
//! 4. `CI_NOTIFY_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::NotifierConfig;
