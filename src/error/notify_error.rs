use thiserror::Error;

/// Crate-wide error type for notification operations.
///
/// Delivery failures wrap the underlying transport cause so callers can
/// inspect the original reason; nothing here is retried or logged on the
/// crate's behalf.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Webhook delivery failed at the transport level
    #[error("Slack delivery failed: {message}")]
    Delivery {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// The configured base URL could not be turned into an endpoint
    #[error("Invalid webhook endpoint for '{base_url}': {reason}")]
    Endpoint { base_url: String, reason: String },

    /// A changeset log did not match the parser's expected format
    #[error("Changeset parse failed: {reason}")]
    Changeset { reason: String },
}

/// Type alias for Result with NotifyError to simplify function signatures
pub type NotifyResult<T> = Result<T, NotifyError>;
