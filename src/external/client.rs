use std::sync::LazyLock;
use std::time::Duration;

/// Shared HTTP client for webhook deliveries
///
/// Initialized lazily on first access and reused for every notification, so
/// repeated deliveries to the same Slack host reuse pooled connections.
///
/// # Features
/// - **Timeouts**: 30s request timeout, 10s connect timeout; callers get no
///   per-request override
/// - **Connection pooling**: a small idle pool per host
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        // Compression
        .gzip(true)
        // Security
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
