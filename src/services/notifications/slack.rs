//! Slack slackbot webhook transport.

use reqwest::Url;

use crate::config::NotifierConfig;
use crate::error::{NotifyError, NotifyResult};
use crate::external::HTTP_CLIENT;

/// Path of the legacy slackbot remote-control hook
const SLACKBOT_PATH: &str = "/services/hooks/slackbot";

/// One configured slackbot endpoint.
///
/// Delivery is a single POST of the raw message text through the shared
/// [`HTTP_CLIENT`]; no custom headers, no retries. The response is not
/// inspected; only transport-level failures surface, wrapped as
/// [`NotifyError::Delivery`].
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    base_url: String,
    token: String,
    channel: String,
}

impl SlackWebhook {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            channel: channel.into(),
        }
    }

    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(
            config.url.clone(),
            config.token.clone(),
            config.channel.clone(),
        )
    }

    /// Full endpoint URL, token and channel percent-encoded into the query
    /// string (`#general` becomes `%23general`). A trailing `/` on the base
    /// URL is tolerated.
    pub fn endpoint(&self) -> NotifyResult<Url> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse_with_params(
            &format!("{base}{SLACKBOT_PATH}"),
            [
                ("token", self.token.as_str()),
                ("channel", self.channel.as_str()),
            ],
        )
        .map_err(|e| NotifyError::Endpoint {
            base_url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }

    /// Posts the message text to the endpoint.
    pub async fn post(&self, body: &str) -> NotifyResult<()> {
        let endpoint = self.endpoint()?;

        HTTP_CLIENT
            .post(endpoint)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| NotifyError::Delivery {
                message: e.to_string(),
                source: e.into(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn builds_the_documented_endpoint() {
        let hook = SlackWebhook::new("https://my.slack.com", "mytoken", "#general");
        assert_eq!(
            hook.endpoint().unwrap().as_str(),
            "https://my.slack.com/services/hooks/slackbot?token=mytoken&channel=%23general"
        );
    }

    #[test]
    fn tolerates_trailing_slash_on_base_url() {
        let hook = SlackWebhook::new("https://my.slack.com/", "mytoken", "#general");
        assert_eq!(
            hook.endpoint().unwrap().as_str(),
            "https://my.slack.com/services/hooks/slackbot?token=mytoken&channel=%23general"
        );
    }

    #[test]
    fn channel_without_hash_passes_through_unvalidated() {
        let hook = SlackWebhook::new("https://my.slack.com", "mytoken", "general");
        assert!(
            hook.endpoint()
                .unwrap()
                .as_str()
                .ends_with("channel=general")
        );
    }

    #[test]
    fn unparseable_base_url_is_an_endpoint_error() {
        let hook = SlackWebhook::new("not a url", "mytoken", "#general");
        assert!(matches!(
            hook.endpoint().unwrap_err(),
            NotifyError::Endpoint { .. }
        ));
    }

    /// Accepts one request, returns its raw bytes after answering 200.
    async fn recv_request(listener: TcpListener) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).into_owned();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text
                    .lines()
                    .find_map(|l| {
                        l.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().to_string())
                    })
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n")
            .await
            .unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn posts_raw_text_to_the_slackbot_path() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(recv_request(listener));

        let hook = SlackWebhook::new(format!("http://{addr}"), "mytoken", "#general");
        hook.post("*ProjectName build BuildLabel PASSED*\ncommitterabc\nbuildurl")
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with(
            "POST /services/hooks/slackbot?token=mytoken&channel=%23general HTTP/1.1\r\n"
        ));
        assert!(request.ends_with("*ProjectName build BuildLabel PASSED*\ncommitterabc\nbuildurl"));
    }

    #[tokio::test]
    async fn refused_connection_surfaces_as_delivery_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let hook = SlackWebhook::new(format!("http://{addr}"), "mytoken", "#general");
        let err = hook.post("body").await.unwrap_err();

        assert!(matches!(err, NotifyError::Delivery { .. }));
        assert!(err.to_string().starts_with("Slack delivery failed"));
        // The original transport cause stays attached.
        assert!(err.source().is_some());
    }
}
