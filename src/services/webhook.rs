use log::warn;
use serde_json::json;

/// Forwards submitted text to the configured webhook endpoint.
///
/// Delivery is best-effort: the response is not inspected beyond its status
/// code, and no failure ever reaches the caller. A submission must go
/// through whether or not the webhook is up.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn notify(&self, text: &str) {
        let payload = json!({ "content": text });

        match self.client.post(&self.url).json(&payload).send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    warn!("Webhook returned {}", response.status());
                }
            }
            Err(err) => {
                warn!("Failed to reach webhook: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_content_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_json(serde_json::json!({ "content": "hello" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(server.uri());
        notifier.notify("hello").await;

        server.verify().await;
    }

    #[tokio::test]
    async fn swallows_non_success_responses() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(server.uri());
        notifier.notify("still fine").await;

        server.verify().await;
    }

    #[tokio::test]
    async fn swallows_connection_errors() {
        // Nothing listens here; notify must still return normally.
        let notifier = WebhookNotifier::new("http://127.0.0.1:1".to_string());
        notifier.notify("nobody home").await;
    }
}
