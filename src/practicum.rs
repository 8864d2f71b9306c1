use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::BotError;

/// Production endpoint for homework status queries.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Authenticated client for the Practicum homework API.
pub struct PracticumClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BotError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Fetch homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Only an HTTP 200 with a decodable JSON body counts as success;
    /// anything else is a transport error.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        debug!("GET {} from_date={}", self.base_url, from_date);

        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let code = response.status();
        if code != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Status { code, body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, PracticumClient) {
        let server = MockServer::start().await;
        let client =
            PracticumClient::new(server.uri(), "test-token", Duration::from_secs(5)).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_homework_statuses_success() {
        let (server, client) = setup().await;

        let body = json!({
            "homeworks": [{"status": "approved", "homework_name": "hw1"}],
            "current_date": 1000
        });

        Mock::given(method("GET"))
            .and(header("Authorization", "OAuth test-token"))
            .and(query_param("from_date", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let response = client.homework_statuses(0).await.unwrap();
        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_cursor_is_sent_as_from_date() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(query_param("from_date", "1706000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"homeworks": []})))
            .expect(1)
            .mount(&server)
            .await;

        client.homework_statuses(1706000000).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_200_is_a_transport_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        match client.homework_statuses(0).await {
            Err(BotError::Status { code, body }) => {
                assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_garbled_body_is_a_transport_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(matches!(
            client.homework_statuses(0).await,
            Err(BotError::Request(_))
        ));
    }
}
