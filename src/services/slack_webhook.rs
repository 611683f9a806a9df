//! Entrega da mensagem no Slack via incoming webhook

use std::future::Future;

use reqwest::Client;
use serde_json::json;

use crate::utils::{AppError, AppResult};

/// Destino da mensagem de resumo
pub trait Notifier: Send + Sync {
    fn send(&self, message: &str) -> impl Future<Output = AppResult<()>> + Send;
}

/// Cliente de incoming webhook do Slack
#[derive(Clone)]
pub struct SlackWebhook {
    client: Client,
    webhook_url: String,
}

impl SlackWebhook {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url: webhook_url.into(),
        }
    }
}

impl Notifier for SlackWebhook {
    /// Publica `{"text": message}` no webhook
    ///
    /// Qualquer resposta não-2xx (ex: `403 invalid_token`, `404 no_service`)
    /// ou falha de rede vira `DeliveryFailed`.
    async fn send(&self, message: &str) -> AppResult<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&json!({ "text": message }))
            .send()
            .await
            .map_err(|e| AppError::DeliveryFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(AppError::DeliveryFailed(format!("status {}: {}", status.as_u16(), body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_send_posts_text_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/services/T000/B000/XXXX")
                    .json_body(json!({ "text": "List of unassigned tasks:\n" }));
                then.status(200).body("ok");
            })
            .await;

        let webhook = SlackWebhook::new(server.url("/services/T000/B000/XXXX"));
        tokio_test::assert_ok!(webhook.send("List of unassigned tasks:\n").await);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_rejected_by_slack() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/services/T000/B000/XXXX");
                then.status(403).body("invalid_token");
            })
            .await;

        let webhook = SlackWebhook::new(server.url("/services/T000/B000/XXXX"));
        let err = webhook.send("hello").await.unwrap_err();

        assert!(matches!(err, AppError::DeliveryFailed(ref msg) if msg.contains("403") && msg.contains("invalid_token")));
    }

    #[tokio::test]
    async fn test_send_unreachable_webhook() {
        // Porta 9 (discard) em localhost: conexão recusada
        let webhook = SlackWebhook::new("http://127.0.0.1:9/services/T000/B000/XXXX");
        let err = tokio_test::assert_err!(webhook.send("hello").await);

        assert!(matches!(err, AppError::DeliveryFailed(_)));
    }
}
