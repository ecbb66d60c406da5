//! REST client for the managed realtime pub/sub service.
//!
//! Implements `Notifier` from `vitrine-core`: a fire-and-forget POST of a
//! named event with a structured payload to a channel endpoint. The caller
//! (ChatService) decides what to do with a failure; this client only
//! reports it.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use vitrine_core::chat::notifier::Notifier;
use vitrine_types::error::NotifyError;
use vitrine_types::message::ChatMessage;

/// Hosted endpoint of the realtime service.
const DEFAULT_BASE_URL: &str = "https://realtime.vitrine.app";

/// Request timeout for publish calls. Publishes are best-effort, so the
/// bound is tighter than the store's.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// REST-backed implementation of `Notifier`.
///
/// The API key is wrapped in [`secrecy::SecretString`] and only exposed
/// when constructing the Authorization header.
pub struct RealtimeNotifier {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

/// Wire format of a published event.
#[derive(Debug, Serialize)]
struct PublishEnvelope<'a> {
    name: &'a str,
    data: &'a ChatMessage,
}

impl RealtimeNotifier {
    /// Create a new realtime client against the hosted endpoint.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Events endpoint for a channel.
    fn events_url(&self, channel: &str) -> String {
        format!("{}/v1/channels/{channel}/events", self.base_url)
    }
}

impl Notifier for RealtimeNotifier {
    async fn publish(
        &self,
        channel: &str,
        event: &str,
        message: &ChatMessage,
    ) -> Result<(), NotifyError> {
        let envelope = PublishEnvelope {
            name: event,
            data: message,
        };

        let response = self
            .client
            .post(self.events_url(channel))
            .bearer_auth(self.api_key.expose_secret())
            .json(&envelope)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_addresses_channel() {
        let notifier = RealtimeNotifier::new(SecretString::from("key".to_string()))
            .with_base_url("https://realtime.example.com".to_string());
        assert_eq!(
            notifier.events_url("contact-chat"),
            "https://realtime.example.com/v1/channels/contact-chat/events"
        );
    }

    #[test]
    fn test_default_base_url() {
        let notifier = RealtimeNotifier::new(SecretString::from("key".to_string()));
        assert!(notifier.events_url("c").starts_with(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_envelope_wire_format() {
        let message = ChatMessage {
            id: 5,
            text: "hello".to_string(),
            sender: "visitor".to_string(),
            timestamp: "2026-08-06T12:00:00Z".parse().unwrap(),
        };
        let envelope = PublishEnvelope {
            name: "message",
            data: &message,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["name"], "message");
        assert_eq!(json["data"]["id"], 5);
        assert_eq!(json["data"]["text"], "hello");
    }
}
