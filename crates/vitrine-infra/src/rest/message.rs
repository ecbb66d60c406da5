//! REST client for the managed table store.
//!
//! Implements `MessageRepository` from `vitrine-core` against a
//! PostgREST-style API: insert-with-returning via
//! `Prefer: return=representation`, sorted/limited select via query
//! parameters. Rows come back as JSON and are mapped to domain types
//! through a private Row struct.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when constructing request headers. It never appears in Debug output or
//! tracing logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use vitrine_core::chat::repository::MessageRepository;
use vitrine_types::error::StoreError;
use vitrine_types::message::{ChatMessage, NewMessage};

/// Table holding the persisted chat messages.
const MESSAGES_TABLE: &str = "chat_messages";

/// Request timeout for store calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST-backed implementation of `MessageRepository`.
pub struct RestMessageStore {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl RestMessageStore {
    /// Create a new store client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Store base URL (e.g., "https://abc.supabase.co")
    /// * `api_key` - Store API key wrapped in SecretString
    pub fn new(base_url: String, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Full URL of the messages table.
    fn table_url(&self) -> String {
        format!("{}/rest/v1/{MESSAGES_TABLE}", self.base_url)
    }

    /// Select URL ordered newest-first and capped at `limit` rows.
    fn select_url(&self, limit: i64) -> String {
        format!(
            "{}?select=*&order=timestamp.desc&limit={limit}",
            self.table_url()
        )
    }

    /// Attach the store credentials to a request.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
    }
}

/// Internal row type for mapping store rows to domain ChatMessage.
///
/// The store keeps the timestamp as an ISO-8601 string; parsing happens
/// here so a malformed row surfaces as a decode error, not a panic.
#[derive(Debug, Deserialize)]
struct ChatMessageRow {
    id: i64,
    text: String,
    sender: String,
    timestamp: String,
}

impl ChatMessageRow {
    fn into_message(self) -> Result<ChatMessage, StoreError> {
        let timestamp = chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(|e| StoreError::Decode(format!("invalid timestamp: {e}")))?;

        Ok(ChatMessage {
            id: self.id,
            text: self.text,
            sender: self.sender,
            timestamp,
        })
    }
}

/// Map a non-success response to a `StoreError::Status`.
async fn status_error(response: reqwest::Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    StoreError::Status { status, body }
}

impl MessageRepository for RestMessageStore {
    async fn insert(&self, message: &NewMessage) -> Result<ChatMessage, StoreError> {
        let response = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(message)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        // return=representation yields an array of the inserted rows.
        let rows: Vec<ChatMessageRow> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        rows.into_iter()
            .next()
            .ok_or(StoreError::EmptyInsert)?
            .into_message()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ChatMessage>, StoreError> {
        let response = self
            .authorize(self.client.get(self.select_url(limit)))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let rows: Vec<ChatMessageRow> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in rows {
            messages.push(row.into_message()?);
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestMessageStore {
        RestMessageStore::new(
            "https://store.example.com".to_string(),
            SecretString::from("key".to_string()),
        )
    }

    #[test]
    fn test_table_url() {
        assert_eq!(
            store().table_url(),
            "https://store.example.com/rest/v1/chat_messages"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let store = RestMessageStore::new(
            "https://store.example.com/".to_string(),
            SecretString::from("key".to_string()),
        );
        assert_eq!(
            store.table_url(),
            "https://store.example.com/rest/v1/chat_messages"
        );
    }

    #[test]
    fn test_select_url_orders_and_limits() {
        assert_eq!(
            store().select_url(50),
            "https://store.example.com/rest/v1/chat_messages?select=*&order=timestamp.desc&limit=50"
        );
    }

    #[test]
    fn test_row_into_message() {
        let row = ChatMessageRow {
            id: 3,
            text: "hello".to_string(),
            sender: "visitor".to_string(),
            timestamp: "2026-08-06T12:00:00+00:00".to_string(),
        };
        let message = row.into_message().unwrap();
        assert_eq!(message.id, 3);
        assert_eq!(message.text, "hello");
        assert_eq!(message.timestamp.to_rfc3339(), "2026-08-06T12:00:00+00:00");
    }

    #[test]
    fn test_row_with_bad_timestamp_is_decode_error() {
        let row = ChatMessageRow {
            id: 3,
            text: "hello".to_string(),
            sender: "visitor".to_string(),
            timestamp: "not a timestamp".to_string(),
        };
        assert!(matches!(row.into_message(), Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_rows_deserialize_from_store_payload() {
        let payload = r#"[
            {"id": 2, "text": "later", "sender": "b", "timestamp": "2026-08-06T10:00:00+00:00"},
            {"id": 1, "text": "earlier", "sender": "a", "timestamp": "2026-08-06T09:00:00+00:00"}
        ]"#;
        let rows: Vec<ChatMessageRow> = serde_json::from_str(payload).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].sender, "a");
    }
}
