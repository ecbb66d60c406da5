//! Chat message types for the contact-chat feature.
//!
//! A message is created once on submission and never updated or deleted by
//! this system; retention is an operational concern of the external store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact-chat message.
///
/// The `id` is assigned by the table store on insert. Timestamps serialize
/// as RFC-3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub text: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for a message that does not yet have a store-assigned id.
///
/// The timestamp is stamped by the submitting process at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub text: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
}

impl NewMessage {
    /// Build an insert payload stamped with the current UTC time.
    pub fn now(text: String, sender: String) -> Self {
        Self {
            text,
            sender,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_serialize() {
        let message = ChatMessage {
            id: 7,
            text: "hello".to_string(),
            sender: "visitor".to_string(),
            timestamp: "2026-08-06T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"text\":\"hello\""));
        assert!(json.contains("\"timestamp\":\"2026-08-06T12:00:00Z\""));
    }

    #[test]
    fn test_chat_message_roundtrip() {
        let json = r#"{"id":1,"text":"hi","sender":"ana","timestamp":"2026-08-06T09:30:00+00:00"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, 1);
        assert_eq!(message.sender, "ana");

        let back = serde_json::to_string(&message).unwrap();
        let again: ChatMessage = serde_json::from_str(&back).unwrap();
        assert_eq!(again, message);
    }

    #[test]
    fn test_new_message_now_stamps_timestamp() {
        let before = Utc::now();
        let message = NewMessage::now("hello".to_string(), "visitor".to_string());
        let after = Utc::now();
        assert!(message.timestamp >= before && message.timestamp <= after);
    }

    #[test]
    fn test_new_message_serialize_has_no_id() {
        let message = NewMessage::now("hello".to_string(), "visitor".to_string());
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
