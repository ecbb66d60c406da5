//! MessageRepository trait definition.
//!
//! The single persisted entity is the chat message; the store offers
//! insert-with-returning and a sorted, limited select. Implementations live
//! in vitrine-infra (e.g., `RestMessageStore`).

use vitrine_types::error::StoreError;
use vitrine_types::message::{ChatMessage, NewMessage};

/// Repository trait for chat message persistence.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait MessageRepository: Send + Sync {
    /// Insert a message and return the stored row, store-assigned id included.
    fn insert(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, StoreError>> + Send;

    /// List the most recent messages, ordered by timestamp descending.
    fn list_recent(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, StoreError>> + Send;
}
