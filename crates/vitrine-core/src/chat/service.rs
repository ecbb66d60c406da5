//! Chat service orchestrating message persistence and realtime fan-out.
//!
//! `ChatService` coordinates the two external collaborators: one durable
//! write to the table store per submission, followed by at most one
//! best-effort publish on the realtime channel. Persistence success is
//! deliberately decoupled from notification success.

use tracing::warn;

use vitrine_types::error::StoreError;
use vitrine_types::message::{ChatMessage, NewMessage};

use crate::chat::notifier::{MESSAGE_EVENT, Notifier};
use crate::chat::repository::MessageRepository;

/// Fixed cap on the number of messages a listing returns.
pub const RECENT_LIMIT: i64 = 50;

/// Orchestrates chat message submission and listing.
///
/// Generic over `MessageRepository` and `Notifier` to maintain clean
/// architecture (vitrine-core never depends on vitrine-infra).
pub struct ChatService<R: MessageRepository, N: Notifier> {
    repo: R,
    notifier: N,
}

impl<R: MessageRepository, N: Notifier> ChatService<R, N> {
    /// Create a new chat service with the given store and notifier clients.
    pub fn new(repo: R, notifier: N) -> Self {
        Self { repo, notifier }
    }

    /// Submit a message: persist it, then best-effort publish it.
    ///
    /// The message is stamped with the current UTC time and inserted; the
    /// stored row (id included) is published on `channel` under the
    /// `message` event name. A failed publish is logged and swallowed --
    /// the submission still succeeds. A failed insert is returned to the
    /// caller and nothing is published.
    pub async fn submit(
        &self,
        text: String,
        sender: String,
        channel: &str,
    ) -> Result<ChatMessage, StoreError> {
        let message = NewMessage::now(text, sender);
        let stored = self.repo.insert(&message).await?;

        if let Err(err) = self.notifier.publish(channel, MESSAGE_EVENT, &stored).await {
            warn!(channel, error = %err, "realtime publish failed, message already persisted");
        }

        Ok(stored)
    }

    /// List the most recent messages, newest first, capped at [`RECENT_LIMIT`].
    pub async fn recent(&self) -> Result<Vec<ChatMessage>, StoreError> {
        self.repo.list_recent(RECENT_LIMIT).await
    }
}
