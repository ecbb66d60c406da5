//! Notifier trait definition for the realtime pub/sub channel.
//!
//! Publishing is fire-and-forget: the service logs a failed publish and
//! moves on. A notification is never retried and never affects the outcome
//! of the request that triggered it.

use vitrine_types::error::NotifyError;
use vitrine_types::message::ChatMessage;

/// Channel used when a submission does not address one explicitly.
pub const DEFAULT_CHANNEL: &str = "contact-chat";

/// Event name under which stored messages are published.
pub const MESSAGE_EVENT: &str = "message";

/// Client trait for the managed realtime pub/sub service.
///
/// Implementations live in vitrine-infra (e.g., `RealtimeNotifier`).
pub trait Notifier: Send + Sync {
    /// Publish a named event carrying the stored message on a channel.
    fn publish(
        &self,
        channel: &str,
        event: &str,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}
