//! Realtime pub/sub service client.

pub mod notifier;

pub use notifier::RealtimeNotifier;
