//! Application state wiring the chat service to its concrete clients.
//!
//! `ChatService` is generic over the store and notifier traits; AppState
//! pins it to the concrete infra implementations.

use std::sync::Arc;

use vitrine_core::chat::ChatService;
use vitrine_infra::config::load_config;
use vitrine_infra::realtime::RealtimeNotifier;
use vitrine_infra::rest::RestMessageStore;

/// Concrete type alias for the service generics pinned to infra clients.
pub type ConcreteChatService = ChatService<RestMessageStore, RealtimeNotifier>;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state: read configuration, wire clients.
    ///
    /// Fails immediately when any of the three required environment
    /// variables is absent.
    pub fn init() -> anyhow::Result<Self> {
        let config = load_config()?;

        let store = RestMessageStore::new(config.store_url, config.store_key);
        let notifier = RealtimeNotifier::new(config.realtime_key);

        Ok(Self {
            chat_service: Arc::new(ChatService::new(store, notifier)),
        })
    }
}
