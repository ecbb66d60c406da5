//! Contact-chat domain: message persistence and realtime fan-out.

pub mod notifier;
pub mod repository;
pub mod service;

pub use service::ChatService;
