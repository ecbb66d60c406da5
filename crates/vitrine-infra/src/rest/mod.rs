//! REST table-store backed implementations of the core storage traits.

pub mod message;

pub use message::RestMessageStore;
