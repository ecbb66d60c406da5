//! Shared domain types for Vitrine.
//!
//! This crate contains the chat message types and their associated error
//! types, used across the Vitrine portfolio site.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod message;
