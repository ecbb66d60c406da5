//! HTTP layer for Vitrine.
//!
//! Axum-based routes for the chat API and the landing page, with the
//! `{success, message, data}` response envelope and CORS support.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
