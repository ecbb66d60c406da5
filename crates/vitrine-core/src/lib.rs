//! Business logic and client trait definitions for Vitrine.
//!
//! This crate defines the "ports" (store and notifier traits) that the
//! infrastructure layer implements. It depends only on `vitrine-types` --
//! never on `vitrine-infra` or any HTTP/IO crate.

pub mod chat;
