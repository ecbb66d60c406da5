//! Infrastructure layer for Vitrine.
//!
//! Contains implementations of the client traits defined in `vitrine-core`:
//! the REST table-store client, the realtime publish client, and startup
//! configuration loading.

pub mod config;
pub mod realtime;
pub mod rest;
