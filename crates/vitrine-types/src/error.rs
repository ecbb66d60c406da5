use thiserror::Error;

/// Errors from the table store (persistence read/write failures).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),

    #[error("insert returned no row")]
    EmptyInsert,
}

/// Errors from the realtime pub/sub service (publish failures).
///
/// These are always absorbed by the caller: logged, never surfaced to the
/// HTTP client, never retried.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("publish request failed: {0}")]
    Request(String),

    #[error("realtime service returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors from startup configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {0} is not valid unicode")]
    InvalidVar(&'static str),
}
