use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds surfaced to the request-handling layer.
///
/// Missing optional payload fields and unmatched date/time patterns are not
/// failures; they resolve to documented defaults.
#[derive(Debug, Error)]
pub enum Error {
    /// The webhook body was missing or not a parseable call payload.
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(String),

    /// The person store could not be reached or rejected the operation.
    #[error("person store unavailable: {0}")]
    StoreUnavailable(#[source] anyhow::Error),

    /// The store reported a conflicting concurrent update for one identity.
    #[error("conflicting update for nexa_id {nexa_id}: {source}")]
    StoreConflict {
        nexa_id: String,
        #[source]
        source: anyhow::Error,
    },
}
