use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Fatal failures of a serialization call.
///
/// Nothing here is retried: any error aborts the in-progress document write,
/// and partial output already flushed to the sink is the caller's to discard.
///
/// Misuse of the reference table (restoring an identity that was never
/// registered) is an internal invariant violation and panics instead of
/// surfacing as a variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WriteError {
    #[error("type `{type_name}` is not serializable: no contract is registered for it")]
    NotSerializable { type_name: &'static str },

    #[error(
        "a surrogate changed the type of get-only collection `{type_name}`; \
         get-only collections are populated in place and cannot change type"
    )]
    SurrogateOnGetOnlyCollection { type_name: &'static str },

    #[error("object graph exceeds the session item quota of {max}")]
    QuotaExceeded { max: usize },

    #[error("markup sink failure: {0}")]
    Sink(String),
}
