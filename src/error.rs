use thiserror::Error;

/// Errors raised while producing a series. Every variant is terminal for the
/// request that raised it: nothing is retried internally and no partial
/// result accompanies a failure.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unparseable timestamp {0:?}")]
    ParseError(String),

    #[error("unknown granularity {0:?}: expected \"hour\", \"day\" or \"month\"")]
    InvalidGranularity(String),

    #[error("value store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("bucket query transaction failed: {0}")]
    TransactionError(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),
}
