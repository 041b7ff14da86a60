/// Failures the ingestion engine reports back to the caller.
///
/// Each variant is terminal for the request that produced it. The reporting
/// pipeline stage is expected to re-report; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("Unknown status category: {0}")]
    UnknownCategory(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Status update failed: {0}")]
    UpdateFailed(String),
}
