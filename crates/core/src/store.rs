//! The persistence seam the ingestion engine writes through.

use async_trait::async_trait;

use crate::update::StatusUpdate;

/// Failure reported by a [`StatusStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed to execute the statement.
    #[error("store query failed: {0}")]
    Query(String),
}

/// Executes status updates against the status tables.
///
/// Each call is one parameterized statement scoped by the update's
/// `(observation_date, instrument)` key; the engine needs no read-back,
/// transactions, or batching.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Apply one update, returning the number of rows it touched.
    async fn apply(&self, update: &StatusUpdate) -> Result<u64, StoreError>;

    /// Check the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
