//! [`StatusStore`] backed by PostgreSQL.

use async_trait::async_trait;
use tpx_core::store::{StatusStore, StoreError};
use tpx_core::update::{StatusTarget, StatusUpdate};

use crate::repositories::{KoaTpxRepo, PsfrRepo, StageColumns};
use crate::DbPool;

/// Writes status updates into the `koatpx` and `psfr` tables.
///
/// Cheap to clone; every update borrows one pooled connection for a single
/// statement.
#[derive(Debug, Clone)]
pub struct PgStatusStore {
    pool: DbPool,
}

impl PgStatusStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusStore for PgStatusStore {
    async fn apply(&self, update: &StatusUpdate) -> Result<u64, StoreError> {
        let utdate = update.key.observation_date;
        let instr = update.key.instrument.as_str();
        let status = update.outcome.as_str();

        let rows = match StageColumns::for_target(update.target) {
            Some(columns) => {
                KoaTpxRepo::update_stage(
                    &self.pool,
                    columns,
                    utdate,
                    instr,
                    status,
                    &update.stamped_at,
                    update.comment.as_deref(),
                )
                .await
            }
            None => {
                debug_assert_eq!(update.target, StatusTarget::IngestReceipt);
                PsfrRepo::update_ingest(&self.pool, utdate, instr, status, &update.stamped_at).await
            }
        }
        .map_err(classify_sqlx_error)?;

        tracing::debug!(
            target_fields = %update.target,
            %utdate,
            instr,
            status,
            rows,
            "Status update applied",
        );
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// Split sqlx failures into "could not reach the database" and "the
/// statement itself failed".
fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}
