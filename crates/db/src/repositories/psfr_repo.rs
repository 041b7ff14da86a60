//! Repository for the `psfr` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::status::PsfrRow;

/// Column list for `psfr` queries.
const COLUMNS: &str = "utdate, instr, ingest_stat, ingest_time";

/// Provides query operations for archive ingest receipts.
pub struct PsfrRepo;

impl PsfrRepo {
    /// Record the ingest status and time for one instrument on one night.
    pub async fn update_ingest(
        pool: &PgPool,
        utdate: NaiveDate,
        instr: &str,
        status: &str,
        ingest_time: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE psfr SET ingest_stat = $3, ingest_time = $4 \
             WHERE utdate = $1 AND instr = $2",
        )
        .bind(utdate)
        .bind(instr)
        .bind(status)
        .bind(ingest_time)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn find(
        pool: &PgPool,
        utdate: NaiveDate,
        instr: &str,
    ) -> Result<Option<PsfrRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM psfr WHERE utdate = $1 AND instr = $2");
        sqlx::query_as::<_, PsfrRow>(&query)
            .bind(utdate)
            .bind(instr)
            .fetch_optional(pool)
            .await
    }
}
