//! Repository for the `koatpx` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use tpx_core::update::StatusTarget;

use crate::models::status::KoaTpxRow;

/// Column list for `koatpx` queries.
const COLUMNS: &str = "\
    utdate, instr, metadata_stat, metadata_time, tpx_stat, tpx_time, \
    lev1_stat, lev1_time, lev2_stat, lev2_time, psfr_stat, psfr_time, comment";

/// Status/time column pair for one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageColumns {
    pub stat: &'static str,
    pub time: &'static str,
}

impl StageColumns {
    /// Columns for a koatpx stage target. `None` for targets living in
    /// another table.
    pub fn for_target(target: StatusTarget) -> Option<Self> {
        let (stat, time) = match target {
            StatusTarget::Metadata => ("metadata_stat", "metadata_time"),
            StatusTarget::Transfer => ("tpx_stat", "tpx_time"),
            StatusTarget::Level1 => ("lev1_stat", "lev1_time"),
            StatusTarget::Level2 => ("lev2_stat", "lev2_time"),
            StatusTarget::PsfReconstruction => ("psfr_stat", "psfr_time"),
            StatusTarget::IngestReceipt => return None,
        };
        Some(Self { stat, time })
    }
}

/// Provides query operations for per-night pipeline status rows.
pub struct KoaTpxRepo;

impl KoaTpxRepo {
    /// Set one stage's status, time and the row comment.
    ///
    /// Returns the number of rows updated (0 when the night has no row yet).
    pub async fn update_stage(
        pool: &PgPool,
        columns: StageColumns,
        utdate: NaiveDate,
        instr: &str,
        status: &str,
        stamped_at: &str,
        comment: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE koatpx \
             SET {stat} = $3, {time} = $4, comment = $5 \
             WHERE utdate = $1 AND instr = $2",
            stat = columns.stat,
            time = columns.time,
        );
        let result = sqlx::query(&query)
            .bind(utdate)
            .bind(instr)
            .bind(status)
            .bind(stamped_at)
            .bind(comment)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Find the row for one instrument on one night.
    pub async fn find(
        pool: &PgPool,
        utdate: NaiveDate,
        instr: &str,
    ) -> Result<Option<KoaTpxRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM koatpx WHERE utdate = $1 AND instr = $2");
        sqlx::query_as::<_, KoaTpxRow>(&query)
            .bind(utdate)
            .bind(instr)
            .fetch_optional(pool)
            .await
    }

    /// List every instrument's row for one night, by instrument name.
    pub async fn list_by_date(
        pool: &PgPool,
        utdate: NaiveDate,
    ) -> Result<Vec<KoaTpxRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM koatpx WHERE utdate = $1 ORDER BY instr");
        sqlx::query_as::<_, KoaTpxRow>(&query)
            .bind(utdate)
            .fetch_all(pool)
            .await
    }
}
