//! Status table rows as read back by dashboards.
//!
//! Status and time columns are free text in the legacy schema; the
//! ingestion engine only ever writes `DONE`, `ERROR` or `NA` into them.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One `koatpx` row: every pipeline stage for one instrument on one night.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KoaTpxRow {
    pub utdate: NaiveDate,
    pub instr: String,
    pub metadata_stat: Option<String>,
    pub metadata_time: Option<String>,
    pub tpx_stat: Option<String>,
    pub tpx_time: Option<String>,
    pub lev1_stat: Option<String>,
    pub lev1_time: Option<String>,
    pub lev2_stat: Option<String>,
    pub lev2_time: Option<String>,
    pub psfr_stat: Option<String>,
    pub psfr_time: Option<String>,
    pub comment: Option<String>,
}

/// One `psfr` row: the archive ingest receipt for one instrument on one night.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PsfrRow {
    pub utdate: NaiveDate,
    pub instr: String,
    pub ingest_stat: Option<String>,
    pub ingest_time: Option<String>,
}
