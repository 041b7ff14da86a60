//! Store updates derived from a status record.

use std::fmt;

use crate::instrument::Instrument;
use crate::outcome::Outcome;
use crate::record::StatusRecord;
use crate::types::ObsDate;

/// Symbolic field set an update writes.
///
/// The persistence adapter maps each target to fixed columns; nothing from
/// the request ever names a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTarget {
    /// koatpx `metadata_stat` / `metadata_time` / `comment`.
    Metadata,
    /// koatpx `tpx_stat` / `tpx_time` / `comment`.
    Transfer,
    /// koatpx `lev1_stat` / `lev1_time` / `comment`.
    Level1,
    /// koatpx `lev2_stat` / `lev2_time` / `comment`.
    Level2,
    /// koatpx `psfr_stat` / `psfr_time` / `comment`.
    PsfReconstruction,
    /// psfr `ingest_stat` / `ingest_time`.
    IngestReceipt,
}

impl StatusTarget {
    /// Whether the target carries the free-text `comment` column.
    pub fn has_comment(&self) -> bool {
        !matches!(self, Self::IngestReceipt)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Transfer => "transfer",
            Self::Level1 => "level1",
            Self::Level2 => "level2",
            Self::PsfReconstruction => "psf_reconstruction",
            Self::IngestReceipt => "ingest_receipt",
        }
    }
}

impl fmt::Display for StatusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row a status update applies to: one instrument on one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub observation_date: ObsDate,
    pub instrument: Instrument,
}

/// A single last-write-wins update against one status row.
///
/// Applying the same update twice leaves the row as applying it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub target: StatusTarget,
    pub key: RecordKey,
    pub outcome: Outcome,
    /// Already formatted for the target's time column.
    pub stamped_at: String,
    /// `None` is written as SQL `NULL`. Always `None` for targets without a
    /// comment column.
    pub comment: Option<String>,
}

impl StatusUpdate {
    /// Update for one of the koatpx stage field sets.
    pub fn stage(target: StatusTarget, record: &StatusRecord) -> Self {
        Self {
            target,
            key: RecordKey {
                observation_date: record.observation_date(),
                instrument: record.instrument(),
            },
            outcome: record.outcome(),
            stamped_at: record.received_at_time(),
            comment: if target.has_comment() {
                record.outcome_message().map(str::to_string)
            } else {
                None
            },
        }
    }

    /// Update for the psfr ingest receipt.
    pub fn ingest_receipt(record: &StatusRecord) -> Self {
        Self {
            target: StatusTarget::IngestReceipt,
            key: RecordKey {
                observation_date: record.observation_date(),
                instrument: record.instrument(),
            },
            outcome: record.outcome(),
            stamped_at: record.receipt_time(),
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::category::StatusCategory;
    use crate::record::parse_obs_date;

    fn record(category: StatusCategory, outcome: &str) -> StatusRecord {
        StatusRecord::new(
            Instrument::Hires,
            parse_obs_date("2024-03-01").unwrap(),
            category,
            outcome,
            Some("checked".to_string()),
            Utc.with_ymd_and_hms(2024, 3, 2, 1, 2, 3).unwrap(),
        )
    }

    #[test]
    fn stage_update_carries_stage_time_and_comment() {
        let update =
            StatusUpdate::stage(StatusTarget::Level1, &record(StatusCategory::Level1, "DONE"));

        assert_eq!(update.key.instrument, Instrument::Hires);
        assert_eq!(update.key.observation_date.to_string(), "2024-03-01");
        assert_eq!(update.outcome, Outcome::Done);
        assert_eq!(update.stamped_at, "20240302 01:02");
        assert_eq!(update.comment.as_deref(), Some("checked"));
    }

    #[test]
    fn stage_update_persists_normalized_outcome() {
        let update =
            StatusUpdate::stage(StatusTarget::Metadata, &record(StatusCategory::Meta, "maybe"));
        assert_eq!(update.outcome, Outcome::NotApplicable);
    }

    #[test]
    fn ingest_receipt_has_no_comment_and_receipt_time() {
        let update =
            StatusUpdate::ingest_receipt(&record(StatusCategory::TransferReceipt, "ERROR"));

        assert_eq!(update.target, StatusTarget::IngestReceipt);
        assert_eq!(update.stamped_at, "2024-03-02 01:02:03");
        assert_eq!(update.comment, None);
    }
}
