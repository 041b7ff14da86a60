//! Inbound status reports and the per-request status record built from them.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::category::StatusCategory;
use crate::error::CoreError;
use crate::instrument::Instrument;
use crate::outcome::Outcome;
use crate::types::{ObsDate, Timestamp, OBS_DATE_FORMAT};

/// Timestamp format of the koatpx `*_time` columns.
pub const STAGE_TIME_FORMAT: &str = "%Y%m%d %H:%M";

/// Timestamp format of the psfr `ingest_time` column and the structured
/// acknowledgment.
pub const RECEIPT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A status report exactly as received, before any validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusReport {
    pub instrument: String,
    pub observation_date: String,
    pub category: String,
    pub outcome: String,
    pub outcome_message: Option<String>,
}

/// Parse an observation date in `YYYY-MM-DD` form.
pub fn parse_obs_date(raw: &str) -> Result<ObsDate, CoreError> {
    NaiveDate::parse_from_str(raw, OBS_DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "observation date '{raw}' must be formatted as YYYY-MM-DD"
        ))
    })
}

/// One validated report. Lives for a single request and is never stored as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    instrument: Instrument,
    observation_date: ObsDate,
    category: StatusCategory,
    outcome: Outcome,
    outcome_message: Option<String>,
    received_at: Timestamp,
}

impl StatusRecord {
    /// Build a record from already-resolved parts.
    ///
    /// The outcome is normalized here, so every reader of the record sees
    /// the same value that gets persisted. A blank message counts as absent.
    pub fn new(
        instrument: Instrument,
        observation_date: ObsDate,
        category: StatusCategory,
        raw_outcome: &str,
        outcome_message: Option<String>,
        received_at: Timestamp,
    ) -> Self {
        Self {
            instrument,
            observation_date,
            category,
            outcome: Outcome::normalize(raw_outcome),
            outcome_message: outcome_message.filter(|m| !m.trim().is_empty()),
            received_at,
        }
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn observation_date(&self) -> ObsDate {
        self.observation_date
    }

    pub fn category(&self) -> StatusCategory {
        self.category
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The free-text message, `None` standing in for "no message".
    pub fn outcome_message(&self) -> Option<&str> {
        self.outcome_message.as_deref()
    }

    pub fn received_at(&self) -> Timestamp {
        self.received_at
    }

    /// Processing date, `%Y-%m-%d`.
    pub fn received_at_date(&self) -> String {
        self.received_at.format(OBS_DATE_FORMAT).to_string()
    }

    /// Processing time in the koatpx column format.
    pub fn received_at_time(&self) -> String {
        self.received_at.format(STAGE_TIME_FORMAT).to_string()
    }

    /// Processing time in the receipt format.
    pub fn receipt_time(&self) -> String {
        self.received_at.format(RECEIPT_TIME_FORMAT).to_string()
    }

    /// The sentence every acknowledgment carries.
    pub fn summary(&self) -> String {
        format!("{} ingestion was {}", self.category, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn received_at() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 2, 7, 5, 9).unwrap()
    }

    fn record(raw_outcome: &str, message: Option<&str>) -> StatusRecord {
        StatusRecord::new(
            Instrument::Deimos,
            parse_obs_date("2024-03-01").unwrap(),
            StatusCategory::Level1,
            raw_outcome,
            message.map(str::to_string),
            received_at(),
        )
    }

    #[test]
    fn outcome_is_normalized_on_construction() {
        assert_eq!(record("DONE", None).outcome(), Outcome::Done);
        assert_eq!(record("PENDING", None).outcome(), Outcome::NotApplicable);
    }

    #[test]
    fn blank_message_counts_as_absent() {
        assert_eq!(record("DONE", Some("  ")).outcome_message(), None);
        assert_eq!(record("DONE", Some("ok")).outcome_message(), Some("ok"));
    }

    #[test]
    fn timestamps_use_column_formats() {
        let rec = record("DONE", None);
        assert_eq!(rec.received_at_date(), "2024-03-02");
        assert_eq!(rec.received_at_time(), "20240302 07:05");
        assert_eq!(rec.receipt_time(), "2024-03-02 07:05:09");
    }

    #[test]
    fn summary_names_category_and_normalized_outcome() {
        assert_eq!(record("DONE", None).summary(), "level1 ingestion was DONE");
        assert_eq!(record("bogus", None).summary(), "level1 ingestion was NA");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(parse_obs_date("2024-03-01").is_ok());
        assert_matches!(parse_obs_date("20240301"), Err(CoreError::Validation(_)));
        assert_matches!(parse_obs_date("2024-02-30"), Err(CoreError::Validation(_)));
    }
}
