//! Acknowledgments returned for a successfully handled report.

use serde::Serialize;

use crate::category::StatusCategory;
use crate::instrument::Instrument;
use crate::outcome::Outcome;
use crate::record::StatusRecord;
use crate::types::ObsDate;

/// Value of `apiStatus` once the endpoint has finished handling a receipt.
pub const API_STATUS_COMPLETE: &str = "COMPLETE";

/// Structured acknowledgment sent for transfer receipts.
///
/// `api_status` describes the acknowledgment itself; `outcome` is the
/// ingestion result that was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptAck {
    pub api_status: &'static str,
    pub observation_date: ObsDate,
    pub instrument: Instrument,
    pub category: StatusCategory,
    pub outcome: Outcome,
    pub message: String,
    pub timestamp: String,
}

impl ReceiptAck {
    pub fn for_record(record: &StatusRecord) -> Self {
        Self {
            api_status: API_STATUS_COMPLETE,
            observation_date: record.observation_date(),
            instrument: record.instrument(),
            category: record.category(),
            outcome: record.outcome(),
            message: record.summary(),
            timestamp: record.receipt_time(),
        }
    }
}

/// What a caller gets back for a handled report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    /// `"<category> ingestion was <OUTCOME>"`.
    Plain(String),
    /// Transfer receipts only.
    Structured(ReceiptAck),
}

impl Acknowledgment {
    pub fn plain(record: &StatusRecord) -> Self {
        Self::Plain(record.summary())
    }

    pub fn structured(record: &StatusRecord) -> Self {
        Self::Structured(ReceiptAck::for_record(record))
    }

    /// The human-readable sentence, whichever shape this is.
    pub fn message(&self) -> &str {
        match self {
            Self::Plain(message) => message,
            Self::Structured(ack) => &ack.message,
        }
    }
}
