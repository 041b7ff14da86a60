//! Handler for the `/tpx_status` ingestion endpoint.
//!
//! Pipeline stages call this with query-string parameters on GET or POST.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tpx_core::acknowledgment::Acknowledgment;
use tpx_core::record::StatusReport;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters of a status report, under the names pipeline stages send.
#[derive(Debug, Default, Deserialize)]
pub struct TpxStatusQuery {
    pub instr: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "statusType")]
    pub status_type: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "statusMessage")]
    pub status_message: Option<String>,
}

impl TpxStatusQuery {
    /// Check the required parameters are present and build the raw report.
    pub fn into_report(self) -> AppResult<StatusReport> {
        Ok(StatusReport {
            instrument: required(self.instr, "instr")?,
            observation_date: required(self.date, "date")?,
            category: required(self.status_type, "statusType")?,
            outcome: required(self.status, "status")?,
            outcome_message: self.status_message,
        })
    }
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing required parameter '{name}'")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET|POST /tpx_status
///
/// Record a stage status and acknowledge it: plain text for most
/// categories, JSON for transfer receipts.
pub async fn report_status(
    State(state): State<AppState>,
    query: Result<Query<TpxStatusQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let report = query.into_report()?;
    let ack = state.dispatcher.dispatch(report).await?;
    Ok(render_ack(ack))
}

fn render_ack(ack: Acknowledgment) -> Response {
    match ack {
        Acknowledgment::Plain(message) => message.into_response(),
        Acknowledgment::Structured(receipt) => Json(receipt).into_response(),
    }
}
