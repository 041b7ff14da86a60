//! Category dispatcher.
//!
//! Handles one report in three steps, each with its own failure:
//!
//! 1. build the record: resolve the instrument (`UnknownInstrument`) and
//!    parse the observation date (`Validation`);
//! 2. look up the category (`UnknownCategory`);
//! 3. run the category's handler (`UpdateFailed` on store errors).
//!
//! Nothing touches the store before step 3.

use std::sync::Arc;

use chrono::Utc;
use tpx_core::acknowledgment::Acknowledgment;
use tpx_core::category::StatusCategory;
use tpx_core::error::CoreError;
use tpx_core::instrument::InstrumentRegistry;
use tpx_core::record::{parse_obs_date, StatusRecord, StatusReport};
use tpx_core::store::{StatusStore, StoreError};
use tpx_core::types::Timestamp;

use super::updater::{RecordUpdater, UpdaterConfig};

/// Routes status reports to their category handler.
///
/// Holds no mutable state; one instance serves every request.
pub struct StatusDispatcher {
    registry: Arc<InstrumentRegistry>,
    updater: RecordUpdater,
}

impl StatusDispatcher {
    pub fn new(
        registry: Arc<InstrumentRegistry>,
        store: Arc<dyn StatusStore>,
        config: UpdaterConfig,
    ) -> Self {
        Self {
            registry,
            updater: RecordUpdater::new(store, config),
        }
    }

    /// Handle a report received now.
    pub async fn dispatch(&self, report: StatusReport) -> Result<Acknowledgment, CoreError> {
        self.dispatch_at(report, Utc::now()).await
    }

    /// Handle a report, stamping it with `received_at`.
    pub async fn dispatch_at(
        &self,
        report: StatusReport,
        received_at: Timestamp,
    ) -> Result<Acknowledgment, CoreError> {
        tracing::info!(
            instr = %report.instrument,
            date = %report.observation_date,
            status_type = %report.category,
            status = %report.outcome,
            "Status report received",
        );

        let record = self.build_record(report, received_at)?;

        let result = match record.category() {
            StatusCategory::Meta => self.updater.update_meta(&record).await,
            StatusCategory::Level0 => self.updater.update_level0(&record).await,
            StatusCategory::Level1 => self.updater.update_level1(&record).await,
            StatusCategory::Level2 => self.updater.update_level2(&record).await,
            StatusCategory::TransferReceipt => {
                self.updater.update_transfer_receipt(&record).await
            }
            StatusCategory::PsfReconstruction => {
                self.updater.update_psf_reconstruction(&record).await
            }
            StatusCategory::Weather => self.updater.update_weather(&record).await,
        };

        match result {
            Ok(ack) => {
                tracing::info!(
                    instr = %record.instrument(),
                    utdate = %record.observation_date(),
                    processed_on = %record.received_at_date(),
                    ack = ack.message(),
                    "Status report handled",
                );
                Ok(ack)
            }
            Err(err) => Err(update_failed(&record, err)),
        }
    }

    /// Steps 1 and 2: instrument and date, then category.
    fn build_record(
        &self,
        report: StatusReport,
        received_at: Timestamp,
    ) -> Result<StatusRecord, CoreError> {
        let instrument = self
            .registry
            .resolve(&report.instrument)
            .inspect_err(|err| tracing::warn!(error = %err, "Could not create status record"))?;

        let observation_date = parse_obs_date(&report.observation_date)
            .inspect_err(|err| tracing::warn!(error = %err, "Could not create status record"))?;

        let category = StatusCategory::from_key(&report.category)
            .inspect_err(|err| tracing::warn!(error = %err, "Could not dispatch status type"))?;

        Ok(StatusRecord::new(
            instrument,
            observation_date,
            category,
            &report.outcome,
            report.outcome_message,
            received_at,
        ))
    }
}

fn update_failed(record: &StatusRecord, err: StoreError) -> CoreError {
    tracing::error!(
        error = %err,
        instr = %record.instrument(),
        utdate = %record.observation_date(),
        status_type = %record.category(),
        "Could not execute status type",
    );
    CoreError::UpdateFailed(err.to_string())
}
