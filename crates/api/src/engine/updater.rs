//! Per-category record updates.
//!
//! Every handler follows the same shape: build at most one last-write-wins
//! [`StatusUpdate`] from the (already normalized) record, apply it, and
//! return the category's acknowledgment. Store failures are passed up
//! untouched; the dispatcher decides how to report them.

use std::sync::Arc;

use tpx_core::acknowledgment::Acknowledgment;
use tpx_core::record::StatusRecord;
use tpx_core::store::{StatusStore, StoreError};
use tpx_core::update::{StatusTarget, StatusUpdate};

/// Switches fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Persist level-2 and PSF-reconstruction reports. Off by default: those
    /// columns are reserved and only acknowledged.
    pub reserved_stages_enabled: bool,
}

/// Writes status records into the store, one handler per category.
pub struct RecordUpdater {
    store: Arc<dyn StatusStore>,
    config: UpdaterConfig,
}

impl RecordUpdater {
    pub fn new(store: Arc<dyn StatusStore>, config: UpdaterConfig) -> Self {
        Self { store, config }
    }

    /// Metadata status, time and comment.
    pub async fn update_meta(&self, record: &StatusRecord) -> Result<Acknowledgment, StoreError> {
        self.apply(StatusUpdate::stage(StatusTarget::Metadata, record))
            .await?;
        Ok(Acknowledgment::plain(record))
    }

    /// Level-0 transfer status, time and comment.
    pub async fn update_level0(&self, record: &StatusRecord) -> Result<Acknowledgment, StoreError> {
        self.apply(StatusUpdate::stage(StatusTarget::Transfer, record))
            .await?;
        Ok(Acknowledgment::plain(record))
    }

    /// Level-1 status, time and comment.
    pub async fn update_level1(&self, record: &StatusRecord) -> Result<Acknowledgment, StoreError> {
        self.apply(StatusUpdate::stage(StatusTarget::Level1, record))
            .await?;
        Ok(Acknowledgment::plain(record))
    }

    /// Reserved; acknowledged without a write unless reserved stages are on.
    pub async fn update_level2(&self, record: &StatusRecord) -> Result<Acknowledgment, StoreError> {
        self.apply_reserved(StatusTarget::Level2, record).await?;
        Ok(Acknowledgment::plain(record))
    }

    /// Ingest receipt. Only `DONE` and `ERROR` are written; the structured
    /// acknowledgment is returned either way.
    pub async fn update_transfer_receipt(
        &self,
        record: &StatusRecord,
    ) -> Result<Acknowledgment, StoreError> {
        if record.outcome().is_final() {
            self.apply(StatusUpdate::ingest_receipt(record)).await?;
        } else {
            tracing::debug!(
                instr = %record.instrument(),
                utdate = %record.observation_date(),
                "Transfer receipt without a final outcome, nothing written",
            );
        }
        Ok(Acknowledgment::structured(record))
    }

    /// Reserved; acknowledged without a write unless reserved stages are on.
    pub async fn update_psf_reconstruction(
        &self,
        record: &StatusRecord,
    ) -> Result<Acknowledgment, StoreError> {
        self.apply_reserved(StatusTarget::PsfReconstruction, record)
            .await?;
        Ok(Acknowledgment::plain(record))
    }

    /// Weather reports are acknowledged and nothing else.
    pub async fn update_weather(
        &self,
        record: &StatusRecord,
    ) -> Result<Acknowledgment, StoreError> {
        Ok(Acknowledgment::plain(record))
    }

    async fn apply_reserved(
        &self,
        target: StatusTarget,
        record: &StatusRecord,
    ) -> Result<(), StoreError> {
        if !self.config.reserved_stages_enabled {
            tracing::debug!(target_fields = %target, "Reserved stage disabled, nothing written");
            return Ok(());
        }
        self.apply(StatusUpdate::stage(target, record)).await
    }

    async fn apply(&self, update: StatusUpdate) -> Result<(), StoreError> {
        let rows = self.store.apply(&update).await?;
        if rows == 0 {
            tracing::warn!(
                target_fields = %update.target,
                instr = %update.key.instrument,
                utdate = %update.key.observation_date,
                "No status row for this night, update had no effect",
            );
        }
        Ok(())
    }
}
