//! Domain types for the TPX status ingestion service.
//!
//! Everything here is I/O free: the persistence side is reached only
//! through the [`store::StatusStore`] trait, implemented by `tpx-db`.

pub mod acknowledgment;
pub mod category;
pub mod error;
pub mod instrument;
pub mod outcome;
pub mod record;
pub mod store;
pub mod types;
pub mod update;
