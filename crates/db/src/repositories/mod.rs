//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod koatpx_repo;
pub mod psfr_repo;

pub use koatpx_repo::{KoaTpxRepo, StageColumns};
pub use psfr_repo::PsfrRepo;
