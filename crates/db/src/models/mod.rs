//! Row models for the status tables.

pub mod status;
