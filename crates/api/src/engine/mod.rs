//! Status ingestion engine.
//!
//! The dispatcher validates an inbound report and picks the handler for its
//! category; the updater turns the resulting record into a store update and
//! an acknowledgment.

pub mod dispatcher;
pub mod updater;
