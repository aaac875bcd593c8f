//! Event-registration backend for the Soccer Fiesta event site.
//!
//! Two intake endpoints (Soccer Fiesta and Street Soccer) run the same
//! request-scoped pipeline: normalize the submission, upload any attached
//! images to the media host, persist one record, mail a summary to the
//! administrator, acknowledge the caller.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod intake;
pub mod mailer;
pub mod media;
pub mod metrics;
