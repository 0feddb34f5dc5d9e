//! Client for the external scoring collaborator.
//!
//! The service trains and evaluates the requested classifiers on its own
//! data; this side only ships the configuration over HTTP and decodes the
//! accuracy report that comes back.

mod api;
mod fields;

pub use api::{
    MAX_REPORT_BYTES, RESULT_ERROR_SENTINEL, ScoreError, ScoreReport, ScoreRequest, submit_scores,
};
pub use fields::MetricField;
