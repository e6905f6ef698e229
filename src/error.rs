//! Error types for split policy boundary validation.
//!
//! The decision path itself never fails: every input snapshot maps to a
//! [`SplitDecision`](crate::policy::SplitDecision), with `NoSplit` as the
//! safe default. Errors exist only at the construction boundary, where
//! malformed snapshots and configs are rejected before they can reach the
//! algorithm.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Duplicate family name in region snapshot: {0}")]
    DuplicateFamily(String),

    #[error("Index family prefix must not be empty")]
    EmptyIndexPrefix,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
