//! Error taxonomy for the packing-list transformation.
//!
//! Every failure is terminal for the invocation that produced it: the drivers
//! catch a `SummaryError` at the top level and render a single message. There
//! is no partial-output mode.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// The named input file does not exist (CLI driver only).
    #[error("file {path:?} not found")]
    InputNotFound { path: PathBuf },

    /// The sentinel token was never located, even after the full-sheet
    /// fallback scan.
    #[error("could not find {sentinel:?} header row")]
    HeaderNotFound { sentinel: String },

    /// One or more required column names are absent from the header row.
    #[error("missing columns {0:?}")]
    MissingColumns(Vec<String>),

    /// Anything else that went wrong while reading or serializing.
    #[error(transparent)]
    Workbook(#[from] anyhow::Error),
}

impl SummaryError {
    /// Short machine-friendly tag, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryError::InputNotFound { .. } => "input_not_found",
            SummaryError::HeaderNotFound { .. } => "header_not_found",
            SummaryError::MissingColumns(_) => "missing_columns",
            SummaryError::Workbook(_) => "workbook",
        }
    }
}
