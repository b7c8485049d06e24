//! Error types for report generation.

use thiserror::Error;

/// Errors from report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Generation was attempted on a result with no groups; the caller
    /// should re-run aggregation first.
    #[error("aggregation result has no groups to report")]
    EmptyResult,

    /// Workbook assembly or serialization failed.
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
