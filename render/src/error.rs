//! Error types for chart rendering.

use thiserror::Error;

/// Errors that can occur while building or saving a chart workbook.
#[derive(Debug, Error)]
pub enum RenderError {
    /// File I/O failure while writing the workbook.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Degenerate chart geometry (zero bucket width or horizon).
    #[error("config error: {0}")]
    Config(#[from] sprintchart_core::ConfigError),

    /// Workbook construction or serialization failure.
    #[error("workbook error: {0}")]
    Workbook(String),
}

impl From<rust_xlsxwriter::XlsxError> for RenderError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(err.to_string())
    }
}

/// Convenience alias for results with [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;
