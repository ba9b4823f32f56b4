// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the range scanner, the layout engine and the GMT
/// driver. All of them are detected eagerly at the boundary of the
/// responsible component; none are recovered or retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The binary input file is unreadable or its length does not match the
    /// declared record width.
    #[error("format error: {0}")]
    Format(String),

    /// The input holds no usable data (zero records, or NaN breaks the
    /// ordering), so no range is defined.
    #[error("data error: {0}")]
    Data(String),

    /// An invalid parameter was requested (zero panels, bad column index,
    /// negative padding).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Margins and padding leave no room for the panels on the page.
    #[error("layout error: {0}")]
    Layout(String),

    /// An external `gmt` invocation failed.
    #[error("gmt {module} failed: {stderr}")]
    Toolkit { module: String, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
