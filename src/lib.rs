// src/lib.rs - Library interface for internal module access

pub mod cli;
pub mod constants;
pub mod error;
pub mod gmt;
pub mod layout;
pub mod range_scan;

pub use error::{Error, Result};
pub use layout::{multiplot, Margins, PageSize, PanelGrid, PanelLayout, PanelPosition, Projection};
pub use range_scan::{get_ranges, ColumnRange, RecordLayout, XyRange};
