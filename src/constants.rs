// src/constants.rs

// Page dimensions in PostScript points (A4 portrait, the GMT default
// PS_MEDIA).
pub const A4_WIDTH_PT: f64 = 595.0;
pub const A4_HEIGHT_PT: f64 = 842.0;

// Fractional outward extension of the computed data ranges, so points do
// not sit exactly on the axis edges.
pub const DEFAULT_XY_PAD: f64 = 0.05;
pub const DEFAULT_Z_PAD: f64 = 0.1;

// Page layout defaults, all in points.
pub const DEFAULT_MARGIN_PT: f64 = 40.0;
pub const DEFAULT_PANEL_PAD_PT: f64 = 10.0;
pub const DEFAULT_COLORBAR_OFFSET_PT: f64 = 25.0;

// Colorbar geometry relative to the page.
pub const COLORBAR_LENGTH_FRACTION: f64 = 0.75;
pub const COLORBAR_WIDTH_PT: f64 = 12.0;

// GMT defaults mirrored from the command line interface.
pub const DEFAULT_CPT: &str = "drywet";
pub const DEFAULT_X_AXIS: &str = "a0.5g0.25f0.25";
pub const DEFAULT_Y_AXIS: &str = "a0.25g0.25f0.25";
pub const DEFAULT_PROJECTION: &str = "J";
pub const SCATTER_SYMBOL: &str = "c0.025c";
pub const DEFAULT_DPI: u32 = 300;
