// src/cli.rs

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{
    DEFAULT_COLORBAR_OFFSET_PT, DEFAULT_CPT, DEFAULT_DPI, DEFAULT_MARGIN_PT, DEFAULT_PANEL_PAD_PT,
    DEFAULT_PROJECTION, DEFAULT_XY_PAD, DEFAULT_X_AXIS, DEFAULT_Y_AXIS, DEFAULT_Z_PAD,
};

/// Plot scattered points from a flat binary column file as a grid of GMT
/// maps, one panel per data column.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Binary input file: native-endian f64 records, two coordinate
    /// columns followed by the data columns.
    pub infile: PathBuf,

    /// Number of data columns in the input file.
    pub ncols: usize,

    /// PostScript or raster output file (default: input stem + ".png").
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Projection of the maps (GMT -J code without a width).
    #[arg(short, long, default_value = DEFAULT_PROJECTION)]
    pub proj: String,

    /// Zero-based data column indices to plot (default: all of them).
    #[arg(short, long, value_delimiter = ',')]
    pub idx: Option<Vec<usize>>,

    /// Per-column panel titles (default: the 1-based column number).
    #[arg(long, value_delimiter = ',')]
    pub titles: Option<Vec<String>>,

    /// Only draw the basemaps, to test panel placement.
    #[arg(long)]
    pub tryaxis: bool,

    /// Explicit x/y range as xmin,xmax,ymin,ymax (default: scanned from
    /// the input file).
    #[arg(long, value_delimiter = ',', num_args = 4)]
    pub xy_range: Option<Vec<f64>>,

    /// Explicit value range as zmin,zmax (default: scanned from the input
    /// file).
    #[arg(long, value_delimiter = ',', num_args = 2)]
    pub z_range: Option<Vec<f64>>,

    /// GMT colorscale name.
    #[arg(long, default_value = DEFAULT_CPT)]
    pub cpt: String,

    /// GMT annotation spec of the x axis.
    #[arg(long, default_value = DEFAULT_X_AXIS)]
    pub x_axis: String,

    /// GMT annotation spec of the y axis.
    #[arg(long, default_value = DEFAULT_Y_AXIS)]
    pub y_axis: String,

    /// Fractional extension of the x and y range.
    #[arg(long, default_value_t = DEFAULT_XY_PAD)]
    pub xy_add: f64,

    /// Fractional extension of the value range.
    #[arg(long, default_value_t = DEFAULT_Z_PAD)]
    pub z_add: f64,

    /// Colorbar mode: v for vertical, h for horizontal.
    #[arg(long, default_value = "v")]
    pub mode: String,

    /// Colorbar label, appended to the annotation (-B) spec of psscale.
    #[arg(long)]
    pub label: Option<String>,

    /// Colorbar offset towards the page margin, in points.
    #[arg(long, default_value_t = DEFAULT_COLORBAR_OFFSET_PT)]
    pub offset: f64,

    /// Step of the colorbar ticks.
    #[arg(long)]
    pub step: Option<f64>,

    /// Number of panel rows; 0 picks a balanced row count automatically.
    #[arg(long, default_value_t = 0)]
    pub nrows: usize,

    /// Left page margin in points.
    #[arg(long, default_value_t = DEFAULT_MARGIN_PT)]
    pub left: f64,

    /// Top page margin in points.
    #[arg(long, default_value_t = DEFAULT_MARGIN_PT)]
    pub top: f64,

    /// Right page margin in points.
    #[arg(long, default_value_t = DEFAULT_MARGIN_PT)]
    pub right: f64,

    /// Bottom page margin in points.
    #[arg(long, default_value_t = DEFAULT_MARGIN_PT)]
    pub bottom: f64,

    /// Horizontal padding between panels, in points.
    #[arg(long, default_value_t = DEFAULT_PANEL_PAD_PT)]
    pub xpad: f64,

    /// Vertical padding between panels, in points.
    #[arg(long, default_value_t = DEFAULT_PANEL_PAD_PT)]
    pub ypad: f64,

    /// Raster resolution for the converted output.
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Convert the raster output to grayscale.
    #[arg(long)]
    pub gray: bool,

    /// Transparent background for PNG output.
    #[arg(long)]
    pub transparent: bool,

    /// Force portrait orientation in the raster conversion.
    #[arg(long)]
    pub portrait: bool,

    /// Keep the full page size instead of cropping to the plot.
    #[arg(long)]
    pub pagesize: bool,

    /// Produce a multi-page PDF instead of the format implied by the
    /// output extension.
    #[arg(long)]
    pub multi_page: bool,
}
