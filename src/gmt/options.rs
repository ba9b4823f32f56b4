// src/gmt/options.rs
//
// Typed option structs for the GMT modules this tool drives. Each struct
// enumerates every recognized option and renders the exact flag strings.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::range_scan::ColumnRange;

/// Options for one psbasemap call: the panel frame, axis annotation and the
/// absolute placement of the panel on the page.
#[derive(Debug, Clone)]
pub struct BasemapOptions {
    /// Value of -J, e.g. "J120.00p" (built by Projection::panel_arg).
    pub projection: String,
    /// Frame sides and title, e.g. "WSen+tvelocity".
    pub frame: String,
    /// Per-axis annotation/gridline/tick spec (-Bx / -By values).
    pub x_axis: String,
    pub y_axis: String,
    /// Panel origin in points from the page's bottom-left corner.
    pub x_offset_pt: f64,
    pub y_offset_pt: f64,
}

impl BasemapOptions {
    pub fn args(&self) -> Vec<String> {
        vec![
            format!("-J{}", self.projection),
            format!("-B{}", self.frame),
            format!("-Bx{}", self.x_axis),
            format!("-By{}", self.y_axis),
            // 'f' anchors the shift to the fixed lower-left page corner.
            format!("-Xf{:.2}p", self.x_offset_pt),
            format!("-Yf{:.2}p", self.y_offset_pt),
        ]
    }
}

/// Options for one psxy call plotting one data column straight from the
/// binary input file.
#[derive(Debug, Clone)]
pub struct PsxyOptions {
    pub data: PathBuf,
    /// Input column selection (-i value), e.g. "0,1,4" for x, y and the
    /// third data column.
    pub input_cols: String,
    /// Binary record definition (-bi value), e.g. "4d".
    pub bindef: String,
    /// Symbol spec (-S value), e.g. "c0.025c".
    pub symbol: String,
    /// Same -J value as the basemap the points land on.
    pub projection: String,
}

impl PsxyOptions {
    pub fn args(&self, cpt: &Path) -> Vec<String> {
        vec![
            self.data.display().to_string(),
            format!("-J{}", self.projection),
            format!("-i{}", self.input_cols),
            format!("-bi{}", self.bindef),
            format!("-S{}", self.symbol),
            format!("-C{}", cpt.display()),
        ]
    }
}

/// Options for makecpt: sample a named color table over the value range.
#[derive(Debug, Clone)]
pub struct MakecptOptions {
    /// Master color table name, passed through to -C (e.g. "drywet").
    pub table: String,
    pub range: ColumnRange,
    /// Optional sampling step appended to -T.
    pub step: Option<f64>,
    /// -Z: continuous color scale instead of discrete slices.
    pub continuous: bool,
}

impl MakecptOptions {
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![format!("-C{}", self.table)];
        let mut t = format!("-T{}/{}", self.range.min, self.range.max);
        if let Some(step) = self.step {
            t.push_str(&format!("/{}", step));
        }
        args.push(t);
        if self.continuous {
            args.push("-Z".to_string());
        }
        args
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorbarMode {
    Vertical,
    Horizontal,
}

impl ColorbarMode {
    pub fn parse(mode: &str) -> Result<Self> {
        match mode {
            "v" => Ok(Self::Vertical),
            "h" => Ok(Self::Horizontal),
            other => Err(Error::Configuration(format!(
                "colorbar mode must be 'v' or 'h', got '{}'",
                other
            ))),
        }
    }
}

/// Options for psscale: colorbar placement and annotation.
#[derive(Debug, Clone)]
pub struct ColorbarOptions {
    pub mode: ColorbarMode,
    /// Distance from the page edge towards the interior, in points.
    pub offset_pt: f64,
    /// Annotation spec (-B value), e.g. "5" or "10+lLOS velocity".
    pub annotation: String,
    pub length_pt: f64,
    pub width_pt: f64,
}

impl ColorbarOptions {
    /// Placement depends on the page: vertical bars hug the right edge,
    /// horizontal bars the bottom.
    pub fn args(&self, page_width: f64, page_height: f64, cpt: &Path) -> Vec<String> {
        let position = match self.mode {
            ColorbarMode::Vertical => format!(
                "x{:.2}p/{:.2}p+w{:.2}p/{:.2}p+jML",
                page_width - self.offset_pt,
                page_height / 2.0,
                self.length_pt,
                self.width_pt
            ),
            ColorbarMode::Horizontal => format!(
                "x{:.2}p/{:.2}p+w{:.2}p/{:.2}p+jBC+h",
                page_width / 2.0,
                self.offset_pt,
                self.length_pt,
                self.width_pt
            ),
        };
        vec![
            format!("-D{}", position),
            format!("-B{}", self.annotation),
            format!("-C{}", cpt.display()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Tiff,
    Pdf,
}

impl RasterFormat {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "tif" | "tiff" => Ok(Self::Tiff),
            "pdf" => Ok(Self::Pdf),
            other => Err(Error::Configuration(format!(
                "unsupported raster format '.{}' (expected png, jpg, tif or pdf)",
                other
            ))),
        }
    }

    fn flag(self, transparent: bool) -> &'static str {
        match (self, transparent) {
            (Self::Png, true) => "-TG",
            (Self::Png, false) => "-Tg",
            (Self::Jpeg, _) => "-Tj",
            (Self::Tiff, _) => "-Tt",
            (Self::Pdf, _) => "-Tf",
        }
    }
}

/// Options for psconvert: turn the finished PostScript into a raster file.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub format: RasterFormat,
    pub dpi: u32,
    /// Convert colors to grayscale (passed through to Ghostscript).
    pub gray: bool,
    pub transparent: bool,
    pub portrait: bool,
    /// Keep the full page size instead of cropping to the plot's bounding
    /// box.
    pub with_pagesize: bool,
    /// Produce one multi-page PDF instead of the extension's format.
    pub multi_page: bool,
}

impl RasterOptions {
    pub fn args(&self) -> Vec<String> {
        let format_flag = if self.multi_page {
            "-TF".to_string()
        } else {
            self.format.flag(self.transparent).to_string()
        };
        let mut args = vec![format_flag, format!("-E{}", self.dpi)];
        if !self.with_pagesize {
            args.push("-A".to_string());
        }
        if self.gray {
            args.push("-C-sColorConversionStrategy=Gray".to_string());
            args.push("-C-dProcessColorModel=/DeviceGray".to_string());
        }
        if self.portrait {
            args.push("-P".to_string());
        }
        args
    }
}
