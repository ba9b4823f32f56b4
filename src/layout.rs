// src/layout.rs

use crate::constants::{A4_HEIGHT_PT, A4_WIDTH_PT};
use crate::error::{Error, Result};

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH_PT,
            height: A4_HEIGHT_PT,
        }
    }
}

/// Page area reserved around the panel grid, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn uniform(margin: f64) -> Self {
        Self {
            left: margin,
            top: margin,
            right: margin,
            bottom: margin,
        }
    }
}

/// A multi-panel layout request. `nrows == 0` picks the row count
/// automatically as ceil(sqrt(count)).
#[derive(Debug, Clone, Copy)]
pub struct PanelGrid {
    pub count: usize,
    pub nrows: usize,
    pub margins: Margins,
    pub xpad: f64,
    pub ypad: f64,
}

/// A GMT projection code, split into the part that matters for layout:
/// Cartesian projections take a free width/height, everything else keeps
/// the map proportional, so panels are forced square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    code: String,
    free_aspect: bool,
}

impl Projection {
    pub fn parse(code: &str) -> Result<Self> {
        let first = code.chars().next().ok_or_else(|| {
            Error::Configuration("projection code must not be empty".into())
        })?;
        Ok(Self {
            code: code.to_string(),
            free_aspect: first == 'X' || first == 'x',
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_free_aspect(&self) -> bool {
        self.free_aspect
    }

    /// The per-panel -J argument value. Cartesian projections get an
    /// explicit width/height, proportional ones a width only.
    pub fn panel_arg(&self, width_pt: f64, height_pt: f64) -> String {
        if self.free_aspect {
            format!("{}{:.2}p/{:.2}p", self.code, width_pt, height_pt)
        } else {
            format!("{}{:.2}p", self.code, width_pt)
        }
    }
}

/// Lower-left origin of one panel, in points from the page's bottom-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPosition {
    pub x: f64,
    pub y: f64,
}

/// Result of a layout run: one position per panel plus the common panel
/// dimensions.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub positions: Vec<PanelPosition>,
    pub panel_width: f64,
    pub panel_height: f64,
    pub nrows: usize,
    pub ncols: usize,
}

/// Computes non-overlapping panel origins for `grid.count` panels.
///
/// Conventions, pinned by the tests in tests/layout_test.rs:
/// - the page origin is the bottom-left corner and every position is a
///   panel's lower-left corner;
/// - panels fill row-major, top row first, left to right (panel 0 is the
///   top-left cell);
/// - for a single panel the cell is exactly the usable area and the origin
///   is (margins.left, margins.bottom).
pub fn multiplot(page: PageSize, projection: &Projection, grid: &PanelGrid) -> Result<PanelLayout> {
    if grid.count == 0 {
        return Err(Error::Configuration("panel count must be positive".into()));
    }
    if grid.xpad < 0.0 || grid.ypad < 0.0 {
        return Err(Error::Configuration(format!(
            "panel padding must be non-negative (xpad {}, ypad {})",
            grid.xpad, grid.ypad
        )));
    }

    let nrows = if grid.nrows == 0 {
        (grid.count as f64).sqrt().ceil() as usize
    } else {
        grid.nrows
    };
    let ncols = grid.count.div_ceil(nrows);

    let m = grid.margins;
    let usable_w = page.width - m.left - m.right;
    let usable_h = page.height - m.top - m.bottom;

    let cell_w = (usable_w - (ncols - 1) as f64 * grid.xpad) / ncols as f64;
    let cell_h = (usable_h - (nrows - 1) as f64 * grid.ypad) / nrows as f64;
    if cell_w <= 0.0 {
        return Err(Error::Layout(format!(
            "panel width {:.2}p is not positive ({} columns on a {:.0}p page, margins {:.0}p+{:.0}p, xpad {:.0}p)",
            cell_w, ncols, page.width, m.left, m.right, grid.xpad
        )));
    }
    if cell_h <= 0.0 {
        return Err(Error::Layout(format!(
            "panel height {:.2}p is not positive ({} rows on a {:.0}p page, margins {:.0}p+{:.0}p, ypad {:.0}p)",
            cell_h, nrows, page.height, m.top, m.bottom, grid.ypad
        )));
    }

    // Proportional projections keep the map square inside its cell.
    let (panel_width, panel_height) = if projection.is_free_aspect() {
        (cell_w, cell_h)
    } else {
        let side = cell_w.min(cell_h);
        (side, side)
    };

    let positions = (0..grid.count)
        .map(|i| {
            let row = i / ncols;
            let col = i % ncols;
            PanelPosition {
                x: m.left + col as f64 * (cell_w + grid.xpad),
                y: m.bottom + (nrows - 1 - row) as f64 * (cell_h + grid.ypad),
            }
        })
        .collect();

    Ok(PanelLayout {
        positions,
        panel_width,
        panel_height,
        nrows,
        ncols,
    })
}
