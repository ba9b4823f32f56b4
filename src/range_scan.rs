// src/range_scan.rs

use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::mem;
use std::path::Path;

use byteorder::{NativeEndian, ReadBytesExt};
use ndarray::{s, Array2, ArrayView, Dimension};
use ndarray_stats::errors::MinMaxError;
use ndarray_stats::QuantileExt;

use crate::error::{Error, Result};

/// How one fixed-width binary record is interpreted: `ncols` data columns
/// preceded by two coordinate columns, every field a native-endian f64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    ncols: usize,
}

impl RecordLayout {
    pub fn new(ncols: usize) -> Result<Self> {
        if ncols == 0 {
            return Err(Error::Configuration(
                "number of data columns must be positive".into(),
            ));
        }
        Ok(Self { ncols })
    }

    /// Number of data columns (excluding the two coordinate columns).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Total fields per record: x, y, then the data columns.
    pub fn fields(&self) -> usize {
        self.ncols + 2
    }

    pub fn record_bytes(&self) -> usize {
        self.fields() * mem::size_of::<f64>()
    }

    /// GMT binary input definition for this layout, e.g. "4d" for two data
    /// columns (the argument of psxy's -bi flag).
    pub fn gmt_bindef(&self) -> String {
        format!("{}d", self.fields())
    }
}

/// Closed interval of observed values for one logical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min > max {
            return Err(Error::Configuration(format!(
                "range minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Expand both bounds outward by `fraction` of the interval width. A
    /// degenerate interval (min == max) stays degenerate.
    pub fn pad(self, fraction: f64) -> Self {
        let step = fraction * self.width();
        Self {
            min: self.min - step,
            max: self.max + step,
        }
    }

    fn from_view<D: Dimension>(view: ArrayView<'_, f64, D>, what: &str) -> Result<Self> {
        let min = *view.min().map_err(|e| min_max_error(e, what))?;
        let max = *view.max().map_err(|e| min_max_error(e, what))?;
        Ok(Self { min, max })
    }
}

fn min_max_error(e: MinMaxError, what: &str) -> Error {
    match e {
        MinMaxError::EmptyInput => Error::Data(format!("no records, {} range undefined", what)),
        MinMaxError::UndefinedOrder => {
            Error::Data(format!("NaN in {} column, range undefined", what))
        }
    }
}

/// Spatial bounding box of the scanned coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyRange {
    pub x: ColumnRange,
    pub y: ColumnRange,
}

impl XyRange {
    pub fn from_bounds(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self> {
        Ok(Self {
            x: ColumnRange::new(xmin, xmax)?,
            y: ColumnRange::new(ymin, ymax)?,
        })
    }
}

/// Renders as the value of GMT's -R flag: xmin/xmax/ymin/ymax.
impl fmt::Display for XyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.x.min, self.x.max, self.y.min, self.y.max
        )
    }
}

/// Scans a flat binary file of fixed-width f64 records and returns the
/// padded spatial and value ranges.
///
/// Column 0 is x, column 1 is y; the remaining `layout.ncols()` columns are
/// data values and contribute jointly to the value range. `xy_add` and
/// `z_add` are the fractional outward paddings; zero reproduces the raw
/// observed min/max exactly.
pub fn get_ranges(
    path: &Path,
    layout: RecordLayout,
    xy_add: f64,
    z_add: f64,
) -> Result<(XyRange, ColumnRange)> {
    if xy_add < 0.0 || z_add < 0.0 {
        return Err(Error::Configuration(format!(
            "range padding must be non-negative (xy_add {}, z_add {})",
            xy_add, z_add
        )));
    }

    let data = read_records(path, layout)?;

    let x = ColumnRange::from_view(data.column(0), "x")?;
    let y = ColumnRange::from_view(data.column(1), "y")?;
    let z = ColumnRange::from_view(data.slice(s![.., 2..]), "value")?;

    let xy_range = XyRange {
        x: x.pad(xy_add),
        y: y.pad(xy_add),
    };
    Ok((xy_range, z.pad(z_add)))
}

/// Reads the whole file into a records-by-fields array. Input files are
/// megabyte-scale at most.
fn read_records(path: &Path, layout: RecordLayout) -> Result<Array2<f64>> {
    let length = fs::metadata(path)
        .map_err(|e| Error::Format(format!("{}: {}", path.display(), e)))?
        .len();
    let record_bytes = layout.record_bytes() as u64;

    if length % record_bytes != 0 {
        return Err(Error::Format(format!(
            "{}: length {} is not a multiple of the {}-byte record ({} data columns + 2 coordinates)",
            path.display(),
            length,
            record_bytes,
            layout.ncols()
        )));
    }

    let n_records = (length / record_bytes) as usize;
    if n_records == 0 {
        return Err(Error::Data(format!(
            "{}: no records, ranges undefined",
            path.display()
        )));
    }

    let mut values = vec![0.0f64; n_records * layout.fields()];
    {
        let file = File::open(path).map_err(|e| Error::Format(format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        reader
            .read_f64_into::<NativeEndian>(&mut values)
            .map_err(|e| Error::Format(format!("{}: {}", path.display(), e)))?;
    }

    Array2::from_shape_vec((n_records, layout.fields()), values)
        .map_err(|e| Error::Data(format!("{}: {}", path.display(), e)))
}
