// src/gmt/mod.rs

pub mod options;
pub mod session;

pub use options::{
    BasemapOptions, ColorbarMode, ColorbarOptions, MakecptOptions, PsxyOptions, RasterFormat,
    RasterOptions,
};
pub use session::{rasterize, GmtSession};
