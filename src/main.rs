// src/main.rs

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use plot_scatter::cli::Cli;
use plot_scatter::constants::{COLORBAR_LENGTH_FRACTION, COLORBAR_WIDTH_PT, SCATTER_SYMBOL};
use plot_scatter::gmt::{
    rasterize, BasemapOptions, ColorbarMode, ColorbarOptions, GmtSession, MakecptOptions,
    PsxyOptions, RasterFormat, RasterOptions,
};
use plot_scatter::layout::{multiplot, Margins, PageSize, PanelGrid, Projection};
use plot_scatter::range_scan::{get_ranges, ColumnRange, RecordLayout, XyRange};
use plot_scatter::{Error, Result};

fn main() {
    let args = Cli::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let record_layout = RecordLayout::new(args.ncols)?;

    // Default output is "<input stem>.png"; everything is drawn into an
    // intermediate PostScript file first.
    let out = match &args.out {
        Some(out) => out.clone(),
        None => PathBuf::from(input_stem(args)).with_extension("png"),
    };
    let want_ps = out.extension().map(|e| e == "ps").unwrap_or(false);
    let ps_file = if want_ps {
        out.clone()
    } else {
        out.with_extension("ps")
    };
    // Resolve the raster format up front so a bad output name fails before
    // any GMT call runs.
    let raster_format = if want_ps {
        None
    } else {
        let ext = out
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Configuration(format!("{}: no output extension", out.display())))?;
        Some(RasterFormat::from_extension(ext)?)
    };

    // --- Ranges: scan the input unless both were given explicitly. ---
    let (xy_range, z_range) = match (&args.xy_range, &args.z_range) {
        (Some(xy), Some(z)) => (
            XyRange::from_bounds(xy[0], xy[1], xy[2], xy[3])?,
            ColumnRange::new(z[0], z[1])?,
        ),
        (xy_arg, z_arg) => {
            let (scanned_xy, scanned_z) =
                get_ranges(&args.infile, record_layout, args.xy_add, args.z_add)?;
            println!(
                "Scanned {}: xy range {}, value range {}/{}",
                args.infile.display(),
                scanned_xy,
                scanned_z.min,
                scanned_z.max
            );
            let xy = match xy_arg {
                Some(xy) => XyRange::from_bounds(xy[0], xy[1], xy[2], xy[3])?,
                None => scanned_xy,
            };
            let z = match z_arg {
                Some(z) => ColumnRange::new(z[0], z[1])?,
                None => scanned_z,
            };
            (xy, z)
        }
    };

    // --- Panel selection and titles. ---
    let idx: Vec<usize> = match &args.idx {
        Some(idx) => idx.clone(),
        None => (0..args.ncols).collect(),
    };
    if let Some(&bad) = idx.iter().find(|&&i| i >= args.ncols) {
        return Err(Error::Configuration(format!(
            "column index {} out of range (input has {} data columns)",
            bad, args.ncols
        )));
    }

    let titles: Vec<String> = match &args.titles {
        Some(titles) if titles.len() >= args.ncols => titles.clone(),
        Some(titles) => {
            return Err(Error::Configuration(format!(
                "{} titles given for {} data columns",
                titles.len(),
                args.ncols
            )));
        }
        None => (1..=args.ncols).map(|i| i.to_string()).collect(),
    };

    // --- Page layout. ---
    let page = PageSize::a4();
    let projection = Projection::parse(&args.proj)?;
    let mode = ColorbarMode::parse(&args.mode)?;
    let grid = PanelGrid {
        count: idx.len(),
        nrows: args.nrows,
        margins: Margins {
            left: args.left,
            top: args.top,
            right: args.right,
            bottom: args.bottom,
        },
        xpad: args.xpad,
        ypad: args.ypad,
    };
    let panel_layout = multiplot(page, &projection, &grid)?;
    println!(
        "Placing {} panels as {} x {} ({:.1}p x {:.1}p each)",
        idx.len(),
        panel_layout.nrows,
        panel_layout.ncols,
        panel_layout.panel_width,
        panel_layout.panel_height
    );

    // --- Drive GMT. ---
    let mut gmt = GmtSession::new(&ps_file, &xy_range, page)?;
    gmt.makecpt(&MakecptOptions {
        table: args.cpt.clone(),
        range: z_range,
        step: args.step,
        continuous: true,
    })?;

    let panel_arg = projection.panel_arg(panel_layout.panel_width, panel_layout.panel_height);
    for (position, &col) in panel_layout.positions.iter().zip(&idx) {
        gmt.psbasemap(&BasemapOptions {
            projection: panel_arg.clone(),
            frame: format!("WSen+t{}", titles[col]),
            x_axis: args.x_axis.clone(),
            y_axis: args.y_axis.clone(),
            x_offset_pt: position.x,
            y_offset_pt: position.y,
        })?;

        // --tryaxis only checks the basemap placement.
        if !args.tryaxis {
            gmt.psxy(&PsxyOptions {
                data: args.infile.clone(),
                input_cols: format!("0,1,{}", col + 2),
                bindef: record_layout.gmt_bindef(),
                symbol: SCATTER_SYMBOL.to_string(),
                projection: panel_arg.clone(),
            })?;
        }
    }

    let mut annotation = match args.step {
        Some(step) => step.to_string(),
        None => "5".to_string(),
    };
    if let Some(label) = &args.label {
        annotation.push_str(label);
    }
    let bar_length = COLORBAR_LENGTH_FRACTION
        * match mode {
            ColorbarMode::Vertical => page.height,
            ColorbarMode::Horizontal => page.width,
        };
    gmt.colorbar(&ColorbarOptions {
        mode,
        offset_pt: args.offset,
        annotation,
        length_pt: bar_length,
        width_pt: COLORBAR_WIDTH_PT,
    })?;

    let ps_file = gmt.finish()?;

    if let Some(format) = raster_format {
        rasterize(
            &ps_file,
            &out,
            &RasterOptions {
                format,
                dpi: args.dpi,
                gray: args.gray,
                transparent: args.transparent,
                portrait: args.portrait,
                with_pagesize: args.pagesize,
                multi_page: args.multi_page,
            },
        )?;
        fs::remove_file(&ps_file)?;
    }

    println!("Plot saved as '{}'.", out.display());
    Ok(())
}

fn input_stem(args: &Cli) -> String {
    args.infile
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plot".to_string())
}
