// tests/gmt_options_test.rs

use std::path::{Path, PathBuf};

use plot_scatter::gmt::{
    BasemapOptions, ColorbarMode, ColorbarOptions, MakecptOptions, PsxyOptions, RasterFormat,
    RasterOptions,
};
use plot_scatter::range_scan::{ColumnRange, XyRange};
use plot_scatter::Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basemap_arguments_place_the_panel_absolutely() {
        let opts = BasemapOptions {
            projection: "M120.00p".to_string(),
            frame: "WSen+tvelocity".to_string(),
            x_axis: "a0.5g0.25f0.25".to_string(),
            y_axis: "a0.25g0.25f0.25".to_string(),
            x_offset_pt: 40.0,
            y_offset_pt: 401.0,
        };
        assert_eq!(
            opts.args(),
            vec![
                "-JM120.00p",
                "-BWSen+tvelocity",
                "-Bxa0.5g0.25f0.25",
                "-Bya0.25g0.25f0.25",
                "-Xf40.00p",
                "-Yf401.00p",
            ]
        );
    }

    #[test]
    fn psxy_arguments_select_binary_columns() {
        let opts = PsxyOptions {
            data: PathBuf::from("points.dat"),
            input_cols: "0,1,4".to_string(),
            bindef: "5d".to_string(),
            symbol: "c0.025c".to_string(),
            projection: "M120.00p".to_string(),
        };
        assert_eq!(
            opts.args(Path::new("tmp.cpt")),
            vec![
                "points.dat",
                "-JM120.00p",
                "-i0,1,4",
                "-bi5d",
                "-Sc0.025c",
                "-Ctmp.cpt",
            ]
        );
    }

    #[test]
    fn makecpt_arguments_cover_the_value_range() {
        let opts = MakecptOptions {
            table: "drywet".to_string(),
            range: ColumnRange::new(-4.0, 12.0).unwrap(),
            step: None,
            continuous: true,
        };
        assert_eq!(opts.args(), vec!["-Cdrywet", "-T-4/12", "-Z"]);

        let stepped = MakecptOptions {
            step: Some(0.5),
            continuous: false,
            ..opts
        };
        assert_eq!(stepped.args(), vec!["-Cdrywet", "-T-4/12/0.5"]);
    }

    #[test]
    fn colorbar_hugs_the_right_or_bottom_edge() {
        let opts = ColorbarOptions {
            mode: ColorbarMode::Vertical,
            offset_pt: 25.0,
            annotation: "5".to_string(),
            length_pt: 600.0,
            width_pt: 12.0,
        };
        assert_eq!(
            opts.args(595.0, 842.0, Path::new("tmp.cpt")),
            vec![
                "-Dx570.00p/421.00p+w600.00p/12.00p+jML",
                "-B5",
                "-Ctmp.cpt",
            ]
        );

        let horizontal = ColorbarOptions {
            mode: ColorbarMode::Horizontal,
            ..opts
        };
        assert_eq!(
            horizontal.args(595.0, 842.0, Path::new("tmp.cpt")),
            vec![
                "-Dx297.50p/25.00p+w600.00p/12.00p+jBC+h",
                "-B5",
                "-Ctmp.cpt",
            ]
        );
    }

    #[test]
    fn colorbar_mode_parsing() {
        assert_eq!(ColorbarMode::parse("v").unwrap(), ColorbarMode::Vertical);
        assert_eq!(ColorbarMode::parse("h").unwrap(), ColorbarMode::Horizontal);
        assert!(matches!(
            ColorbarMode::parse("x"),
            Err(Error::Configuration(_))
        ));
    }

    fn raster_defaults() -> RasterOptions {
        RasterOptions {
            format: RasterFormat::Png,
            dpi: 300,
            gray: false,
            transparent: false,
            portrait: false,
            with_pagesize: false,
            multi_page: false,
        }
    }

    #[test]
    fn raster_options_map_to_psconvert_flags() {
        let portrait = RasterOptions {
            portrait: true,
            ..raster_defaults()
        };
        assert_eq!(portrait.args(), vec!["-Tg", "-E300", "-A", "-P"]);

        let transparent = RasterOptions {
            transparent: true,
            ..raster_defaults()
        };
        assert_eq!(transparent.args(), vec!["-TG", "-E300", "-A"]);

        assert_eq!(RasterFormat::from_extension("png").unwrap(), RasterFormat::Png);
        assert_eq!(RasterFormat::from_extension("tif").unwrap(), RasterFormat::Tiff);
        assert_eq!(RasterFormat::from_extension("pdf").unwrap(), RasterFormat::Pdf);
        assert!(matches!(
            RasterFormat::from_extension("bmp"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn grayscale_passes_ghostscript_options_through() {
        let gray = RasterOptions {
            gray: true,
            ..raster_defaults()
        };
        assert_eq!(
            gray.args(),
            vec![
                "-Tg",
                "-E300",
                "-A",
                "-C-sColorConversionStrategy=Gray",
                "-C-dProcessColorModel=/DeviceGray",
            ]
        );
    }

    #[test]
    fn pagesize_keeps_the_full_page_uncropped() {
        let full_page = RasterOptions {
            with_pagesize: true,
            ..raster_defaults()
        };
        assert_eq!(full_page.args(), vec!["-Tg", "-E300"]);
    }

    #[test]
    fn multi_page_overrides_the_format_with_pdf() {
        let multi = RasterOptions {
            format: RasterFormat::Pdf,
            multi_page: true,
            ..raster_defaults()
        };
        assert_eq!(multi.args(), vec!["-TF", "-E300", "-A"]);
    }

    #[test]
    fn region_renders_as_the_r_flag_value() {
        let region = XyRange::from_bounds(-0.05, 1.05, 2.0, 3.0).unwrap();
        assert_eq!(region.to_string(), "-0.05/1.05/2/3");
    }
}
