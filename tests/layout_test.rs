// tests/layout_test.rs

use plot_scatter::layout::{multiplot, Margins, PageSize, PanelGrid, PanelLayout, Projection};
use plot_scatter::Error;

fn page(width: f64, height: f64) -> PageSize {
    PageSize { width, height }
}

fn grid(count: usize, nrows: usize, margin: f64, pad: f64) -> PanelGrid {
    PanelGrid {
        count,
        nrows,
        margins: Margins::uniform(margin),
        xpad: pad,
        ypad: pad,
    }
}

fn cartesian() -> Projection {
    Projection::parse("X").unwrap()
}

/// Every panel's cell must stay inside the usable area and no two cells may
/// overlap.
fn assert_tiles(layout: &PanelLayout, page: PageSize, g: &PanelGrid) {
    let m = g.margins;
    for p in &layout.positions {
        assert!(p.x >= m.left - 1e-9);
        assert!(p.y >= m.bottom - 1e-9);
        assert!(p.x + layout.panel_width <= page.width - m.right + 1e-9);
        assert!(p.y + layout.panel_height <= page.height - m.top + 1e-9);
    }
    for (i, a) in layout.positions.iter().enumerate() {
        for b in layout.positions.iter().skip(i + 1) {
            let disjoint_x =
                a.x + layout.panel_width <= b.x + 1e-9 || b.x + layout.panel_width <= a.x + 1e-9;
            let disjoint_y =
                a.y + layout.panel_height <= b.y + 1e-9 || b.y + layout.panel_height <= a.y + 1e-9;
            assert!(disjoint_x || disjoint_y, "panels overlap: {:?} {:?}", a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_panels_on_a_square_page() {
        // The pinned convention: bottom-left page origin, positions are
        // lower-left panel corners, row-major fill with the top row first.
        let layout = multiplot(page(100.0, 100.0), &cartesian(), &grid(4, 2, 0.0, 0.0)).unwrap();

        assert_eq!(layout.nrows, 2);
        assert_eq!(layout.ncols, 2);
        assert_eq!(layout.panel_width, 50.0);
        assert_eq!(layout.panel_height, 50.0);

        let xy: Vec<(f64, f64)> = layout.positions.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.0, 50.0), (50.0, 50.0), (0.0, 0.0), (50.0, 0.0)]);
    }

    #[test]
    fn single_panel_fills_the_usable_area() {
        let g = grid(1, 0, 10.0, 5.0);
        let layout = multiplot(page(200.0, 300.0), &cartesian(), &g).unwrap();

        assert_eq!(layout.positions.len(), 1);
        assert_eq!(layout.positions[0].x, 10.0);
        assert_eq!(layout.positions[0].y, 10.0);
        assert_eq!(layout.panel_width, 180.0);
        assert_eq!(layout.panel_height, 280.0);
    }

    #[test]
    fn auto_row_count_is_ceil_sqrt() {
        let layout = multiplot(page(400.0, 400.0), &cartesian(), &grid(5, 0, 0.0, 0.0)).unwrap();
        assert_eq!(layout.nrows, 3);
        assert_eq!(layout.ncols, 2);
        assert_eq!(layout.positions.len(), 5);

        let layout = multiplot(page(400.0, 400.0), &cartesian(), &grid(9, 0, 0.0, 0.0)).unwrap();
        assert_eq!(layout.nrows, 3);
        assert_eq!(layout.ncols, 3);
    }

    #[test]
    fn panels_tile_without_overlap() {
        for count in 1..=7 {
            let g = grid(count, 0, 20.0, 8.0);
            let p = page(595.0, 842.0);
            let layout = multiplot(p, &cartesian(), &g).unwrap();
            assert_eq!(layout.positions.len(), count);
            assert_tiles(&layout, p, &g);
        }
    }

    #[test]
    fn inter_panel_padding_separates_columns_and_rows() {
        let layout = multiplot(page(110.0, 110.0), &cartesian(), &grid(4, 2, 0.0, 10.0)).unwrap();
        assert_eq!(layout.panel_width, 50.0);
        assert_eq!(layout.panel_height, 50.0);

        let xy: Vec<(f64, f64)> = layout.positions.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.0, 60.0), (60.0, 60.0), (0.0, 0.0), (60.0, 0.0)]);
    }

    #[test]
    fn geographic_projection_forces_square_panels() {
        let proj = Projection::parse("J").unwrap();
        assert!(!proj.is_free_aspect());

        let layout = multiplot(page(200.0, 100.0), &proj, &grid(2, 1, 0.0, 0.0)).unwrap();
        // Cells are 100 x 100; the square constraint is a no-op here.
        assert_eq!(layout.panel_width, 100.0);
        assert_eq!(layout.panel_height, 100.0);

        let layout = multiplot(page(400.0, 100.0), &proj, &grid(2, 1, 0.0, 0.0)).unwrap();
        // Cells are 200 x 100, so panels shrink to 100 x 100.
        assert_eq!(layout.panel_width, 100.0);
        assert_eq!(layout.panel_height, 100.0);
    }

    #[test]
    fn zero_panels_is_a_configuration_error() {
        let err = multiplot(page(100.0, 100.0), &cartesian(), &grid(0, 0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "got {:?}", err);
    }

    #[test]
    fn oversized_margins_are_a_layout_error() {
        let err = multiplot(page(100.0, 100.0), &cartesian(), &grid(4, 2, 60.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::Layout(_)), "got {:?}", err);
    }

    #[test]
    fn excessive_padding_is_a_layout_error() {
        let err = multiplot(page(100.0, 100.0), &cartesian(), &grid(9, 3, 0.0, 60.0)).unwrap_err();
        assert!(matches!(err, Error::Layout(_)), "got {:?}", err);
    }

    #[test]
    fn negative_padding_is_a_configuration_error() {
        let mut g = grid(4, 2, 0.0, 0.0);
        g.xpad = -1.0;
        let err = multiplot(page(100.0, 100.0), &cartesian(), &g).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "got {:?}", err);
    }

    #[test]
    fn projection_panel_arguments() {
        let cart = Projection::parse("X").unwrap();
        assert_eq!(cart.panel_arg(120.0, 80.0), "X120.00p/80.00p");

        let mercator = Projection::parse("M").unwrap();
        assert_eq!(mercator.panel_arg(120.0, 80.0), "M120.00p");

        assert!(matches!(
            Projection::parse(""),
            Err(Error::Configuration(_))
        ));
    }
}
