// File: crates/linechart-core/tests/series.rs
// Purpose: Validate palette cycling and polyline construction.

use linechart_core::series::{default_palette, series_color, series_path};
use linechart_core::{LinearScale, PlotRect};

fn scales() -> (LinearScale, LinearScale) {
    let plot = PlotRect::from_ltrb(0.0, 0.0, 100.0, 100.0);
    (
        LinearScale::horizontal(0.0, 10.0, &plot).expect("x scale"),
        LinearScale::vertical(0.0, 10.0, &plot).expect("y scale"),
    )
}

#[test]
fn palette_cycles_in_order_with_wraparound() {
    let palette = default_palette();
    // red, blue, green, then red again for a fourth series
    assert_eq!(series_color(&palette, 0), palette[0]);
    assert_eq!(series_color(&palette, 1), palette[1]);
    assert_eq!(series_color(&palette, 2), palette[2]);
    assert_eq!(series_color(&palette, 3), palette[0]);
    assert_eq!(series_color(&palette, 7), palette[1]);
}

#[test]
fn polyline_has_one_segment_per_point_pair() {
    let (x, y) = scales();
    for n in [5usize, 3, 7] {
        let points: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, i as f64 * 0.5)).collect();
        let path = series_path(&points, &x, &y);
        // one move plus n-1 lines, and the contour stays open
        assert_eq!(path.count_points(), n);
        assert_eq!(path.count_verbs(), n);
        assert!(!path.is_last_contour_closed());
    }
}

#[test]
fn empty_series_yields_empty_path() {
    let (x, y) = scales();
    let path = series_path(&[], &x, &y);
    assert_eq!(path.count_points(), 0);
}

#[test]
fn polyline_endpoints_hit_plot_corners() {
    let (x, y) = scales();
    let path = series_path(&[(0.0, 0.0), (10.0, 10.0)], &x, &y);
    let bounds = path.bounds();
    assert!((bounds.left - 0.0).abs() < 1e-4);
    assert!((bounds.top - 0.0).abs() < 1e-4);
    assert!((bounds.right - 100.0).abs() < 1e-4);
    assert!((bounds.bottom - 100.0).abs() < 1e-4);
}
