// File: crates/linechart-core/src/series.rs
// Summary: Stroke palette and polyline rendering for data series.

use skia_safe as skia;

use crate::scale::LinearScale;

/// Default stroke cycle: red, blue, green.
pub fn default_palette() -> Vec<skia::Color> {
    vec![
        skia::Color::from_argb(255, 255, 0, 0),
        skia::Color::from_argb(255, 0, 0, 255),
        skia::Color::from_argb(255, 0, 255, 0),
    ]
}

/// Stroke color for the series at `index`. The palette repeats once
/// exhausted: a fourth series against the default palette is red again.
/// `palette` must be non-empty; `ChartConfig::from_spec` guarantees that.
pub fn series_color(palette: &[skia::Color], index: usize) -> skia::Color {
    palette[index % palette.len()]
}

/// One continuous open polyline through the series' transformed points:
/// move to the first point, line to each subsequent one. Empty input yields
/// an empty path.
pub fn series_path(points: &[(f64, f64)], x_scale: &LinearScale, y_scale: &LinearScale) -> skia::Path {
    let mut path = skia::Path::new();
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        path.move_to((x_scale.to_px(x) as f32, y_scale.to_px(y) as f32));
        for &(x, y) in iter {
            path.line_to((x_scale.to_px(x) as f32, y_scale.to_px(y) as f32));
        }
    }
    path
}

/// Draws every series in input order, cycling stroke colors through the
/// palette. No markers, no fill, no clipping to the plot area.
pub fn draw_series(
    canvas: &skia::Canvas,
    series: &[Vec<(f64, f64)>],
    palette: &[skia::Color],
    x_scale: &LinearScale,
    y_scale: &LinearScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    for (i, points) in series.iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        paint.set_color(series_color(palette, i));
        canvas.draw_path(&series_path(points, x_scale, y_scale), &paint);
    }
}
