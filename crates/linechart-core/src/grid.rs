// File: crates/linechart-core/src/grid.rs
// Summary: Tick spacing helper and gridline rendering.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::scale::LinearScale;

/// `steps` evenly spaced values from `start` to `end`, endpoints included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Draws low-emphasis reference lines across the plot area: x gridlines as
/// verticals spanning the full plot height, y gridlines as horizontals
/// spanning the full width. Rendered beneath axes and series.
pub fn draw_gridlines(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    x_values: &[f64],
    y_values: &[f64],
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(0.4);
    paint.set_color(skia::Color::from_argb(128, 0, 0, 0));

    for &v in x_values {
        let x = x_scale.to_px(v) as f32;
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    for &v in y_values {
        let y = y_scale.to_px(v) as f32;
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}
