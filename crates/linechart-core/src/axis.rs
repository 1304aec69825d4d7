// File: crates/linechart-core/src/axis.rs
// Summary: Tick marks, rotated tick labels, and axis names for the drawn borders.
// Notes:
// - Only the left and bottom axes are drawn. The top and right borders are
//   sized during layout but have no renderer.
// - Axis names are centered on the full canvas extent, not the plot area, so
//   strongly asymmetric borders shift them off the plot's visual center.

use skia_safe as skia;

use crate::config::ChartConfig;
use crate::geometry::PlotRect;
use crate::scale::LinearScale;
use crate::text::{TextMeasurer, TextStyle};

const RIGHT_ANGLE: f64 = std::f64::consts::FRAC_PI_2;

fn stroke_paint() -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(skia::Color::BLACK);
    paint
}

fn text_paint() -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(skia::Color::BLACK);
    paint
}

fn is_axis_aligned(rotation: f64) -> bool {
    rotation == 0.0 || (rotation - RIGHT_ANGLE).abs() < 1e-6
}

/// Draws `text` with its baseline-left anchor at (x, y), rotated
/// counter-clockwise by `rotation` radians about that anchor. The same
/// rotation convention backs the footprint estimate in border sizing, so
/// labels stay inside their reserved thickness.
fn draw_rotated_text(
    canvas: &skia::Canvas,
    measurer: &TextMeasurer,
    style: &TextStyle,
    text: &str,
    x: f64,
    y: f64,
    rotation: f64,
) {
    let font = measurer.resolve(style);
    canvas.save();
    canvas.translate((x as f32, y as f32));
    if rotation != 0.0 {
        canvas.rotate(-rotation.to_degrees() as f32, None);
    }
    canvas.draw_str(text, (0.0, 0.0), &font, &text_paint());
    canvas.restore();
}

/// Left border: tick marks jut out from the plot edge, labels sit between
/// the axis name and the tick marks.
pub fn draw_left_axis(
    canvas: &skia::Canvas,
    measurer: &TextMeasurer,
    config: &ChartConfig,
    plot: &PlotRect,
    y_scale: &LinearScale,
) {
    let border = &config.left;
    let mut label_x = border.pre_label_padding + border.post_label_padding;
    if !border.label.is_empty() {
        let (_, h) = measurer.measure(&border.label_style, &border.label);
        label_x += h;
    }

    let stroke = stroke_paint();
    for tick in &border.ticks {
        let y = y_scale.to_px(tick.location);
        let (w, h) = measurer.measure(&tick.style, &tick.label);
        // Axis-aligned labels center their footprint on the tick; other
        // angles keep the full offset so the label hangs below the tick.
        let footprint = h * tick.rotation.cos() + w * tick.rotation.sin();
        let y_adj = if is_axis_aligned(tick.rotation) { footprint / 2.0 } else { footprint };
        draw_rotated_text(canvas, measurer, &tick.style, &tick.label, label_x, y + y_adj, tick.rotation);

        canvas.draw_line(
            ((plot.left - border.tick_size) as f32, y as f32),
            (plot.left as f32, y as f32),
            &stroke,
        );
    }
}

/// Bottom border: tick marks below the plot edge, labels below them.
pub fn draw_bottom_axis(
    canvas: &skia::Canvas,
    measurer: &TextMeasurer,
    config: &ChartConfig,
    plot: &PlotRect,
    x_scale: &LinearScale,
) {
    let border = &config.bottom;
    let stroke = stroke_paint();
    for tick in &border.ticks {
        let x = x_scale.to_px(tick.location);
        let (w, h) = measurer.measure(&tick.style, &tick.label);
        let centering = if is_axis_aligned(tick.rotation) {
            (h * tick.rotation.sin() + w * tick.rotation.cos()) / 2.0
        } else {
            0.0
        };
        let x_adj = centering - w * tick.rotation.cos();
        let y_adj = w * tick.rotation.sin() + h * tick.rotation.cos();
        draw_rotated_text(
            canvas,
            measurer,
            &tick.style,
            &tick.label,
            x + x_adj,
            plot.bottom + border.tick_size + border.post_tick_label_padding + y_adj,
            tick.rotation,
        );

        canvas.draw_line(
            (x as f32, plot.bottom as f32),
            (x as f32, (plot.bottom + border.tick_size) as f32),
            &stroke,
        );
    }
}

/// Axis names for the drawn borders: the y name rotated a quarter turn along
/// the left edge, the x name horizontal along the bottom edge.
pub fn draw_axis_names(canvas: &skia::Canvas, measurer: &TextMeasurer, config: &ChartConfig) {
    if !config.left.label.is_empty() {
        let (w, h) = measurer.measure(&config.left.label_style, &config.left.label);
        let x = config.left.pre_label_padding + h;
        let y = config.height as f64 / 2.0 + w / 2.0;
        draw_rotated_text(canvas, measurer, &config.left.label_style, &config.left.label, x, y, RIGHT_ANGLE);
    }

    if !config.bottom.label.is_empty() {
        let (w, _) = measurer.measure(&config.bottom.label_style, &config.bottom.label);
        let x = config.width as f64 / 2.0 - w / 2.0;
        let y = config.height as f64 - config.bottom.pre_label_padding;
        draw_rotated_text(canvas, measurer, &config.bottom.label_style, &config.bottom.label, x, y, 0.0);
    }
}
