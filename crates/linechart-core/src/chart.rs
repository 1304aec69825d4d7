// File: crates/linechart-core/src/chart.rs
// Summary: Chart orchestrator and headless PNG rendering pipeline using a Skia CPU raster surface.

use skia_safe as skia;

use crate::axis;
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::grid;
use crate::layout;
use crate::scale::LinearScale;
use crate::series;
use crate::text::TextMeasurer;

/// Owns one immutable configuration and renders it in a single pass.
pub struct LineChart {
    config: ChartConfig,
}

impl LineChart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Renders the chart and returns the encoded PNG bytes.
    ///
    /// Pipeline order is fixed: border/title sizing, plot-area derivation,
    /// frame rectangle, title, gridlines, axes (left and bottom), series.
    /// Layout and transform validation run before the surface is touched, so
    /// a failed render never produces partial output.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let c = &self.config;
        let measurer = TextMeasurer::new();

        let frame = layout::compute_frame(&measurer, c);
        let plot = layout::plot_area(c, &frame);
        let x_scale = LinearScale::horizontal(c.x_min, c.x_max, &plot)?;
        let y_scale = LinearScale::vertical(c.y_min, c.y_max, &plot)?;

        let mut surface = skia::surfaces::raster_n32_premul((c.width, c.height))
            .ok_or(ChartError::Surface { width: c.width, height: c.height })?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::WHITE);

        draw_plot_frame(canvas, &plot);
        draw_title(canvas, &measurer, c);
        grid::draw_gridlines(canvas, &plot, &x_scale, &y_scale, &c.x_gridlines, &c.y_gridlines);
        axis::draw_axis_names(canvas, &measurer, c);
        axis::draw_left_axis(canvas, &measurer, c, &plot, &y_scale);
        axis::draw_bottom_axis(canvas, &measurer, c, &plot, &x_scale);
        series::draw_series(canvas, &c.series, &c.palette, &x_scale, &y_scale);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Renders and writes a PNG at `output_png_path`. The file is written
    /// only after the whole canvas has been rendered and encoded.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_plot_frame(canvas: &skia::Canvas, plot: &PlotRect) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(skia::Color::BLACK);
    canvas.draw_rect(
        skia::Rect::from_ltrb(
            plot.left as f32,
            plot.top as f32,
            plot.right as f32,
            plot.bottom as f32,
        ),
        &paint,
    );
}

fn draw_title(canvas: &skia::Canvas, measurer: &TextMeasurer, config: &ChartConfig) {
    if config.title.is_empty() {
        return;
    }
    let (w, h) = measurer.measure(&config.title_style, &config.title);
    let x = (config.width as f64 - w) / 2.0;
    let y = h + config.pre_title_padding;

    let font = measurer.resolve(&config.title_style);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(skia::Color::BLACK);
    canvas.draw_str(&config.title, (x as f32, y as f32), &font, &paint);
}
