// File: crates/linechart-core/src/config.rs
// Summary: Chart configuration model and its pure construction path.

use skia_safe as skia;

use crate::grid::linspace;
use crate::series::default_palette;
use crate::text::TextStyle;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Formats a tick's data value into its label text.
pub type TickFormatter = fn(f64) -> String;

/// Default x formatter: plain shortest-round-trip formatting.
pub fn format_plain(value: f64) -> String {
    format!("{value}")
}

/// Default y formatter: three significant digits, trailing zeros trimmed.
pub fn format_sig3(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (2 - exponent).max(0) as usize;
    let s = format!("{value:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// One labeled mark at a data-space location along a border.
#[derive(Clone, Debug)]
pub struct Tick {
    pub style: TextStyle,
    pub label: String,
    /// Counter-clockwise rotation of the label, radians. Border sizing is
    /// only valid for angles in [0, pi/2]; see `layout::rotated_footprint`.
    pub rotation: f64,
    /// Position in data space along the border's axis.
    pub location: f64,
}

impl Tick {
    pub fn new(label: impl Into<String>, location: f64) -> Self {
        Self { style: TextStyle::tick_default(), label: label.into(), rotation: 0.0, location }
    }

    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }
}

/// One of the four margins around the plot area: its ticks, axis name, and
/// the fixed spacing structure.
///
/// With no ticks and an empty label, the border still consumes its paddings
/// plus tick mark length.
#[derive(Clone, Debug)]
pub struct Border {
    pub ticks: Vec<Tick>,
    /// Axis name; empty means none.
    pub label: String,
    pub label_style: TextStyle,
    pub pre_label_padding: f64,
    pub post_label_padding: f64,
    pub post_tick_label_padding: f64,
    /// Length of the tick marks jutting out from the plot edge.
    pub tick_size: f64,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            ticks: Vec::new(),
            label: String::new(),
            label_style: TextStyle::axis_label_default(),
            pre_label_padding: 5.0,
            post_label_padding: 0.0,
            post_tick_label_padding: 0.0,
            tick_size: 5.0,
        }
    }
}

/// Raw chart inputs. Feed one of these to `ChartConfig::from_spec` to get a
/// fully derived configuration.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Ordered data series, each an ordered sequence of (x, y) points.
    pub series: Vec<Vec<(f64, f64)>>,
    /// Explicit data bounds; derived from the series when absent.
    pub x_bounds: Option<(f64, f64)>,
    pub y_bounds: Option<(f64, f64)>,
    /// Reference-line positions in data space.
    pub x_gridlines: Vec<f64>,
    pub y_gridlines: Vec<f64>,
    /// Rotation applied to the generated x ticks, radians.
    pub x_tick_rotation: f64,
    pub format_x: TickFormatter,
    pub format_y: TickFormatter,
    /// Series stroke cycle; falls back to red/blue/green when empty.
    pub palette: Vec<skia::Color>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            x_bounds: None,
            y_bounds: None,
            x_gridlines: Vec::new(),
            y_gridlines: Vec::new(),
            x_tick_rotation: 17f64.to_radians(),
            format_x: format_plain,
            format_y: format_sig3,
            palette: default_palette(),
        }
    }
}

/// Fully derived chart configuration. Built once, then read-only for the
/// whole render pass.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub x_gridlines: Vec<f64>,
    pub y_gridlines: Vec<f64>,
    pub top: Border,
    pub left: Border,
    pub right: Border,
    pub bottom: Border,
    /// Chart title; empty means none.
    pub title: String,
    pub title_style: TextStyle,
    pub pre_title_padding: f64,
    pub post_title_padding: f64,
    /// Data-space bounds. Defaults are an empty (inverted-infinite) range
    /// that rendering rejects as degenerate unless real bounds are set.
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub series: Vec<Vec<(f64, f64)>>,
    pub palette: Vec<skia::Color>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_gridlines: Vec::new(),
            y_gridlines: Vec::new(),
            top: Border::default(),
            left: Border::default(),
            right: Border::default(),
            bottom: Border::default(),
            title: String::new(),
            title_style: TextStyle::title_default(),
            pre_title_padding: 5.0,
            post_title_padding: 1.0,
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
            series: Vec::new(),
            palette: default_palette(),
        }
    }
}

impl ChartConfig {
    /// Builds a fully derived configuration from raw inputs.
    ///
    /// Bounds default to the tight bounding box of every supplied point
    /// across all series. When an axis ends up with a usable range, a default
    /// tick set is synthesized across it: five evenly spaced y ticks and six
    /// evenly spaced x ticks, the latter rotated by `spec.x_tick_rotation`.
    pub fn from_spec(spec: ChartSpec) -> Self {
        let mut config = ChartConfig {
            width: spec.width,
            height: spec.height,
            x_gridlines: spec.x_gridlines,
            y_gridlines: spec.y_gridlines,
            title: spec.title,
            series: spec.series,
            ..ChartConfig::default()
        };
        config.left.label = spec.y_label;
        config.bottom.label = spec.x_label;
        if !spec.palette.is_empty() {
            config.palette = spec.palette;
        }

        let (x_bounds, y_bounds) = data_bounds(&config.series);
        if let Some((min, max)) = spec.x_bounds.or(x_bounds) {
            config.x_min = min;
            config.x_max = max;
        }
        if let Some((min, max)) = spec.y_bounds.or(y_bounds) {
            config.y_min = min;
            config.y_max = max;
        }

        if config.y_max > config.y_min {
            config.left.post_tick_label_padding = 5.0;
            config.left.ticks = linspace(config.y_min, config.y_max, 5)
                .into_iter()
                .map(|v| Tick::new((spec.format_y)(v), v))
                .collect();
        }
        if config.x_max > config.x_min {
            config.bottom.post_label_padding = 10.0;
            config.bottom.post_tick_label_padding = 5.0;
            config.bottom.ticks = linspace(config.x_min, config.x_max, 6)
                .into_iter()
                .map(|v| Tick::new((spec.format_x)(v), v).with_rotation(spec.x_tick_rotation))
                .collect();
        }
        config
    }
}

/// Tight bounding box of all points across all series, per axis. `None` when
/// there are no points at all.
fn data_bounds(series: &[Vec<(f64, f64)>]) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;
    for points in series {
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            any = true;
        }
    }
    if any {
        (Some((x_min, x_max)), Some((y_min, y_max)))
    } else {
        (None, None)
    }
}
