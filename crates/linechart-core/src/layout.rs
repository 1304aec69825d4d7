// File: crates/linechart-core/src/layout.rs
// Summary: Border and title thickness from measured text extents.

use crate::config::{Border, ChartConfig};
use crate::geometry::PlotRect;
use crate::text::TextMeasurer;

/// Which way a border's tick-label footprint projects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Left/right borders: footprint measured as horizontal extent.
    Vertical,
    /// Top/bottom borders: footprint measured as vertical extent.
    Horizontal,
}

/// Extent of a `width` x `height` label rotated by `rotation` radians,
/// projected perpendicular to the given border orientation.
///
/// These are the two orthogonal projections of the rotated rectangle. Only
/// valid for rotations in [0, pi/2]; outside that window sin/cos change sign
/// and the estimate is wrong, so callers must constrain tick rotation.
pub fn rotated_footprint(width: f64, height: f64, rotation: f64, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Vertical => height * rotation.sin() + width * rotation.cos(),
        Orientation::Horizontal => width * rotation.sin() + height * rotation.cos(),
    }
}

/// Pixel thickness one border consumes: the widest rotated tick label, plus
/// the axis name's height when present, plus the fixed paddings and tick
/// mark length. With no ticks and no label this reduces to the paddings and
/// tick length alone.
pub fn border_thickness(measurer: &TextMeasurer, border: &Border, orientation: Orientation) -> f64 {
    let mut max_tick = 0.0f64;
    for tick in &border.ticks {
        let (w, h) = measurer.measure(&tick.style, &tick.label);
        max_tick = max_tick.max(rotated_footprint(w, h, tick.rotation, orientation));
    }

    let mut thickness = max_tick;
    if !border.label.is_empty() {
        let (_, h) = measurer.measure(&border.label_style, &border.label);
        thickness += h;
    }

    thickness
        + border.pre_label_padding
        + border.post_label_padding
        + border.post_tick_label_padding
        + border.tick_size
}

/// Vertical footprint of the title: measured height plus both paddings, or
/// zero when there is no title. Titles are always horizontal.
pub fn title_thickness(measurer: &TextMeasurer, config: &ChartConfig) -> f64 {
    if config.title.is_empty() {
        return 0.0;
    }
    let (_, h) = measurer.measure(&config.title_style, &config.title);
    h + config.pre_title_padding + config.post_title_padding
}

/// The four computed border thicknesses, title folded into the top.
#[derive(Clone, Copy, Debug, Default)]
pub struct Frame {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

pub fn compute_frame(measurer: &TextMeasurer, config: &ChartConfig) -> Frame {
    Frame {
        left: border_thickness(measurer, &config.left, Orientation::Vertical),
        right: border_thickness(measurer, &config.right, Orientation::Vertical),
        top: border_thickness(measurer, &config.top, Orientation::Horizontal)
            + title_thickness(measurer, config),
        bottom: border_thickness(measurer, &config.bottom, Orientation::Horizontal),
    }
}

/// Canvas rectangle minus the four border thicknesses.
pub fn plot_area(config: &ChartConfig, frame: &Frame) -> PlotRect {
    PlotRect::from_ltrb(
        frame.left,
        frame.top,
        config.width as f64 - frame.right,
        config.height as f64 - frame.bottom,
    )
}
