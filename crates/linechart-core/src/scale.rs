// File: crates/linechart-core/src/scale.rs
// Summary: The single data-to-pixel linear transform shared by every renderer.

use std::fmt;

use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;

/// Which axis a scale serves. Carried into errors for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => write!(f, "x"),
            AxisKind::Y => write!(f, "y"),
        }
    }
}

/// Linear map from a data-space range onto a pixel-space range.
///
/// Gridlines, tick placement, and series plotting all share the same two
/// instances per render, so the three visual layers agree pixel-for-pixel.
/// Inverted scales flip the range: pixel y grows downward while data y
/// grows upward.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    data_min: f64,
    data_max: f64,
    px_min: f64,
    px_extent: f64,
    invert: bool,
}

impl LinearScale {
    /// Fails with `DegenerateRange` unless the data span is finite and
    /// strictly positive.
    pub fn new(
        axis: AxisKind,
        data_min: f64,
        data_max: f64,
        px_min: f64,
        px_extent: f64,
        invert: bool,
    ) -> Result<Self> {
        let span = data_max - data_min;
        if !span.is_finite() || span <= 0.0 {
            return Err(ChartError::DegenerateRange { axis, min: data_min, max: data_max });
        }
        Ok(Self { data_min, data_max, px_min, px_extent, invert })
    }

    /// X scale across the plot area, left to right.
    pub fn horizontal(data_min: f64, data_max: f64, plot: &PlotRect) -> Result<Self> {
        Self::new(AxisKind::X, data_min, data_max, plot.left, plot.width(), false)
    }

    /// Y scale across the plot area, inverted so larger values sit higher.
    pub fn vertical(data_min: f64, data_max: f64, plot: &PlotRect) -> Result<Self> {
        Self::new(AxisKind::Y, data_min, data_max, plot.top, plot.height(), true)
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        let t = (value - self.data_min) / (self.data_max - self.data_min);
        if self.invert {
            self.px_min + (1.0 - t) * self.px_extent
        } else {
            self.px_min + t * self.px_extent
        }
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let t = (px - self.px_min) / self.px_extent;
        let t = if self.invert { 1.0 - t } else { t };
        self.data_min + t * (self.data_max - self.data_min)
    }
}
