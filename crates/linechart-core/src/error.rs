// File: crates/linechart-core/src/error.rs
// Summary: Error taxonomy for chart construction and rendering.

use crate::scale::AxisKind;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// An axis' data range has zero or non-finite span, so the coordinate
    /// transform would divide by zero. Detected before any drawing happens.
    #[error("degenerate {axis} range [{min}, {max}]: max must exceed min")]
    DegenerateRange { axis: AxisKind, min: f64, max: f64 },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode canvas as PNG")]
    Encode,

    #[error("failed to write chart output")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
