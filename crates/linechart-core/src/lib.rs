// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod config;
pub mod axis;
pub mod grid;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod layout;
pub mod text;

pub use chart::LineChart;
pub use config::{Border, ChartConfig, ChartSpec, Tick, TickFormatter};
pub use error::ChartError;
pub use geometry::PlotRect;
pub use layout::{Frame, Orientation};
pub use scale::{AxisKind, LinearScale};
pub use text::{TextMeasurer, TextStyle};
