//! column-chart: a headless column chart engine.
//!
//! Charts resolve their configuration, lay out columns, thresholds, error
//! bars and reference markers, and hand backend-agnostic frames to a
//! [`render::Renderer`]. Data updates animate on a host-driven clock.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartStyle, ColumnChart, RawChartConfig};
pub use error::{ChartError, ChartResult};
