//! risk-trend-chart: immediate-mode renderer for risk trend charts.
//!
//! A chart shows a solid historical series joined to a dashed projected
//! series, with a zero-based value axis, thinned period labels and a legend.
//! Scene construction is backend-agnostic; drawing goes through the
//! [`render::Renderer`] trait so hosts can plug in Cairo, a GTK widget or a
//! headless recorder.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RenderState, TrendChart, TrendChartProps, TrendChartStyle};
pub use core::TrendInput;
pub use error::{ChartError, ChartResult};
