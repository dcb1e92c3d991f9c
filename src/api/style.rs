use serde::{Deserialize, Serialize};

use crate::render::{Color, DashPattern};

pub const PRIMARY_BLUE: Color = Color::rgb8(0x18, 0x90, 0xff);
pub const ACCENT_RED: Color = Color::rgb8(0xff, 0x4d, 0x4f);

/// Colors and stroke geometry of the two data series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub historical_color: Color,
    pub projected_color: Color,
    pub marker_radius: f64,
    pub dash_pattern: DashPattern,
    pub line_width: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            historical_color: PRIMARY_BLUE,
            projected_color: ACCENT_RED,
            marker_radius: 4.0,
            dash_pattern: DashPattern::default(),
            line_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub axis_line_color: Color,
    pub grid_line_color: Color,
    pub label_color: Color,
    pub line_width: f64,
    pub label_font_size_px: f64,
    /// Number of equal intervals on the value axis; `intervals + 1` ticks.
    pub value_tick_intervals: usize,
    /// Upper bound on visible period labels before thinning kicks in.
    pub max_period_labels: usize,
    /// Gap between value labels and the plot's left edge.
    pub value_label_gap_px: f64,
    /// Baseline shift that visually centers value labels on their gridline.
    pub value_label_baseline_shift_px: f64,
    /// Baseline of period labels measured down from the plot bottom.
    pub period_label_offset_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            axis_line_color: Color::rgb8(0xcc, 0xcc, 0xcc),
            grid_line_color: Color::rgb8(0xee, 0xee, 0xee),
            label_color: Color::rgb8(0x66, 0x66, 0x66),
            line_width: 1.0,
            label_font_size_px: 12.0,
            value_tick_intervals: 5,
            max_period_labels: 10,
            value_label_gap_px: 5.0,
            value_label_baseline_shift_px: 4.0,
            period_label_offset_px: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    pub historical_label: String,
    pub projected_label: String,
    pub text_color: Color,
    pub font_size_px: f64,
    pub marker_radius: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            historical_label: "historical risk".to_owned(),
            projected_label: "projected risk".to_owned(),
            text_color: Color::rgb8(0x33, 0x33, 0x33),
            font_size_px: 14.0,
            marker_radius: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderStyle {
    pub spinner_color: Color,
    pub spinner_dot_radius: f64,
    /// Distance from the spinner center to each dot center along both axes.
    pub spinner_dot_offset_px: f64,
    pub empty_text: String,
    pub empty_text_color: Color,
    pub empty_icon_color: Color,
    pub font_size_px: f64,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            spinner_color: PRIMARY_BLUE,
            spinner_dot_radius: 4.0,
            spinner_dot_offset_px: 6.0,
            empty_text: "no trend data".to_owned(),
            empty_text_color: Color::rgba(0.0, 0.0, 0.0, 0.25),
            empty_icon_color: Color::rgb8(0xd9, 0xd9, 0xd9),
            font_size_px: 14.0,
        }
    }
}

/// Complete visual configuration of a trend chart.
///
/// Serializable so hosts can persist chart appearance next to their own
/// settings; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendChartStyle {
    pub background: Color,
    pub series: SeriesStyle,
    pub axis: AxisStyle,
    pub legend: LegendStyle,
    pub placeholder: PlaceholderStyle,
}

impl Default for TrendChartStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            series: SeriesStyle::default(),
            axis: AxisStyle::default(),
            legend: LegendStyle::default(),
            placeholder: PlaceholderStyle::default(),
        }
    }
}
