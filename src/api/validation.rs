use crate::error::{ChartError, ChartResult};

use super::{AxisStyle, LegendStyle, PlaceholderStyle, SeriesStyle, TrendChartStyle};

pub(super) fn validate_style(style: &TrendChartStyle) -> ChartResult<()> {
    style.background.validate()?;
    validate_series_style(style.series)?;
    validate_axis_style(style.axis)?;
    validate_legend_style(&style.legend)?;
    validate_placeholder_style(&style.placeholder)
}

fn validate_series_style(style: SeriesStyle) -> ChartResult<()> {
    style.historical_color.validate()?;
    style.projected_color.validate()?;
    style.dash_pattern.validate()?;
    validate_positive("series marker radius", style.marker_radius)?;
    validate_positive("series line width", style.line_width)
}

fn validate_axis_style(style: AxisStyle) -> ChartResult<()> {
    style.axis_line_color.validate()?;
    style.grid_line_color.validate()?;
    style.label_color.validate()?;
    validate_positive("axis line width", style.line_width)?;
    validate_positive("axis label font size", style.label_font_size_px)?;
    if style.value_tick_intervals == 0 {
        return Err(ChartError::InvalidData(
            "value axis must have at least one tick interval".to_owned(),
        ));
    }
    if style.max_period_labels == 0 {
        return Err(ChartError::InvalidData(
            "period axis must allow at least one label".to_owned(),
        ));
    }
    for (name, value) in [
        ("value label gap", style.value_label_gap_px),
        ("value label baseline shift", style.value_label_baseline_shift_px),
        ("period label offset", style.period_label_offset_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("{name} must be finite")));
        }
    }
    Ok(())
}

fn validate_legend_style(style: &LegendStyle) -> ChartResult<()> {
    style.text_color.validate()?;
    validate_positive("legend font size", style.font_size_px)?;
    validate_positive("legend marker radius", style.marker_radius)?;
    validate_label("legend historical label", &style.historical_label)?;
    validate_label("legend projected label", &style.projected_label)
}

fn validate_placeholder_style(style: &PlaceholderStyle) -> ChartResult<()> {
    style.spinner_color.validate()?;
    style.empty_text_color.validate()?;
    style.empty_icon_color.validate()?;
    validate_positive("spinner dot radius", style.spinner_dot_radius)?;
    validate_positive("placeholder font size", style.font_size_px)?;
    if !style.spinner_dot_offset_px.is_finite() || style.spinner_dot_offset_px < 0.0 {
        return Err(ChartError::InvalidData(
            "spinner dot offset must be finite and >= 0".to_owned(),
        ));
    }
    validate_label("empty placeholder text", &style.empty_text)
}

fn validate_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_label(name: &str, value: &str) -> ChartResult<()> {
    if value.is_empty() {
        return Err(ChartError::InvalidData(format!("{name} must not be empty")));
    }
    Ok(())
}
