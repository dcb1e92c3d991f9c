use crate::core::{PixelPoint, PlotLayout};
use crate::render::{
    CirclePrimitive, Color, LineStrokeStyle, PathPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{LegendStyle, SeriesStyle};

const SAMPLE_Y_OFFSET: f64 = 15.0;
const TEXT_BASELINE_OFFSET: f64 = 20.0;
const SAMPLE_LENGTH: f64 = 30.0;
const TEXT_GAP: f64 = 5.0;
const HISTORICAL_ENTRY_X: f64 = 10.0;
const PROJECTED_ENTRY_X: f64 = 130.0;

/// Draws the historical and projected legend entries at the plot's top-left.
pub fn append_legend(
    frame: &mut RenderFrame,
    layout: PlotLayout,
    series: SeriesStyle,
    style: &LegendStyle,
) {
    append_entry(
        frame,
        layout,
        HISTORICAL_ENTRY_X,
        LegendEntry {
            label: &style.historical_label,
            color: series.historical_color,
            stroke_style: LineStrokeStyle::Solid,
        },
        series.line_width,
        style,
    );
    append_entry(
        frame,
        layout,
        PROJECTED_ENTRY_X,
        LegendEntry {
            label: &style.projected_label,
            color: series.projected_color,
            stroke_style: LineStrokeStyle::Dashed(series.dash_pattern),
        },
        series.line_width,
        style,
    );
}

struct LegendEntry<'a> {
    label: &'a str,
    color: Color,
    stroke_style: LineStrokeStyle,
}

fn append_entry(
    frame: &mut RenderFrame,
    layout: PlotLayout,
    entry_x: f64,
    entry: LegendEntry<'_>,
    line_width: f64,
    style: &LegendStyle,
) {
    let left = layout.margin_left + entry_x;
    let sample_y = layout.margin_top + SAMPLE_Y_OFFSET;

    frame.push_path(
        PathPrimitive::segment(
            PixelPoint::new(left, sample_y),
            PixelPoint::new(left + SAMPLE_LENGTH, sample_y),
            line_width,
            entry.color,
        )
        .with_stroke_style(entry.stroke_style),
    );
    frame.push_circle(CirclePrimitive::new(
        PixelPoint::new(left + SAMPLE_LENGTH / 2.0, sample_y),
        style.marker_radius,
        entry.color,
    ));
    frame.push_text(TextPrimitive::new(
        entry.label,
        left + SAMPLE_LENGTH + TEXT_GAP,
        layout.margin_top + TEXT_BASELINE_OFFSET,
        style.font_size_px,
        style.text_color,
        TextHAlign::Left,
    ));
}
