use tracing::trace;

use crate::core::{
    PixelPoint, PlotLayout, TrendScales, ValueDomain, Viewport, format_axis_value,
    thinned_label_indices,
};
use crate::render::{PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::AxisStyle;

/// Geometry shared by the axis, gridline and label passes.
#[derive(Debug, Clone, Copy)]
pub struct AxisGridContext {
    pub viewport: Viewport,
    pub layout: PlotLayout,
    pub domain: ValueDomain,
    pub scales: TrendScales,
    /// Number of plotted points; labels past this index have no x position.
    pub point_count: usize,
}

/// Draws axis lines, value gridlines with labels and thinned period labels.
pub fn append_axis_and_grid(
    frame: &mut RenderFrame,
    ctx: AxisGridContext,
    time_periods: &[String],
    style: AxisStyle,
) {
    append_axis_lines(frame, ctx, style);
    append_value_grid(frame, ctx, style);
    append_period_labels(frame, ctx, time_periods, style);
}

fn append_axis_lines(frame: &mut RenderFrame, ctx: AxisGridContext, style: AxisStyle) {
    let layout = ctx.layout;
    let bottom = layout.plot_bottom();
    let right = f64::from(ctx.viewport.width) - layout.margin_right;

    frame.push_path(PathPrimitive::segment(
        PixelPoint::new(layout.plot_left(), bottom),
        PixelPoint::new(right, bottom),
        style.line_width,
        style.axis_line_color,
    ));
    frame.push_path(PathPrimitive::segment(
        PixelPoint::new(layout.plot_left(), layout.plot_top()),
        PixelPoint::new(layout.plot_left(), bottom),
        style.line_width,
        style.axis_line_color,
    ));
}

fn append_value_grid(frame: &mut RenderFrame, ctx: AxisGridContext, style: AxisStyle) {
    let layout = ctx.layout;
    let intervals = style.value_tick_intervals;

    for index in 0..=intervals {
        let fraction = index as f64 / intervals as f64;
        let y = layout.plot_bottom() - fraction * layout.plot_height;
        let value = ctx.domain.tick_value(index, intervals);

        frame.push_path(PathPrimitive::segment(
            PixelPoint::new(layout.plot_left(), y),
            PixelPoint::new(layout.plot_right(), y),
            style.line_width,
            style.grid_line_color,
        ));
        frame.push_text(TextPrimitive::new(
            format_axis_value(value),
            layout.margin_left - style.value_label_gap_px,
            y + style.value_label_baseline_shift_px,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Right,
        ));
    }
}

fn append_period_labels(
    frame: &mut RenderFrame,
    ctx: AxisGridContext,
    time_periods: &[String],
    style: AxisStyle,
) {
    let y = ctx.layout.plot_bottom() + style.period_label_offset_px;
    let mut drawn = 0usize;

    for index in thinned_label_indices(time_periods.len(), style.max_period_labels) {
        if index >= ctx.point_count {
            break;
        }
        let label = &time_periods[index];
        if label.is_empty() {
            continue;
        }
        frame.push_text(TextPrimitive::new(
            label.as_str(),
            ctx.scales.x.x_for(index),
            y,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
        drawn += 1;
    }

    trace!(labels = time_periods.len(), drawn, "period labels placed");
}
