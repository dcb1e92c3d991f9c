use tracing::warn;

use crate::core::{PixelPoint, TrendInput, TrendScales};
use crate::render::{CirclePrimitive, LineStrokeStyle, PathPrimitive, RenderFrame};

use super::SeriesStyle;

/// Pixel geometry of both series for one draw pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesGeometry {
    /// One point per historical value.
    pub historical: Vec<PixelPoint>,
    /// Anchor (last historical point) followed by one point per projected
    /// value; empty when there is nothing to project from.
    pub projected_path: Vec<PixelPoint>,
}

impl SeriesGeometry {
    /// Projected points excluding the shared anchor.
    #[must_use]
    pub fn projected_markers(&self) -> &[PixelPoint] {
        self.projected_path.get(1..).unwrap_or(&[])
    }
}

/// Maps both series onto the shared scales.
///
/// The projected path starts at the exact pixel of the last historical
/// point so the two strokes meet without a gap.
#[must_use]
pub fn project_series(input: &TrendInput, scales: TrendScales) -> SeriesGeometry {
    let historical: Vec<PixelPoint> = input
        .historical
        .iter()
        .enumerate()
        .map(|(index, value)| scales.point(index, *value))
        .collect();

    let projected_path = match historical.last() {
        Some(anchor) if !input.projected.is_empty() => {
            let offset = historical.len();
            let mut path = Vec::with_capacity(input.projected.len() + 1);
            path.push(*anchor);
            path.extend(
                input
                    .projected
                    .iter()
                    .enumerate()
                    .map(|(index, value)| scales.point(offset + index, *value)),
            );
            path
        }
        None if !input.projected.is_empty() => {
            warn!(
                projected = input.projected.len(),
                "skipping projected series without a historical anchor"
            );
            Vec::new()
        }
        _ => Vec::new(),
    };

    SeriesGeometry {
        historical,
        projected_path,
    }
}

/// Strokes the historical line, then the dashed projection, each followed by
/// its markers.
pub fn append_series(frame: &mut RenderFrame, geometry: &SeriesGeometry, style: SeriesStyle) {
    if geometry.historical.len() >= 2 {
        frame.push_path(PathPrimitive::new(
            geometry.historical.clone(),
            style.line_width,
            style.historical_color,
        ));
    }
    for point in &geometry.historical {
        frame.push_circle(CirclePrimitive::new(
            *point,
            style.marker_radius,
            style.historical_color,
        ));
    }

    if geometry.projected_path.len() < 2 {
        return;
    }
    frame.push_path(
        PathPrimitive::new(
            geometry.projected_path.clone(),
            style.line_width,
            style.projected_color,
        )
        .with_stroke_style(LineStrokeStyle::Dashed(style.dash_pattern)),
    );
    for point in geometry.projected_markers() {
        frame.push_circle(CirclePrimitive::new(
            *point,
            style.marker_radius,
            style.projected_color,
        ));
    }
}
