use crate::core::{PixelPoint, Viewport};
use crate::render::{CirclePrimitive, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::PlaceholderStyle;

/// Fading opacity of the four spinner dots, clockwise from the top-left.
const SPINNER_DOT_ALPHAS: [f64; 4] = [1.0, 0.75, 0.5, 0.3];
const TRAY_HALF_WIDTH: f64 = 32.0;
const TRAY_RIM_HALF_WIDTH: f64 = 20.0;
const TRAY_TOP: f64 = -36.0;
const TRAY_RIM: f64 = -20.0;
const TRAY_BOTTOM: f64 = 0.0;
const EMPTY_TEXT_BASELINE: f64 = 24.0;
const TRAY_STROKE_WIDTH: f64 = 1.5;

fn center(viewport: Viewport) -> PixelPoint {
    PixelPoint::new(
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
    )
}

/// Static loading indicator: four dots on a square around the surface center.
pub fn append_loading_placeholder(
    frame: &mut RenderFrame,
    viewport: Viewport,
    style: &PlaceholderStyle,
) {
    let center = center(viewport);
    let offset = style.spinner_dot_offset_px;
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    for ((dx, dy), alpha) in corners.into_iter().zip(SPINNER_DOT_ALPHAS) {
        frame.push_circle(CirclePrimitive::new(
            PixelPoint::new(center.x + dx * offset, center.y + dy * offset),
            style.spinner_dot_radius,
            style
                .spinner_color
                .with_alpha(style.spinner_color.alpha * alpha),
        ));
    }
}

/// Empty-state scene: an open tray outline above a short message.
pub fn append_empty_placeholder(
    frame: &mut RenderFrame,
    viewport: Viewport,
    style: &PlaceholderStyle,
) {
    let center = center(viewport);
    let at = |dx: f64, dy: f64| PixelPoint::new(center.x + dx, center.y + dy);

    frame.push_path(PathPrimitive::new(
        vec![
            at(-TRAY_RIM_HALF_WIDTH, TRAY_TOP),
            at(-TRAY_HALF_WIDTH, TRAY_RIM),
            at(-TRAY_HALF_WIDTH, TRAY_BOTTOM),
            at(TRAY_HALF_WIDTH, TRAY_BOTTOM),
            at(TRAY_HALF_WIDTH, TRAY_RIM),
            at(TRAY_RIM_HALF_WIDTH, TRAY_TOP),
            at(-TRAY_RIM_HALF_WIDTH, TRAY_TOP),
        ],
        TRAY_STROKE_WIDTH,
        style.empty_icon_color,
    ));
    frame.push_path(PathPrimitive::segment(
        at(-TRAY_HALF_WIDTH, TRAY_RIM),
        at(TRAY_HALF_WIDTH, TRAY_RIM),
        TRAY_STROKE_WIDTH,
        style.empty_icon_color,
    ));
    frame.push_text(TextPrimitive::new(
        style.empty_text.as_str(),
        center.x,
        center.y + EMPTY_TEXT_BASELINE,
        style.font_size_px,
        style.empty_text_color,
        TextHAlign::Center,
    ));
}
