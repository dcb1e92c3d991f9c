use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use std::f64::consts::TAU;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, DrawCommand, LineStrokeStyle, PathPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

const FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context, for example a GTK
/// `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Draws either into its own offscreen ARGB32 surface (`Renderer::render`,
/// exportable as PNG) or onto a caller-supplied context
/// (`CairoContextRenderer`). Renderers built with [`CairoRenderer::for_context`]
/// own no surface and only support the latter.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: Option<ImageSurface>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface: Some(surface),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Renderer for external contexts only; allocates no offscreen surface.
    #[must_use]
    pub fn for_context() -> Self {
        Self {
            surface: None,
            last_stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG into `writer`.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.offscreen_surface()?
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn offscreen_surface(&self) -> ChartResult<&ImageSurface> {
        self.surface.as_ref().ok_or_else(|| {
            ChartError::Backend("renderer has no offscreen surface".to_owned())
        })
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, frame.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_line_cap(LineCap::Butt);
        context.set_line_join(LineJoin::Miter);

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Path(path) => {
                    stroke_path(context, path)?;
                    stats.paths_drawn += 1;
                }
                DrawCommand::Circle(circle) => {
                    fill_circle(context, *circle)?;
                    stats.circles_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    show_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        trace!(
            paths = stats.paths_drawn,
            circles = stats.circles_drawn,
            texts = stats.texts_drawn,
            "cairo frame drawn"
        );
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(self.offscreen_surface()?)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn stroke_path(context: &Context, path: &PathPrimitive) -> ChartResult<()> {
    let Some((first, rest)) = path.points.split_first() else {
        return Ok(());
    };

    match path.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed(pattern) => context.set_dash(&pattern.segments(), 0.0),
    }
    apply_color(context, path.color);
    context.set_line_width(path.stroke_width);
    context.new_path();
    context.move_to(first.x, first.y);
    for point in rest {
        context.line_to(point.x, point.y);
    }
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke path", err));
    context.set_dash(&[], 0.0);
    result
}

fn fill_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    apply_color(context, circle.fill_color);
    context.new_path();
    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill circle", err))
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string(FONT_FAMILY);
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    // Pango positions layouts by their top edge; primitives carry the baseline.
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    apply_color(context, text.color);
    context.new_path();
    context.move_to(x, text.y - baseline);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
