use tracing::{debug, trace, warn};

use crate::core::{PlotLayout, TrendInput, TrendScales, ValueDomain, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::TrendChartStyle;
use super::axis_grid::{AxisGridContext, append_axis_and_grid};
use super::legend::append_legend;
use super::placeholder::{append_empty_placeholder, append_loading_placeholder};
use super::series::{append_series, project_series};
use super::validation::validate_style;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_TITLE: &str = "Risk trend analysis";

/// What the chart shows for the current props.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Loading,
    Empty,
    Ready(TrendInput),
}

impl RenderState {
    /// Loading wins over data; absent data while idle is the empty state.
    #[must_use]
    pub fn resolve(loading: bool, data: Option<TrendInput>) -> Self {
        match (loading, data) {
            (true, _) => Self::Loading,
            (false, None) => Self::Empty,
            (false, Some(input)) => Self::Ready(input),
        }
    }

    #[must_use]
    pub fn input(&self) -> Option<&TrendInput> {
        match self {
            Self::Ready(input) => Some(input),
            Self::Loading | Self::Empty => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Ready(_) => "ready",
        }
    }
}

/// Inputs supplied by the host on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChartProps {
    pub data: Option<TrendInput>,
    pub loading: bool,
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
}

impl Default for TrendChartProps {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: None,
        }
    }
}

impl TrendChartProps {
    #[must_use]
    pub fn new(data: Option<TrendInput>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Builds the complete scene for `state`.
///
/// Every call starts from a cleared frame; domain, layout and scales are
/// recomputed from the snapshot, so nothing carries over between draws.
pub fn build_frame(
    state: &RenderState,
    viewport: Viewport,
    style: &TrendChartStyle,
) -> ChartResult<RenderFrame> {
    validate_style(style)?;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut frame = RenderFrame::new(viewport, style.background);
    match state {
        RenderState::Loading => {
            append_loading_placeholder(&mut frame, viewport, &style.placeholder);
        }
        RenderState::Empty => {
            append_empty_placeholder(&mut frame, viewport, &style.placeholder);
        }
        RenderState::Ready(input) => append_trend(&mut frame, input, viewport, style)?,
    }
    Ok(frame)
}

/// Builds and submits one frame to `surface`.
///
/// A missing surface is not an error: there is nothing to draw on, so the
/// pass is skipped.
pub fn render<R: Renderer>(
    surface: Option<&mut R>,
    state: &RenderState,
    viewport: Viewport,
    style: &TrendChartStyle,
) -> ChartResult<()> {
    let Some(surface) = surface else {
        trace!(state = state.name(), "no drawing surface, skipping render");
        return Ok(());
    };
    let frame = build_frame(state, viewport, style)?;
    surface.render(&frame)
}

fn append_trend(
    frame: &mut RenderFrame,
    input: &TrendInput,
    viewport: Viewport,
    style: &TrendChartStyle,
) -> ChartResult<()> {
    input.validate()?;

    let mismatch = input.label_mismatch();
    if mismatch != 0 {
        warn!(
            labels = input.time_periods.len(),
            points = input.point_count(),
            mismatch,
            "period labels do not match point count; extra labels are clipped"
        );
    }

    let layout = PlotLayout::from_viewport(viewport);
    let domain = ValueDomain::from_input(input);
    let scales = TrendScales::new(layout, domain, input.point_count());

    append_axis_and_grid(
        frame,
        AxisGridContext {
            viewport,
            layout,
            domain,
            scales,
            point_count: input.point_count(),
        },
        &input.time_periods,
        style.axis,
    );
    let geometry = project_series(input, scales);
    append_series(frame, &geometry, style.series);
    append_legend(frame, layout, style.series, &style.legend);

    trace!(
        historical = input.historical.len(),
        projected = input.projected.len(),
        domain_min = domain.min,
        domain_max = domain.max,
        "trend scene built"
    );
    Ok(())
}

/// Stateful facade a host keeps per chart widget.
///
/// The host calls [`TrendChart::update`] whenever its props change and
/// [`TrendChart::draw`] from its paint callback. Each draw is a full redraw of
/// the latest snapshot.
#[derive(Debug, Clone)]
pub struct TrendChart {
    state: RenderState,
    viewport: Viewport,
    title: String,
    style: TrendChartStyle,
}

impl TrendChart {
    pub fn new(props: TrendChartProps) -> ChartResult<Self> {
        let mut chart = Self {
            state: RenderState::Empty,
            viewport: Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            title: DEFAULT_TITLE.to_owned(),
            style: TrendChartStyle::default(),
        };
        chart.update(props)?;
        Ok(chart)
    }

    pub fn with_style(mut self, style: TrendChartStyle) -> ChartResult<Self> {
        self.set_style(style)?;
        Ok(self)
    }

    pub fn update(&mut self, props: TrendChartProps) -> ChartResult<()> {
        let viewport = props.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let next = RenderState::resolve(props.loading, props.data);
        debug!(
            from = self.state.name(),
            to = next.name(),
            width = viewport.width,
            height = viewport.height,
            "trend chart props updated"
        );
        self.state = next;
        self.viewport = viewport;
        self.title = props.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn style(&self) -> &TrendChartStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TrendChartStyle) -> ChartResult<()> {
        validate_style(&style)?;
        self.style = style;
        Ok(())
    }

    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        Ok(build_frame(&self.state, self.viewport, &self.style)?.with_title(self.title.as_str()))
    }

    pub fn draw<R: Renderer>(&self, surface: Option<&mut R>) -> ChartResult<()> {
        let Some(surface) = surface else {
            trace!(state = self.state.name(), "no drawing surface, skipping draw");
            return Ok(());
        };
        surface.render(&self.build_frame()?)
    }

    /// Draws onto an external cairo context, e.g. inside a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context<R: CairoContextRenderer>(
        &self,
        renderer: &mut R,
        context: &cairo::Context,
    ) -> ChartResult<()> {
        renderer.render_on_cairo_context(context, &self.build_frame()?)
    }
}
