use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{TrendChart, TrendChartProps};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

/// GTK `DrawingArea` that paints a [`TrendChart`] in its draw callback.
///
/// The chart is laid out at its own viewport size and stretched to the
/// widget allocation, so it fills the available width like a scaled canvas.
pub struct GtkTrendChartArea {
    area: gtk::DrawingArea,
    chart: Rc<RefCell<TrendChart>>,
}

impl GtkTrendChartArea {
    #[must_use]
    pub fn new(chart: TrendChart) -> Self {
        let viewport = chart.viewport();
        let renderer = CairoRenderer::for_context();

        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let chart = Rc::new(RefCell::new(chart));
        let renderer = RefCell::new(renderer);
        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_area, context, width, height| {
            let chart = draw_chart.borrow();
            let viewport = chart.viewport();
            if width <= 0 || height <= 0 {
                return;
            }
            context.scale(
                f64::from(width) / f64::from(viewport.width),
                f64::from(height) / f64::from(viewport.height),
            );
            if let Err(err) = chart.draw_on_cairo_context(&mut *renderer.borrow_mut(), context) {
                warn!(error = %err, "trend chart draw failed");
            }
        });

        Self { area, chart }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Applies new props and schedules a full redraw.
    pub fn set_props(&self, props: TrendChartProps) -> ChartResult<()> {
        self.chart.borrow_mut().update(props)?;
        let height = self.chart.borrow().viewport().height;
        self.area
            .set_content_height(i32::try_from(height).unwrap_or(i32::MAX));
        self.area.queue_draw();
        Ok(())
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.chart.borrow().title().to_owned()
    }
}
