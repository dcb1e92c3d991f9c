#![cfg(feature = "cairo-backend")]

use risk_trend_chart::api::{TrendChart, TrendChartProps};
use risk_trend_chart::core::TrendInput;
use risk_trend_chart::render::{CairoRenderer, Renderer};
use risk_trend_chart::ChartError;

fn sample_chart() -> TrendChart {
    let input = TrendInput::new(
        vec![5.0, 10.0, 15.0],
        vec![20.0, 25.0],
        ["a", "b", "c", "d", "e"],
    );
    TrendChart::new(TrendChartProps::new(Some(input))).expect("chart init")
}

#[test]
fn cairo_renderer_replays_every_command() {
    let chart = sample_chart();
    let mut renderer = CairoRenderer::new(800, 300).expect("cairo renderer");
    chart.draw(Some(&mut renderer)).expect("cairo draw");

    let stats = renderer.last_stats();
    assert_eq!(stats.paths_drawn, 12);
    assert_eq!(stats.circles_drawn, 7);
    assert_eq!(stats.texts_drawn, 13);
}

#[test]
fn cairo_renderer_exports_png() {
    let chart = sample_chart();
    let mut renderer = CairoRenderer::new(800, 300).expect("cairo renderer");
    renderer
        .render(&chart.build_frame().expect("frame"))
        .expect("render");

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png export");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_rejects_empty_surface() {
    assert!(CairoRenderer::new(0, 300).is_err());
}

#[test]
fn offscreen_surface_matches_requested_size() {
    let renderer = CairoRenderer::new(640, 240).expect("cairo renderer");
    let surface = renderer.surface().expect("offscreen surface");
    assert_eq!(surface.width(), 640);
    assert_eq!(surface.height(), 240);
}

#[test]
fn context_renderer_draws_on_external_context_without_own_surface() {
    let chart = sample_chart();
    let mut renderer = CairoRenderer::for_context();
    assert!(renderer.surface().is_none());

    let target = cairo::ImageSurface::create(cairo::Format::ARgb32, 800, 300)
        .expect("target surface");
    let context = cairo::Context::new(&target).expect("target context");
    chart
        .draw_on_cairo_context(&mut renderer, &context)
        .expect("context draw");
    assert_eq!(renderer.last_stats().paths_drawn, 12);

    let mut png = Vec::new();
    assert!(matches!(
        renderer.write_png(&mut png),
        Err(ChartError::Backend(_))
    ));
    assert!(matches!(
        renderer.render(&chart.build_frame().expect("frame")),
        Err(ChartError::Backend(_))
    ));
}
