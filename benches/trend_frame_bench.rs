use criterion::{Criterion, criterion_group, criterion_main};
use risk_trend_chart::api::{RenderState, TrendChartStyle, build_frame};
use risk_trend_chart::core::{TrendInput, ValueDomain, Viewport};
use std::hint::black_box;

fn synthetic_input(historical: usize, projected: usize) -> TrendInput {
    let value = |i: usize| 0.4 + (i as f64 * 0.37).sin() * 0.2;
    TrendInput::new(
        (0..historical).map(value).collect(),
        (historical..historical + projected).map(value).collect(),
        (0..historical + projected).map(|i| format!("M{i}")),
    )
}

fn bench_value_domain_10k(c: &mut Criterion) {
    let input = synthetic_input(8_000, 2_000);

    c.bench_function("value_domain_10k", |b| {
        b.iter(|| black_box(ValueDomain::from_input(black_box(&input))))
    });
}

fn bench_ready_frame_10k(c: &mut Criterion) {
    let state = RenderState::Ready(synthetic_input(8_000, 2_000));
    let style = TrendChartStyle::default();
    let viewport = Viewport::new(1920, 600);

    c.bench_function("ready_frame_10k", |b| {
        b.iter(|| {
            let frame = build_frame(black_box(&state), viewport, &style).expect("frame");
            black_box(frame.commands.len())
        })
    });
}

criterion_group!(benches, bench_value_domain_10k, bench_ready_frame_10k);
criterion_main!(benches);
