use proptest::prelude::*;
use risk_trend_chart::api::{ACCENT_RED, PRIMARY_BLUE, TrendChart, TrendChartProps};
use risk_trend_chart::core::{TrendInput, ValueDomain};
use risk_trend_chart::render::{LineStrokeStyle, NullRenderer, TextHAlign};

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("t{index}")).collect()
}

proptest! {
    #[test]
    fn projected_path_always_starts_at_last_historical_point(
        historical in proptest::collection::vec(-1_000.0f64..1_000.0, 1..48),
        projected in proptest::collection::vec(-1_000.0f64..1_000.0, 1..24),
        width in 120u32..1_600,
        height in 90u32..900,
    ) {
        let count = historical.len() + projected.len();
        let input = TrendInput::new(historical, projected.clone(), labels(count));
        let props = TrendChartProps::new(Some(input)).with_size(width, height);
        let frame = TrendChart::new(props)
            .expect("chart init")
            .build_frame()
            .expect("build frame");

        // The series projection precedes the legend sample in draw order.
        let dashed = frame
            .paths()
            .find(|path| {
                path.color == ACCENT_RED && matches!(path.stroke_style, LineStrokeStyle::Dashed(_))
            })
            .expect("projected path");
        prop_assert_eq!(dashed.points.len(), projected.len() + 1);

        let last_historical = frame
            .circles()
            .filter(|circle| circle.fill_color == PRIMARY_BLUE && circle.radius == 4.0)
            .last()
            .expect("historical marker")
            .center;
        prop_assert_eq!(dashed.points[0], last_historical);
    }

    #[test]
    fn frames_are_valid_and_labels_bounded(
        historical in proptest::collection::vec(-50.0f64..50.0, 0..120),
        projected in proptest::collection::vec(-50.0f64..50.0, 0..40),
        extra_labels in 0usize..5,
    ) {
        let count = historical.len() + projected.len();
        let input = TrendInput::new(historical, projected, labels(count + extra_labels));
        let chart = TrendChart::new(TrendChartProps::new(Some(input))).expect("chart init");
        let mut renderer = NullRenderer::default();
        chart.draw(Some(&mut renderer)).expect("frame validates");

        let frame = renderer.last_frame.expect("recorded frame");
        let period_labels = frame
            .texts()
            .filter(|text| text.h_align == TextHAlign::Center)
            .count();
        prop_assert!(period_labels <= 10);
        prop_assert!(period_labels <= count);
    }

    #[test]
    fn domain_always_contains_values_and_zero(
        values in proptest::collection::vec(-1e6f64..1e6, 0..64),
    ) {
        let domain = ValueDomain::from_values(values.iter().copied());
        prop_assert!(domain.min <= 0.0);
        prop_assert!(domain.max >= 0.0);
        for value in values {
            prop_assert!(value >= domain.min);
            prop_assert!(value <= domain.max);
        }
    }
}
