use approx::assert_relative_eq;
use risk_trend_chart::api::{AxisStyle, TrendChart, TrendChartProps};
use risk_trend_chart::core::{TrendInput, thinned_label_indices};
use risk_trend_chart::render::{RenderFrame, TextHAlign, TextPrimitive};

fn periods(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("P{index}")).collect()
}

fn build_frame(input: TrendInput) -> RenderFrame {
    let props = TrendChartProps::new(Some(input)).with_size(800, 300);
    TrendChart::new(props)
        .expect("chart init")
        .build_frame()
        .expect("build frame")
}

fn period_labels(frame: &RenderFrame) -> Vec<&TextPrimitive> {
    frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Center)
        .collect()
}

#[test]
fn thinning_keeps_every_third_of_twenty_three_labels() {
    let kept: Vec<usize> = thinned_label_indices(23, 10).collect();
    assert_eq!(kept, vec![0, 3, 6, 9, 12, 15, 18, 21]);

    let input = TrendInput::new(vec![1.0; 20], vec![2.0; 3], periods(23));
    let frame = build_frame(input);
    let labels: Vec<&str> = period_labels(&frame)
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["P0", "P3", "P6", "P9", "P12", "P15", "P18", "P21"]);
}

#[test]
fn short_label_sets_are_all_shown() {
    let input = TrendInput::new(vec![5.0, 10.0, 15.0], vec![20.0, 25.0], periods(5));
    let frame = build_frame(input);
    assert_eq!(period_labels(&frame).len(), 5);
}

#[test]
fn visible_label_count_is_bounded() {
    for count in [1usize, 9, 10, 11, 57, 240] {
        let input = TrendInput::new(vec![3.0; count], Vec::new(), periods(count));
        let frame = build_frame(input);
        let shown = period_labels(&frame).len();
        assert!(shown >= 1);
        assert!(shown <= 10, "{count} labels produced {shown} visible labels");
    }
}

#[test]
fn period_labels_sit_under_their_points() {
    let input = TrendInput::new(vec![5.0, 10.0, 15.0], vec![20.0, 25.0], periods(5));
    let frame = build_frame(input);

    for (index, label) in period_labels(&frame).into_iter().enumerate() {
        assert_eq!(label.text, format!("P{index}"));
        assert_relative_eq!(label.x, 40.0 + index as f64 * 182.5, epsilon = 1e-9);
        assert_eq!(label.y, 285.0);
    }
}

#[test]
fn labels_without_points_are_clipped() {
    let input = TrendInput::new(vec![1.0, 2.0], vec![3.0], periods(6));
    let frame = build_frame(input);
    let labels: Vec<&str> = period_labels(&frame)
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["P0", "P1", "P2"]);
}

#[test]
fn missing_labels_leave_points_unlabelled() {
    let input = TrendInput::new(vec![1.0, 2.0, 3.0], vec![4.0], periods(2));
    let frame = build_frame(input);
    assert_eq!(period_labels(&frame).len(), 2);
    assert_eq!(frame.circles().filter(|circle| circle.radius == 4.0).count(), 4);
}

#[test]
fn empty_label_strings_are_skipped() {
    let input = TrendInput::new(vec![1.0, 2.0, 3.0], Vec::new(), ["2021", "", "2023"]);
    let frame = build_frame(input);
    assert_eq!(period_labels(&frame).len(), 2);
}

#[test]
fn value_axis_has_six_labelled_gridlines() {
    let input = TrendInput::new(vec![10.0, 20.0], vec![30.0], periods(3));
    let frame = build_frame(input);
    let style = AxisStyle::default();

    let value_labels: Vec<&TextPrimitive> = frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Right)
        .collect();
    let texts: Vec<&str> = value_labels.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["0.00", "6.60", "13.20", "19.80", "26.40", "33.00"]);
    assert!(value_labels.iter().all(|text| text.x == 35.0));

    let gridlines: Vec<_> = frame
        .paths()
        .filter(|path| path.color == style.grid_line_color)
        .collect();
    assert_eq!(gridlines.len(), 6);
    for (gridline, label) in gridlines.iter().zip(&value_labels) {
        let start = gridline.first_point().expect("gridline start");
        let end = gridline.last_point().expect("gridline end");
        assert_eq!(start.x, 40.0);
        assert_eq!(end.x, 770.0);
        assert_eq!(start.y, end.y);
        assert_relative_eq!(label.y, start.y + 4.0, epsilon = 1e-9);
    }
    assert_eq!(gridlines[0].first_point().expect("bottom").y, 270.0);
    assert_eq!(gridlines[5].first_point().expect("top").y, 20.0);
}

#[test]
fn axis_lines_frame_the_plot() {
    let input = TrendInput::new(vec![1.0], Vec::new(), periods(1));
    let frame = build_frame(input);
    let style = AxisStyle::default();

    let axes: Vec<_> = frame
        .paths()
        .filter(|path| path.color == style.axis_line_color)
        .collect();
    assert_eq!(axes.len(), 2);

    let x_axis = axes[0];
    assert_eq!(x_axis.points[0].x, 40.0);
    assert_eq!(x_axis.points[1].x, 770.0);
    assert_eq!(x_axis.points[0].y, 270.0);

    let y_axis = axes[1];
    assert_eq!(y_axis.points[0].y, 20.0);
    assert_eq!(y_axis.points[1].y, 270.0);
    assert_eq!(y_axis.points[0].x, 40.0);
}

#[test]
fn empty_label_set_draws_no_period_labels() {
    let input = TrendInput::new(vec![1.0, 2.0], Vec::new(), Vec::<String>::new());
    let frame = build_frame(input);
    assert!(period_labels(&frame).is_empty());
}
