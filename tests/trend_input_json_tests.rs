use risk_trend_chart::ChartError;
use risk_trend_chart::core::TrendInput;

#[test]
fn bare_trend_record_parses() {
    let raw = r#"{
        "historical": [0.31, 0.35, 0.42],
        "projected": [0.47, 0.5],
        "time_periods": ["2019", "2020", "2021", "2022", "2023"]
    }"#;
    let input = TrendInput::from_json(raw).expect("parse trend record");

    assert_eq!(input.historical, vec![0.31, 0.35, 0.42]);
    assert_eq!(input.projected, vec![0.47, 0.5]);
    assert_eq!(input.point_count(), 5);
    assert_eq!(input.label_mismatch(), 0);
    assert_eq!(
        input.values().collect::<Vec<_>>(),
        vec![0.31, 0.35, 0.42, 0.47, 0.5]
    );
}

#[test]
fn assessment_response_yields_embedded_trend_data() {
    let raw = r#"{
        "id": 12,
        "risk_level": {"level": "medium", "score": 0.52, "description": "moderate exposure"},
        "risk_score": 0.52,
        "factor_analysis": {},
        "trend_analysis": {
            "trend_data": {
                "historical": [1, 2],
                "projected": [3],
                "time_periods": ["Q1", "Q2", "Q3"]
            }
        }
    }"#;
    let input = TrendInput::from_assessment_json(raw)
        .expect("parse response")
        .expect("trend data present");

    assert_eq!(input, TrendInput::new(vec![1.0, 2.0], vec![3.0], ["Q1", "Q2", "Q3"]));
}

#[test]
fn assessment_without_trend_analysis_is_empty() {
    let raw = r#"{"risk_score": 0.2, "factor_analysis": {}}"#;
    assert_eq!(TrendInput::from_assessment_json(raw).expect("parse"), None);

    let raw = r#"{"risk_score": 0.2, "trend_analysis": null}"#;
    assert_eq!(TrendInput::from_assessment_json(raw).expect("parse"), None);
}

#[test]
fn malformed_json_is_reported() {
    let result = TrendInput::from_json(r#"{"historical": "high"}"#);
    assert!(matches!(result, Err(ChartError::InvalidInput(_))));
}

#[test]
fn label_mismatch_is_signed() {
    let extra = TrendInput::new(vec![1.0], vec![2.0], ["a", "b", "c"]);
    assert_eq!(extra.label_mismatch(), 1);

    let missing = TrendInput::new(vec![1.0, 2.0], vec![3.0], ["a"]);
    assert_eq!(missing.label_mismatch(), -2);
}

#[test]
fn serialization_uses_backend_field_names() {
    let input = TrendInput::new(vec![1.0], vec![2.0], ["a", "b"]);
    let value = serde_json::to_value(&input).expect("serialize");

    assert!(value.get("historical").is_some());
    assert!(value.get("projected").is_some());
    assert!(value.get("time_periods").is_some());
}
