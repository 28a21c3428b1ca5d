use catrank::{
    format_report, rank_categories, rank_categories_default, CatrankConfig, CategoryScore,
    ClassifyError, ConfigLoadError, GroupingConfig, GroupingError, ReportError, ScoreSequence,
};

#[test]
fn ascending_scores_are_rejected_with_the_offending_index() {
    let err = rank_categories_default(&[
        CategoryScore::new("A", "", 0.5),
        CategoryScore::new("B", "", 0.4),
        CategoryScore::new("C", "", 0.6),
    ])
    .unwrap_err();

    match err {
        ClassifyError::Grouping(GroupingError::NotDescending { index }) => assert_eq!(index, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_input_is_rejected() {
    let err = rank_categories_default(&[]).unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::Grouping(GroupingError::EmptyScores)
    ));
}

#[test]
fn non_finite_scores_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = ScoreSequence::new(vec![0.9, bad]).unwrap_err();
        assert!(matches!(err, GroupingError::NonFiniteScore { index: 1 }));
    }
}

#[test]
fn invalid_grouping_config_fails_before_clustering() {
    let cfg = GroupingConfig::new().with_min_samples(1);
    let err = rank_categories(&[CategoryScore::new("A", "", 0.9)], &cfg).unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::Grouping(GroupingError::InvalidConfig(_))
    ));
}

#[test]
fn empty_report_rows_are_rejected() {
    assert!(matches!(format_report(&[]), Err(ReportError::EmptyRows)));
}

#[test]
fn error_messages_are_actionable() {
    let err = ScoreSequence::new(vec![0.1, 0.9]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("non-increasing"), "unhelpful message: {msg}");
    assert!(msg.contains('1'), "missing index: {msg}");
}

#[test]
fn config_file_errors_surface_as_typed_variants() {
    let missing = CatrankConfig::from_yaml_file("/nonexistent/catrank.yaml").unwrap_err();
    assert!(matches!(missing, ConfigLoadError::FileRead(_)));

    let parse = CatrankConfig::from_yaml_str("version: [oops").unwrap_err();
    assert!(matches!(parse, ConfigLoadError::YamlParse(_)));

    let version = CatrankConfig::from_yaml_str("version: \"2.0\"\n").unwrap_err();
    assert!(matches!(version, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));

    let invalid = CatrankConfig::from_yaml_str("version: \"1.0\"\ngrouping:\n  xi: 0.0\n")
        .unwrap_err();
    assert!(matches!(invalid, ConfigLoadError::Validation(_)));
}

#[test]
fn grouping_errors_format_through_the_classify_error() {
    let err = rank_categories_default(&[CategoryScore::new("A", "", f64::NAN)]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("finite"), "unhelpful message: {msg}");
}
