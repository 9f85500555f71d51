use std::time::Duration;

use tokio_test::{assert_err, assert_ok};
use visualizer::{
    VizError,
    configs::{self, Adapter, VisualizationConfig},
};

#[test]
fn missing_fields_take_the_defaults() {
    let config = assert_ok!(configs::from_json_str(
        r#"{ "hyperparams": { "learning_rate": 0.1 } }"#
    ));

    assert_eq!(config.hyperparams.learning_rate, 0.1);
    assert_eq!(config.hyperparams.max_loops, 140);
    assert_eq!(config.points, VisualizationConfig::default().points);
    assert_eq!(config.tick_interval_ms, 60);
}

#[test]
fn points_are_read_from_json() {
    let config = assert_ok!(configs::from_json_str(
        r#"{
            "points": [{ "feature": 1.0, "target": 2.0 }, { "feature": 3.0, "target": 5.0 }],
            "scale": { "feature": 1.0, "target": 1.0 }
        }"#
    ));

    let key = assert_ok!(Adapter::new().scene_key(&config));
    assert_eq!(key.points().len(), 2);
    assert_eq!(key.scale().feature(), 1.0);
}

#[test]
fn malformed_json_is_rejected() {
    let err = assert_err!(configs::from_json_str(r#"{ "points": 3 }"#));
    assert!(matches!(err, VizError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = assert_err!(configs::load("/nonexistent/descent.json"));
    assert!(matches!(err, VizError::Io(_)));
}

#[test]
fn adapter_validates_hyperparams() {
    let adapter = Adapter::new();

    let mut config = VisualizationConfig::default();
    config.hyperparams.learning_rate = 0.0;
    assert!(matches!(
        assert_err!(adapter.scene_key(&config)),
        VizError::InvalidConfig(_)
    ));

    config.hyperparams.learning_rate = f64::NAN;
    assert_err!(adapter.scene_key(&config));

    let mut config = VisualizationConfig::default();
    config.hyperparams.max_loops = usize::MAX;
    assert_err!(adapter.scene_key(&config));

    let mut config = VisualizationConfig::default();
    config.hyperparams.max_loops = 0;
    assert_ok!(adapter.scene_key(&config));
}

#[test]
fn adapter_validates_scale_and_points() {
    let adapter = Adapter::new();

    let mut config = VisualizationConfig::default();
    config.scale.feature = 0.0;
    assert!(matches!(
        assert_err!(adapter.scene_key(&config)),
        VizError::Regression(_)
    ));

    let mut config = VisualizationConfig::default();
    config.points.clear();
    assert_err!(adapter.scene_key(&config));
}

#[test]
fn tick_interval_must_be_positive() {
    let adapter = Adapter::new();
    let mut config = VisualizationConfig::default();

    assert_eq!(
        assert_ok!(adapter.tick_interval(&config)),
        Duration::from_millis(60)
    );

    config.tick_interval_ms = 0;
    assert_err!(adapter.tick_interval(&config));
}
