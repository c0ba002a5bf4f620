use sociogram::{ConfigError, NetworkConfig, Report, Rounding, Strategy};
use std::io::Write;

#[test]
fn test_load_yaml_file_and_report() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "people: [A, B, C]\nconnections:\n  - [A, B]\n  - [B, C]\nthreshold: 1\nrounding: cast"
    )
    .unwrap();

    let config = NetworkConfig::from_path(file.path()).unwrap();
    assert_eq!(config.rounding, Rounding::Truncate);

    let graph = config.build();
    let report = Report::compute(&graph, config.report_options()).unwrap();

    assert_eq!(report.average_degree, 1.0);
    assert_eq!(report.more_than_threshold.len(), 1);
    assert_eq!(
        report.to_string().lines().last().unwrap(),
        "More than 1 friends: {B}"
    );
}

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"people": ["X", "Y"], "strategy": "full", "seed": 7}}"#).unwrap();

    let config = NetworkConfig::from_path(file.path()).unwrap();
    assert_eq!(config.strategy, Strategy::Full);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.build().edge_count(), 2);
}

#[test]
fn test_unsupported_extension() {
    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let err = NetworkConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "toml"));
}

#[test]
fn test_missing_file() {
    let err = NetworkConfig::from_path("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_default_demo_network_reports() {
    let config = NetworkConfig {
        seed: Some(11),
        ..NetworkConfig::default()
    };
    let graph = config.build();
    let report = Report::compute(&graph, config.report_options()).unwrap();

    assert_eq!(report.friends.len(), 8);
    assert_eq!(report.to_string().lines().count(), 6);
}
