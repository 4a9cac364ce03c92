use lattice_nav::common::ConfigError;
use lattice_nav::domains::planning::Algorithm;
use lattice_nav::ScenarioConfig;
use std::fs;
use tempfile::tempdir;

fn write_scenario(contents: &str, file_name: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

const VALID_JSON: &str = r#"{
  "space_size": [1.0, 1.0, 1.0],
  "grid_resolution": 0.2,
  "obstacles": [
    { "start": [0.2, 0.2, 0.2], "end": [0.4, 0.4, 0.4] }
  ],
  "start_point": [0.0, 0.0, 0.0],
  "goal_point": [1.0, 1.0, 1.0]
}"#;

#[test]
fn loads_a_valid_json_scenario() {
    let (_dir, path) = write_scenario(VALID_JSON, "scenario.json");
    let config = ScenarioConfig::from_file(&path).unwrap();

    assert_eq!(config.space_size, [1.0, 1.0, 1.0]);
    assert_eq!(config.grid_resolution, 0.2);
    assert_eq!(config.obstacles.len(), 1);
    assert_eq!(config.start_point, [0.0, 0.0, 0.0]);
    assert_eq!(config.goal_point, [1.0, 1.0, 1.0]);
    // omitted fields fall back to defaults
    assert_eq!(config.algorithm, Algorithm::Dijkstra);
    assert!(config.max_nodes.is_none());
    assert!(config.scene_output.is_none());
}

#[test]
fn loads_a_valid_toml_scenario() {
    let toml = r#"
space_size = [1.0, 1.0, 0.4]
grid_resolution = 0.2
start_point = [0.0, 0.0, 0.0]
goal_point = [1.0, 1.0, 0.4]
algorithm = "astar"
max_nodes = 10000

[[obstacles]]
start = [0.2, 0.2, 0.0]
end = [0.4, 0.4, 0.4]
"#;
    let (_dir, path) = write_scenario(toml, "scenario.toml");
    let config = ScenarioConfig::from_file(&path).unwrap();

    assert_eq!(config.algorithm, Algorithm::AStar);
    assert_eq!(config.max_nodes, Some(10000));
    assert_eq!(config.obstacles.len(), 1);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let err = ScenarioConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_json_reports_parse_error() {
    let (_dir, path) = write_scenario("{ not json", "broken.json");
    let err = ScenarioConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
}

#[test]
fn unknown_extension_is_rejected() {
    let (_dir, path) = write_scenario(VALID_JSON, "scenario.yaml");
    let err = ScenarioConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn missing_required_field_fails_to_parse() {
    let json = r#"{
  "grid_resolution": 0.2,
  "start_point": [0.0, 0.0, 0.0],
  "goal_point": [1.0, 1.0, 1.0]
}"#;
    let (_dir, path) = write_scenario(json, "scenario.json");
    let err = ScenarioConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
}

fn assert_invalid_with(json: &str, expected_fragment: &str) {
    let (_dir, path) = write_scenario(json, "scenario.json");
    match ScenarioConfig::from_file(&path).unwrap_err() {
        ConfigError::Invalid { reason } => assert!(
            reason.contains(expected_fragment),
            "reason {reason:?} does not mention {expected_fragment:?}"
        ),
        other => panic!("expected ConfigError::Invalid, got {other:?}"),
    }
}

#[test]
fn non_positive_space_size_is_invalid() {
    assert_invalid_with(
        r#"{
  "space_size": [1.0, -1.0, 1.0],
  "grid_resolution": 0.2,
  "start_point": [0.0, 0.0, 0.0],
  "goal_point": [1.0, 1.0, 1.0]
}"#,
        "space_size[1]",
    );
}

#[test]
fn non_positive_resolution_is_invalid() {
    assert_invalid_with(
        r#"{
  "space_size": [1.0, 1.0, 1.0],
  "grid_resolution": 0.0,
  "start_point": [0.0, 0.0, 0.0],
  "goal_point": [1.0, 1.0, 1.0]
}"#,
        "grid_resolution",
    );
}

#[test]
fn inverted_obstacle_bounds_are_invalid() {
    assert_invalid_with(
        r#"{
  "space_size": [1.0, 1.0, 1.0],
  "grid_resolution": 0.2,
  "obstacles": [ { "start": [0.4, 0.2, 0.2], "end": [0.2, 0.4, 0.4] } ],
  "start_point": [0.0, 0.0, 0.0],
  "goal_point": [1.0, 1.0, 1.0]
}"#,
        "obstacle 0",
    );
}

#[test]
fn non_finite_values_are_invalid() {
    // JSON cannot carry NaN, TOML can
    let toml = r#"
space_size = [1.0, 1.0, nan]
grid_resolution = 0.2
start_point = [0.0, 0.0, 0.0]
goal_point = [1.0, 1.0, 1.0]
"#;
    let (_dir, path) = write_scenario(toml, "scenario.toml");
    match ScenarioConfig::from_file(&path).unwrap_err() {
        ConfigError::Invalid { reason } => assert!(reason.contains("space_size[2]")),
        other => panic!("expected ConfigError::Invalid, got {other:?}"),
    }
}

#[test]
fn out_of_lattice_endpoints_pass_validation() {
    // not lattice-aligned, but that is a query-time concern, not a config one
    let json = r#"{
  "space_size": [1.0, 1.0, 1.0],
  "grid_resolution": 0.2,
  "start_point": [0.1, 0.0, 0.0],
  "goal_point": [7.0, 7.0, 7.0]
}"#;
    let (_dir, path) = write_scenario(json, "scenario.json");
    assert!(ScenarioConfig::from_file(&path).is_ok());
}
