//! End-to-end tests driving `run()` through a capturing host.

use hazard_score::Host;
use std::fs;
use std::path::Path;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn run(args: &[&str]) -> TestHost {
    let mut host = TestHost::new();
    let mut full = vec!["hazard-score"];
    full.extend_from_slice(args);
    hazard_score::run(&mut host, full);
    host
}

const REGISTER_CSV: &str = "\
id,hazard,likelihood_before,severity_before,likelihood_after,severity_after,existing_controls,additional_controls
HZ-1,Forklift traffic in loading bay,5,5,2,2,Marked walkways,
HZ-2,Manual handling of drums,3,3,3,2,,Drum trolley
HZ-3,Solvent store,4,4,3,4,Ventilation,Replace solvent with water-based product
";

fn write_register(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_score_prints_badge() {
    let host = run(&["score", "3", "4"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    assert_eq!(host.output_str(), "Risk: 12 (High)\n");
}

#[test]
fn test_score_boundaries() {
    assert_eq!(run(&["score", "2", "2"]).output_str(), "Risk: 4 (Low)\n");
    assert_eq!(run(&["score", "1", "5"]).output_str(), "Risk: 5 (Medium)\n");
    assert_eq!(run(&["score", "3", "3"]).output_str(), "Risk: 9 (Medium)\n");
    assert_eq!(run(&["score", "2", "5"]).output_str(), "Risk: 10 (High)\n");
    assert_eq!(run(&["score", "4", "4"]).output_str(), "Risk: 16 (High)\n");
    assert_eq!(run(&["score", "5", "5"]).output_str(), "Risk: 25 (Very High)\n");
}

#[test]
fn test_score_rejects_out_of_range() {
    let host = run(&["score", "0", "3"]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("likelihood must be between 1 and 5"), "{}", host.error_str());
    assert!(host.output_str().is_empty());
}

#[test]
fn test_score_permits_out_of_range_on_request() {
    let host = run(&["score", "--permit-out-of-range", "5", "9"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    assert_eq!(host.output_str(), "Risk: 45 (Very High)\n");

    let host = run(&["score", "--permit-out-of-range", "-1", "3"]);
    assert_eq!(host.output_str(), "Risk: -3 (Low)\n");
}

#[test]
fn test_score_json() {
    let host = run(&["score", "--format", "json", "4", "5"]);
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value, serde_json::json!({ "score": 20, "level": "Very High", "color": "red" }));
}

#[test]
fn test_assess_console_report() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.csv", REGISTER_CSV);

    let host = run(&["assess", &register, "--color", "never"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());

    let out = host.output_str();
    assert!(out.contains("HZ-1: Forklift traffic in loading bay"));
    assert!(out.contains("Before controls: Risk: 25 (Very High)"));
    assert!(out.contains("After controls:  Risk: 4 (Low)"));
    assert!(out.contains("HZ-3: Solvent store"));
    assert!(out.contains("Follow-up:       corrective action required"));
}

#[test]
fn test_assess_json_report() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.csv", REGISTER_CSV);

    let host = run(&["assess", &register, "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    let hazards = value.as_array().unwrap();
    assert_eq!(hazards.len(), 3);

    assert_eq!(hazards[0]["before"]["level"], "Very High");
    assert_eq!(hazards[0]["after"]["color"], "green");
    assert_eq!(hazards[0]["follow_up"], false);

    assert_eq!(hazards[1]["before"]["score"], 9);
    assert_eq!(hazards[1]["after"]["score"], 6);
    assert_eq!(hazards[1]["after"]["level"], "Medium");
    assert_eq!(hazards[1]["follow_up"], false);

    assert_eq!(hazards[2]["after"]["level"], "High");
    assert_eq!(hazards[2]["follow_up"], true);
}

#[test]
fn test_assess_actions() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.csv", REGISTER_CSV);

    let host = run(&["assess", &register, "--actions", "--as-of", "2024-01-01", "--format", "json"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());

    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "hazard_id": "HZ-3",
            "hazard": "Solvent store",
            "action": "Replace solvent with water-based product",
            "priority": "High",
            "residual_score": 12,
            "due": "2024-01-31"
        }])
    );
}

#[test]
fn test_assess_fail_on_follow_up() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.csv", REGISTER_CSV);

    let host = run(&["assess", &register, "--fail-on-follow-up"]);
    assert_eq!(host.exit_code, Some(2));
}

#[test]
fn test_assess_writes_output_file() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.csv", REGISTER_CSV);
    let output = tmp.path().join("rated.csv");

    let host = run(&["assess", &register, "--format", "csv", "--output", output.to_str().unwrap()]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    assert!(host.output_str().is_empty());

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("HZ-3,Solvent store,4,4,16,High,orange,3,4,12,High,orange,4,true"), "{text}");
}

#[test]
fn test_assess_reports_rejected_records() {
    let tmp = tempfile::tempdir().unwrap();
    let content = format!("{REGISTER_CSV}HZ-4,Corrupted row,2,9,1,1,,\n");
    let register = write_register(tmp.path(), "register.csv", &content);

    let host = run(&["assess", &register, "--format", "json"]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("record 4 ('HZ-4')"), "{}", host.error_str());

    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);

    let host = run(&["assess", &register, "--format", "json", "--permit-out-of-range"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value[3]["before"]["score"], 18);
    assert_eq!(value[3]["before"]["level"], "Very High");
}

#[test]
fn test_assess_json_register_with_loose_ratings() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(
        tmp.path(),
        "register.json",
        r#"[{"hazard": "Working at height", "likelihood_before": "4", "severity_before": 5.0,
             "likelihood_after": "2", "severity_after": 5}]"#,
    );

    let host = run(&["assess", &register, "--format", "json"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value[0]["before"]["score"], 20);
    assert_eq!(value[0]["after"]["score"], 10);
    assert_eq!(value[0]["follow_up"], true);
}

#[test]
fn test_assess_unsupported_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.txt", REGISTER_CSV);

    let host = run(&["assess", &register]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("unsupported register format"), "{}", host.error_str());
}

#[test]
fn test_summary_json() {
    let tmp = tempfile::tempdir().unwrap();
    let register = write_register(tmp.path(), "register.csv", REGISTER_CSV);

    let host = run(&["summary", &register, "--format", "json"]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["before_controls"]["very_high"], 1);
    assert_eq!(value["after_controls"]["low"], 1);
    assert_eq!(value["after_controls"]["medium"], 1);
    assert_eq!(value["after_controls"]["high"], 1);
    assert_eq!(value["follow_up"], 1);
    assert_eq!(value["improved"], 1);
}

#[test]
fn test_init_then_validate() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hazard-score.yml");
    let path = path.to_str().unwrap();

    let host = run(&["init", "--output", path]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    assert!(host.output_str().contains("Wrote default configuration"));

    let host = run(&["init", "--output", path]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("already exists"));

    let host = run(&["validate", "--config", path]);
    assert_eq!(host.exit_code, None, "{}", host.error_str());
    assert!(host.output_str().contains("is valid"));
}

#[test]
fn test_validate_reports_bad_config() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.yml");
    fs::write(&path, "due_days:\n  high: 0\n  very_high: 0\n").unwrap();

    let host = run(&["validate", "--config", path.to_str().unwrap()]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("due_days.high"), "{}", host.error_str());
}

#[test]
fn test_validate_missing_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("missing.yml");

    let host = run(&["validate", "--config", path.to_str().unwrap()]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("could not find configuration file"), "{}", host.error_str());
}

#[test]
fn test_unknown_command_is_usage_error() {
    let host = run(&["frobnicate"]);
    assert_eq!(host.exit_code, Some(2));
    assert!(!host.error_str().is_empty());
}
