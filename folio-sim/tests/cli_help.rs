use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn scenario(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[test]
fn run_help_mentions_options() {
    let mut cmd = cargo_bin_cmd!("folio-sim");
    let output = cmd
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--pretty"), "run help missing --pretty");
    assert!(text.contains("--config"), "run help missing --config");
    assert!(text.contains("--env-file"), "run help missing --env-file");
}

#[test]
fn classify_reports_breakpoint() {
    cargo_bin_cmd!("folio-sim")
        .args(["classify", "768"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""device_class":"compact""#));

    cargo_bin_cmd!("folio-sim")
        .args(["classify", "769"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""device_class":"wide""#));
}

#[test]
fn back_to_projects_scenario_restores_once() {
    let output = cargo_bin_cmd!("folio-sim")
        .arg("run")
        .arg(scenario("back_to_projects.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    let frames: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    // init + six steps; nothing left armed after the final back step
    assert_eq!(frames.len(), 7);
    let back = &frames[6];
    assert_eq!(back["step"], "back");
    assert_eq!(back["snapshot"]["view"]["kind"], "project_detail");
    assert_eq!(back["timers_fired"], 2);
}

#[test]
fn toml_scenario_runs_with_env_file_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let env_file = dir.path().join("folio.env");
    std::fs::write(&env_file, "FOLIO_COMPACT_MAX_WIDTH_PX=1500\n")
        .expect("write env file");

    cargo_bin_cmd!("folio-sim")
        .arg("run")
        .arg(scenario("compact_menu.toml"))
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_compact":true"#))
        .stdout(predicate::str::contains(r#""is_compact":false"#).not());
}

#[test]
fn missing_scenario_fails_with_context() {
    cargo_bin_cmd!("folio-sim")
        .args(["run", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading scenario"));
}
