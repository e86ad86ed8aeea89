use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tarock_core::game::outcome::DealOutcome;
use tempfile::tempdir;

fn tarock() -> Command {
    let mut cmd = Command::cargo_bin("tarock").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn outcome_of(cmd: &mut Command) -> DealOutcome {
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf-8 stdout");
    DealOutcome::from_json(&text).expect("stdout is a deal outcome")
}

#[test]
fn runs_one_deal_without_arguments() {
    tarock()
        .assert()
        .success()
        .stdout(predicate::str::contains("\"player_score\""))
        .stdout(predicate::str::contains("\"defender_score\""))
        .stdout(predicate::str::contains("\"won\""));
}

#[test]
fn same_seed_prints_the_same_outcome() {
    let first = outcome_of(tarock().args(["--seed", "2718"]));
    let second = outcome_of(tarock().args(["--seed", "2718"]));
    assert_eq!(first, second);
    assert_eq!(first.won, first.player_score > first.defender_score);
}

#[test]
fn reads_strategy_from_yaml_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("sim.yaml");
    fs::write(
        &path,
        r#"
seed: 11
strategy:
  bidder: "threshold"
  thresholds:
    small: 99
    under: 99
    over: 99
    solo: 99
logging:
  tracing_level: "error"
"#,
    )
    .expect("write config");

    let outcome = outcome_of(tarock().arg("--config").arg(&path));
    assert_eq!(outcome.player_score, 0);
    assert_eq!(outcome.defender_score, 0);
    assert!(!outcome.won);
    assert_eq!(outcome.declarer, None);
}

#[test]
fn diagnostics_stay_off_stdout() {
    let outcome = outcome_of(tarock().args(["--seed", "5", "--log-level", "debug"]));
    assert_eq!(outcome.won, outcome.player_score > outcome.defender_score);
}

#[test]
fn invalid_config_fails_with_field_name() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "strategy:\n  bidder: \"oracle\"\n").expect("write config");

    tarock()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("strategy.bidder"));
}

#[test]
fn missing_config_file_fails() {
    tarock()
        .args(["--config", "no/such/file.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn rejects_unknown_log_level() {
    tarock()
        .args(["--log-level", "shouting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.tracing_level"));
}
