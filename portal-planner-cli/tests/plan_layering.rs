//! End-to-end tests for layering `plan` options from the environment.
//!
//! Each test runs the built binary in a scratch directory with a cleared
//! environment, so only the variables set here reach configuration loading.

use std::path::Path;
use std::process::{Command, Output};

use rstest::rstest;
use serde_json::Value;
use tempfile::TempDir;

const REQUEST: &str = r#"{
  "corridor": [{ "x": 0.0, "y": 0.0 }, { "x": 0.004, "y": 0.0 }],
  "waypoints": [
    { "id": "statue", "location": { "x": 0.0035, "y": 0.0 }, "level": 2, "energy": 0, "resonators": 0 },
    { "id": "fountain", "location": { "x": 0.0005, "y": 0.0001 }, "level": 5, "energy": 100, "resonators": 8 },
    { "id": "mural", "location": { "x": 0.002, "y": -0.0002 }, "level": 3, "energy": 40, "resonators": 4 }
  ]
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    #[expect(clippy::expect_used, reason = "tests fail fast on setup errors")]
    fn with_request() -> Self {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("request.json"), REQUEST).expect("write request");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    #[expect(clippy::expect_used, reason = "tests fail fast on setup errors")]
    fn run(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_portal-planner"))
            .args(args)
            .current_dir(self.path())
            .env_clear()
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path())
            .envs(env.iter().copied())
            .output()
            .expect("run portal-planner")
    }
}

#[expect(clippy::expect_used, reason = "tests fail fast on malformed output")]
fn report(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "plan failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report")
}

fn route_ids(report: &Value) -> Vec<String> {
    report["route"]
        .as_array()
        .map(|stops| {
            stops
                .iter()
                .filter_map(|stop| stop["id"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

#[rstest]
fn objective_comes_from_the_environment() {
    let workspace = Workspace::with_request();
    let output = workspace.run(
        &["plan", "request.json"],
        &[("PORTAL_PLANNER_CMDS_PLAN_OBJECTIVE", "energy")],
    );

    let report = report(&output);
    assert_eq!(report["objective"], "energy");
    assert_eq!(route_ids(&report), ["fountain", "mural", "statue"]);
    assert_eq!(report["final_budget"], 10_370);
}

#[rstest]
fn objective_alias_is_accepted_from_the_environment() {
    let workspace = Workspace::with_request();
    let output = workspace.run(
        &["plan", "request.json"],
        &[("PORTAL_PLANNER_CMDS_PLAN_OBJECTIVE", "xm")],
    );

    assert_eq!(report(&output)["objective"], "energy");
}

#[rstest]
fn command_line_flag_beats_the_environment() {
    let workspace = Workspace::with_request();
    let output = workspace.run(
        &["plan", "request.json", "--objective", "distance"],
        &[("PORTAL_PLANNER_CMDS_PLAN_OBJECTIVE", "energy")],
    );

    let report = report(&output);
    assert_eq!(report["objective"], "distance");
    assert_eq!(report["final_budget"], Value::Null);
    assert_eq!(route_ids(&report), ["statue", "mural", "fountain"]);
}

#[rstest]
fn budget_and_request_path_come_from_the_environment() {
    let workspace = Workspace::with_request();
    let output = workspace.run(
        &["plan", "--objective", "energy"],
        &[
            ("PORTAL_PLANNER_CMDS_PLAN_REQUEST_PATH", "request.json"),
            ("PORTAL_PLANNER_CMDS_PLAN_BUDGET", "500"),
        ],
    );

    let report = report(&output);
    assert_eq!(report["budget_trace"], serde_json::json!([650, 770, 870]));
    assert_eq!(report["final_budget"], 870);
}

#[rstest]
fn missing_request_names_the_environment_variable() {
    let workspace = Workspace::with_request();
    let output = workspace.run(&["plan"], &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("PORTAL_PLANNER_CMDS_PLAN_REQUEST_PATH"),
        "unexpected stderr: {stderr}"
    );
}
