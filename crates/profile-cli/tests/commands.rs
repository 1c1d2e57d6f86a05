//! Subcommand results, output, and exit codes.

use std::fs;
use std::path::PathBuf;

use profile_cli::cli::{CheckArgs, ControlArg, ReplayArgs};
use profile_cli::commands::{CheckResult, ReplayResult, run_check, run_replay};
use profile_form::SubmitOutcome;

fn unique_temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "profile-commands-{}-{}-{}.jsonl",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn demo_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/profile.jsonl")
}

fn check_args(field: &str, value: &str, control: ControlArg) -> CheckArgs {
    CheckArgs {
        field: field.to_string(),
        value: value.to_string(),
        control,
    }
}

fn replay_args(events: PathBuf, submit: bool) -> ReplayArgs {
    ReplayArgs {
        events,
        submit,
        json: false,
        plain: true,
    }
}

#[test]
fn check_with_validation_error_exits_one() {
    let mut out = Vec::new();
    let result = run_check(&check_args("lastName", "田中1", ControlArg::Text), &mut out).unwrap();
    assert_eq!(result, CheckResult { has_error: true });
    assert_eq!(result.exit_code(), 1);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "field:  lastName (姓)\nstored: \"田中1\"\nerror:  記号・数字は使用できません\n"
    );
}

#[test]
fn check_of_valid_age_exits_zero() {
    let mut out = Vec::new();
    let result = run_check(&check_args("age", "３０", ControlArg::Text), &mut out).unwrap();
    assert_eq!(result.exit_code(), 0);
    assert!(String::from_utf8(out).unwrap().contains("stored: \"30\""));
}

#[test]
fn check_rejects_unknown_gender_option() {
    let mut out = Vec::new();
    let error = run_check(&check_args("gender", "robot", ControlArg::Radio), &mut out).unwrap_err();
    assert_eq!(
        format!("{error:#}"),
        "parse gender option: unknown gender option: robot"
    );
    assert!(out.is_empty());
}

#[test]
fn check_accepts_known_gender_option() {
    let mut out = Vec::new();
    let result = run_check(&check_args("gender", "other", ControlArg::Radio), &mut out).unwrap();
    assert_eq!(result.exit_code(), 0);
    assert!(String::from_utf8(out).unwrap().contains("stored: \"other\""));
}

#[test]
fn check_rejects_unknown_field() {
    let mut out = Vec::new();
    let error = run_check(&check_args("email", "x", ControlArg::Text), &mut out).unwrap_err();
    assert!(format!("{error:#}").contains("unknown field: email"));
}

#[test]
fn replay_submit_of_complete_form_prints_complete() {
    let mut out = Vec::new();
    let result = run_replay(&replay_args(demo_script(), true), &mut out).unwrap();
    assert_eq!(
        result,
        ReplayResult {
            ready: true,
            outcome: Some(SubmitOutcome::Completed),
        }
    );
    assert_eq!(result.exit_code(), 0);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("gate: ready\n"));
    assert!(text.ends_with("complete\n"));
}

#[test]
fn replay_submit_of_blocked_form_exits_one() {
    let path = unique_temp_path("blocked");
    fs::write(
        &path,
        "{\"field\": \"lastName\", \"value\": \"田中\"}\n{\"field\": \"age\", \"value\": \"30歳\"}\n",
    )
    .unwrap();

    let mut out = Vec::new();
    let result = run_replay(&replay_args(path.clone(), true), &mut out);
    fs::remove_file(&path).unwrap();
    let result = result.unwrap();

    assert_eq!(
        result,
        ReplayResult {
            ready: false,
            outcome: Some(SubmitOutcome::NotReady),
        }
    );
    assert_eq!(result.exit_code(), 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("gate: blocked\n"));
    assert!(text.contains("- age: 半角数字以外は使用できません\n"));
    assert!(!text.contains("complete"));
}

#[test]
fn replay_without_submit_exits_zero_even_when_blocked() {
    let path = unique_temp_path("no-submit");
    fs::write(&path, "{\"field\": \"firstName\", \"value\": \"太郎\"}\n").unwrap();

    let mut out = Vec::new();
    let result = run_replay(&replay_args(path.clone(), false), &mut out);
    fs::remove_file(&path).unwrap();
    let result = result.unwrap();

    assert_eq!(result.outcome, None);
    assert!(!result.ready);
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn replay_json_output_is_parseable() {
    let mut out = Vec::new();
    let args = ReplayArgs {
        events: demo_script(),
        submit: false,
        json: true,
        plain: false,
    };
    run_replay(&args, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["ready"], serde_json::json!(true));
    assert_eq!(value["state"]["age"], serde_json::json!("30"));
    assert_eq!(value["errors"], serde_json::json!({}));
}
