//! End-to-end replays of complete scripts, through files on disk.

use std::fs;
use std::path::PathBuf;

use browser_sim::output::OutputFormat;
use browser_sim::session::replay_script;
use browser_sim::{CliError, Script, cli, run};
use tempfile::TempDir;

const ONE_PAGE: &str = "1\n1 http://x\ndesc1\n";

fn replay(pages: &str, commands: &[&str]) -> String {
    let text = format!("{pages}{}\n{}\n", commands.len(), commands.join("\n"));
    let script: Script = text.parse().unwrap();
    let mut out = Vec::new();
    replay_script(script, OutputFormat::Human, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn new_tab_then_page_then_print() {
    let out = replay(ONE_PAGE, &["NEW_TAB", "PAGE 1", "PRINT"]);
    assert_eq!(out, "0 1\ndesc1\n");
}

#[test]
fn backward_on_fresh_home_tab() {
    let out = replay(ONE_PAGE, &["BACKWARD", "PRINT"]);
    assert_eq!(out, "403 Forbidden\n0\nComputer Science\n");
}

#[test]
fn backward_returns_to_home_page() {
    let out = replay(ONE_PAGE, &["NEW_TAB", "PAGE 1", "BACKWARD", "PRINT"]);
    assert_eq!(out, "0 1\nComputer Science\n");
}

#[test]
fn close_home_tab_is_forbidden() {
    let out = replay(ONE_PAGE, &["CLOSE", "PRINT"]);
    assert_eq!(out, "403 Forbidden\n0\nComputer Science\n");
}

#[test]
fn open_unknown_tab_is_forbidden() {
    let out = replay(ONE_PAGE, &["NEW_TAB", "OPEN 99", "PRINT"]);
    assert_eq!(out, "403 Forbidden\n1 0\nComputer Science\n");
}

#[test]
fn unpopulated_page_is_forbidden() {
    let out = replay(ONE_PAGE, &["PAGE 2", "PAGE 0", "PRINT_HISTORY 0"]);
    assert_eq!(out, "403 Forbidden\n403 Forbidden\nhttps://acs.pub.ro/\n");
}

#[test]
fn navigate_clears_forward_history() {
    let pages = "2\n1 http://x\ndesc1\n2 http://y\ndesc2\n";
    let out = replay(
        pages,
        &["PAGE 1", "PAGE 2", "BACKWARD", "PAGE 2", "FORWARD", "PRINT_HISTORY 0"],
    );
    assert_eq!(
        out,
        "403 Forbidden\nhttp://y\nhttp://x\nhttps://acs.pub.ro/\n"
    );
}

#[test]
fn print_history_lists_forward_current_backward() {
    let pages = "3\n1 http://a\nA\n2 http://b\nB\n3 http://c\nC\n";
    let out = replay(
        pages,
        &[
            "NEW_TAB",
            "PAGE 1",
            "PAGE 2",
            "PAGE 3",
            "BACKWARD",
            "BACKWARD",
            "OPEN 0",
            "PRINT_HISTORY 1",
            "PRINT",
        ],
    );
    assert_eq!(
        out,
        "http://c\nhttp://b\nhttp://a\nhttps://acs.pub.ro/\n0 1\nComputer Science\n"
    );
}

#[test]
fn close_switches_to_previous_tab() {
    let out = replay(
        ONE_PAGE,
        &["NEW_TAB", "NEW_TAB", "NEW_TAB", "PREV", "CLOSE", "PRINT", "NEXT", "PRINT"],
    );
    assert_eq!(out, "1 3 0\nComputer Science\n3 0 1\nComputer Science\n");
}

#[test]
fn next_and_prev_wrap_around_the_ring() {
    let out = replay(ONE_PAGE, &["NEW_TAB", "NEW_TAB", "NEXT", "PRINT", "PREV", "PREV", "PRINT"]);
    assert_eq!(out, "0 1 2\nComputer Science\n1 2 0\nComputer Science\n");
}

#[test]
fn history_survives_switching_tabs() {
    let out = replay(
        ONE_PAGE,
        &["PAGE 1", "NEW_TAB", "OPEN 0", "PRINT", "BACKWARD", "FORWARD", "PRINT"],
    );
    assert_eq!(out, "0 1\ndesc1\n0 1\ndesc1\n");
}

// =============================================================================
// File-based runs
// =============================================================================

fn write_script(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("tema1.in");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn run_reads_script_and_writes_results_file() {
    let dir = TempDir::new().unwrap();
    let input = write_script(&dir, "1\n1 http://x\ndesc1\n3\nNEW_TAB\nPAGE 1\nPRINT\n");
    let output = dir.path().join("tema1.out");

    let cli = cli::parse_from([
        "browser-sim",
        input.to_str().unwrap(),
        "-O",
        output.to_str().unwrap(),
    ]);
    let summary = run(cli).unwrap();

    assert_eq!(summary.executed, 3);
    assert_eq!(summary.forbidden, 0);
    assert_eq!(summary.open_tabs, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "0 1\ndesc1\n");
}

#[test]
fn run_writes_json_lines() {
    let dir = TempDir::new().unwrap();
    let input = write_script(&dir, "0\n2\nCLOSE\nPRINT\n");
    let output = dir.path().join("out.jsonl");

    let cli = cli::parse_from([
        "browser-sim",
        input.to_str().unwrap(),
        "-O",
        output.to_str().unwrap(),
        "-o",
        "json",
    ]);
    run(cli).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["command"], "CLOSE");
    assert_eq!(lines[0]["error"], "tab 0 cannot be closed");
    assert_eq!(lines[1]["lines"][1], "Computer Science");
}

#[test]
fn run_reports_missing_script() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.in");
    let output = dir.path().join("nope.out");

    let cli = cli::parse_from([
        "browser-sim",
        missing.to_str().unwrap(),
        "-O",
        output.to_str().unwrap(),
    ]);
    let err = run(cli).unwrap_err();
    assert!(matches!(err, CliError::FileAccess { .. }));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn run_reports_malformed_script() {
    let dir = TempDir::new().unwrap();
    let input = write_script(&dir, "1\n1 http://x\ndesc1\nmany\n");
    let output = dir.path().join("tema1.out");

    let cli = cli::parse_from([
        "browser-sim",
        input.to_str().unwrap(),
        "-O",
        output.to_str().unwrap(),
    ]);
    let err = run(cli).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput { line: 4, .. }));
}

#[test]
fn run_refuses_to_overwrite_script() {
    let dir = TempDir::new().unwrap();
    let input = write_script(&dir, "0\n0\n");

    let cli = cli::parse_from([
        "browser-sim",
        input.to_str().unwrap(),
        "-O",
        input.to_str().unwrap(),
    ]);
    let err = run(cli).unwrap_err();
    assert_eq!(err.exit_code(), 64);
    assert_eq!(fs::read_to_string(&input).unwrap(), "0\n0\n");
}

#[test]
fn run_refuses_to_overwrite_script_through_another_spelling() {
    let dir = TempDir::new().unwrap();
    let input = write_script(&dir, "0\n0\n");
    let same = dir.path().join(".").join("tema1.in");

    let cli = cli::parse_from([
        "browser-sim",
        input.to_str().unwrap(),
        "-O",
        same.to_str().unwrap(),
    ]);
    let err = run(cli).unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));
    assert_eq!(fs::read_to_string(&input).unwrap(), "0\n0\n");
}

#[test]
fn print_history_lists_long_backward_history_in_full() {
    let mut commands = vec!["PAGE 1"; 60];
    commands.push("PRINT_HISTORY 0");
    let out = replay(ONE_PAGE, &commands);

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 61);
    assert!(lines[..60].iter().all(|line| *line == "http://x"));
    assert_eq!(lines[60], "https://acs.pub.ro/");
}
