// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! End-to-end tests for the `footprint` binary

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn footprint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_footprint"))
        .args(args)
        .env_remove("FOOTPRINT_FACTORS")
        .output()
        .expect("run footprint binary")
}

const REFERENCE_ARGS: [&str; 9] = [
    "calculate",
    "--distance",
    "10",
    "--electricity",
    "300",
    "--waste",
    "5",
    "--meals",
    "3",
];

#[test]
fn test_calculate_text() {
    let out = footprint(&REFERENCE_ARGS);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Transportation: 0.51 tonnes CO2 per year"));
    assert!(stdout.contains("Electricity: 2.95 tonnes CO2 per year"));
    assert!(stdout.contains("Diet: 1.37 tonnes CO2 per year"));
    assert!(stdout.contains("Waste: 0.03 tonnes CO2 per year"));
    assert!(stdout.contains("Your total carbon footprint is: 4.86 tonnes CO2 per year"));
}

#[test]
fn test_calculate_json() {
    let mut args = REFERENCE_ARGS.to_vec();
    args.extend(["--format", "json"]);
    let out = footprint(&args);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["result"]["total_tonnes"], 4.86);
    assert_eq!(value["input"]["region"], "Pakistan");
}

#[test]
fn test_defaults_give_zero_footprint() {
    let out = footprint(&["calculate"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Your total carbon footprint is: 0.00 tonnes"));
}

#[test]
fn test_unknown_region_fails() {
    let out = footprint(&["calculate", "--region", "Atlantis"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown region: Atlantis"));
}

#[test]
fn test_out_of_range_input_rejected() {
    let out = footprint(&["calculate", "--distance", "150"]);
    assert!(!out.status.success());

    let out = footprint(&["calculate", "--meals", "-1"]);
    assert!(!out.status.success());
}

#[test]
fn test_init_then_use_custom_factors() {
    let temp = TempDir::new().expect("Create temp dir");
    let path = temp.path().join("factors.toml");
    let path_str = path.to_str().unwrap();

    let out = footprint(&["init", "--path", path_str]);
    assert!(out.status.success());

    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str(
        "\n[regions.Testland]\ntransportation = 2.0\nelectricity = 2.0\ndiet = 2.0\nwaste = 2.0\n",
    );
    fs::write(&path, content).unwrap();

    let out = footprint(&["regions", "--factors", path_str]);
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Pakistan"));
    assert!(stdout.contains("Testland"));

    let out = footprint(&[
        "calculate",
        "--factors",
        path_str,
        "--region",
        "Testland",
        "--distance",
        "1",
        "--electricity",
        "1",
        "--waste",
        "1",
        "--meals",
        "1",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Your total carbon footprint is: 1.58 tonnes"));
}

#[test]
fn test_invalid_factor_file_fails() {
    let temp = TempDir::new().expect("Create temp dir");
    let path = temp.path().join("factors.toml");
    fs::write(&path, "[regions.Partial]\ntransportation = 0.1\n").unwrap();

    let out = footprint(&["regions", "--factors", path.to_str().unwrap()]);
    assert!(!out.status.success());
}
