use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

/// Temp workspace with a `data/` catalog directory and an isolated config home.
fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();

    write_catalog(
        &data,
        "iphone",
        &json!([
            {"名称": "iPhone SE", "モデル番号": ["A1723", "A1662"], "CPU": "A9", "発売年": 2016,
             "特徴（見分け方）": "ホームボタンあり"},
            {"名称": "iPhone 15", "モデル番号": "A3090, A2846", "CPU": "A16 Bionic", "発売年": "2023"},
            {"名称": "iPhone 8", "モデル番号": "A1906", "CPU": "A11 Bionic", "発売年": "2017"}
        ]),
    );
    write_catalog(
        &data,
        "ipad",
        &json!([
            {"名称": "iPad Pro 11インチ", "モデル番号": "A1980", "シリーズ": "iPad Pro",
             "特徴": "A12X Bionicチップ搭載"},
            {"名称": "iPad Air (第5世代)", "モデル番号": "A2588", "シリーズ": "iPad Air",
             "特徴": "M1チップ搭載"}
        ]),
    );
    write_catalog(
        &data,
        "airpods",
        &json!([
            {"名称": "AirPods Pro (第2世代)", "モデル番号": "A2698、A2699"},
            {"名称": "AirPods Max", "モデル番号": "A2096"}
        ]),
    );
    std::fs::write(data.join("ipod.json"), "{ not json").unwrap();
    dir
}

fn write_catalog(data: &Path, source: &str, records: &Value) {
    std::fs::write(
        data.join(format!("{source}.json")),
        serde_json::to_string(records).unwrap(),
    )
    .unwrap();
}

fn ringo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ringo").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("RINGO_CONFIG")
        .env_remove("RINGO_DATA_DIR")
        .env_remove("RINGO_SEARCH_DEFAULT_MODE")
        .env_remove("RINGO_SEARCH_DEFAULT_CATEGORY")
        .env_remove("RINGO_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("ringo").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("ringo").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_categories_lists_all() {
    let dir = workspace();
    ringo(&dir)
        .args(["--plain", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apple_watch: Apple Watch"))
        .stdout(predicate::str::contains("mac_studio: Mac Studio"));
}

#[test]
fn test_categories_counts() {
    let dir = workspace();
    let json = json_stdout(ringo(&dir).args(["-m", "categories", "--counts"]));
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 14);
    let iphone = entries.iter().find(|e| e["id"] == "iphone").unwrap();
    assert_eq!(iphone["count"], 3);
    let ipod = entries.iter().find(|e| e["id"] == "ipod").unwrap();
    assert_eq!(ipod["count"], 0);
}

#[test]
fn test_search_by_model() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "a1662"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone SE"))
        .stdout(predicate::str::contains("A1723, A1662"))
        .stdout(predicate::str::contains("ホームボタンあり"))
        .stdout(predicate::str::contains("iPhone 15").not());
}

#[test]
fn test_search_by_model_comma_list() {
    let dir = workspace();
    let json = json_stdout(ringo(&dir).args(["-m", "search", "A2846"]));
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["results"][0]["名称"], "iPhone 15");
}

#[test]
fn test_search_by_name_with_derived_series() {
    let dir = workspace();
    let json = json_stdout(ringo(&dir).args([
        "-m",
        "search",
        "airpods pro",
        "--category",
        "airpods",
        "--by",
        "name",
    ]));
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["results"][0]["シリーズ"], "AirPods Pro");
}

#[test]
fn test_search_ipad_chip_derivation_and_filter() {
    let dir = workspace();
    let json = json_stdout(ringo(&dir).args([
        "-m",
        "search",
        "-c",
        "ipad",
        "--filter",
        "CPU=M1 チップ",
    ]));
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["results"][0]["名称"], "iPad Air (第5世代)");
}

#[test]
fn test_search_filters_only() {
    let dir = workspace();
    ringo(&dir)
        .args(["--plain", "search", "--filter", "CPU=A9"])
        .assert()
        .success()
        .stdout(predicate::str::diff("iPhone SE: A1723, A1662\n"));
}

#[test]
fn test_search_empty_query_fails() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a search condition"));
}

#[test]
fn test_search_empty_query_machine_error() {
    let dir = workspace();
    let output = ringo(&dir).args(["-m", "search"]).output().unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "EMPTY_QUERY");
}

#[test]
fn test_search_no_results() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "Z9999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No iPhone matched"))
        .stdout(predicate::str::contains("\"Z9999\""));
}

#[test]
fn test_search_missing_catalog_warns() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "A1", "--category", "mac_pro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data loaded for"))
        .stderr(predicate::str::contains("Data not found for"));
}

#[test]
fn test_search_malformed_catalog_is_empty() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "A1", "--category", "ipod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data loaded for"))
        .stderr(predicate::str::contains("could not be loaded"));
}

#[test]
fn test_search_unknown_category() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "A1", "--category", "newton"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("newton"));
}

#[test]
fn test_search_invalid_filter() {
    let dir = workspace();
    ringo(&dir)
        .args(["search", "--filter", "カラー=Red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a filter for iPhone"));
    ringo(&dir)
        .args(["search", "--filter", "CPU"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_filters_command() {
    let dir = workspace();
    let json = json_stdout(ringo(&dir).args(["-m", "filters", "ipad"]));
    let filters = json["data"]["filters"].as_array().unwrap();
    assert_eq!(filters[0]["attribute"], "シリーズ");
    assert_eq!(filters[0]["values"], json!(["iPad Air", "iPad Pro"]));
    assert_eq!(filters[1]["attribute"], "CPU");
    assert_eq!(filters[1]["values"], json!(["A12X Bionic チップ", "M1 チップ"]));
}

#[test]
fn test_filters_tsv_uses_default_category() {
    let dir = workspace();
    ringo(&dir)
        .args(["-O", "tsv", "filters"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("attribute\tvalue\n"))
        .stdout(predicate::str::contains("CPU\tA16 Bionic"));
}

#[test]
fn test_project_config_sets_defaults() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("ringo.toml"),
        "[search]\ndefault_category = \"airpods\"\ndefault_mode = \"name\"\n\n[output]\nformat = \"plain\"\n",
    )
    .unwrap();
    ringo(&dir)
        .args(["search", "max"])
        .assert()
        .success()
        .stdout(predicate::str::diff("AirPods Max: A2096\n"));
}

#[test]
fn test_env_data_dir_override() {
    let dir = workspace();
    let other = tempdir().unwrap();
    write_catalog(
        other.path(),
        "iphone",
        &json!([{"名称": "iPhone 4", "モデル番号": "A1332"}]),
    );
    ringo(&dir)
        .env("RINGO_DATA_DIR", other.path())
        .args(["--plain", "search", "A1332"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone 4"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = workspace();
    ringo(&dir)
        .args(["--config", "nope.toml", "categories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_plain_search_reports_no_match() {
    let dir = workspace();
    ringo(&dir)
        .args(["--plain", "search", "Z9999"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No iPhone matched (\"Z9999\")\n"));
}

#[test]
fn test_plain_search_reports_empty_catalog() {
    let dir = workspace();
    ringo(&dir)
        .args(["--plain", "search", "A1", "--category", "mac_pro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data loaded for Mac Pro"))
        .stdout(predicate::str::contains("No Mac Pro matched (\"A1\")"));
}

#[test]
fn test_config_json_format_reports_errors_as_json() {
    let dir = workspace();
    std::fs::write(dir.path().join("ringo.toml"), "[output]\nformat = \"json\"\n").unwrap();
    let output = ringo(&dir).args(["search", "  "]).output().unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "EMPTY_QUERY");
    assert!(output.stderr.is_empty());
}
