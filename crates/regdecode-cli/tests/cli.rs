use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("regdecode"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_spec() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("registers_big")
        .join("input.json")
}

#[test]
fn help_covers_payload_decode() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn version_reports_build_stamp() {
    cmd().arg("--version").assert().success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn missing_input_file_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.json");
    let report = temp.path().join("report.json");

    cmd()
        .arg("payload")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("input file not found").and(contains("hint:")));
}

#[test]
fn decodes_spec_file_to_stdout() {
    let output = cmd()
        .arg("payload")
        .arg("decode")
        .arg(sample_spec())
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("report json");
    assert_eq!(report["report_version"], 1);
    assert_eq!(report["input"]["source"], "registers");
    assert_eq!(report["fields"][0]["value"], 258);
    assert_eq!(report["fields"][1]["value"], 772);
    assert_eq!(report["trailing_bytes"], 0);
}

#[test]
fn decodes_inline_registers() {
    let output = cmd()
        .arg("payload")
        .arg("decode")
        .arg("--registers")
        .arg("0x0102,772")
        .arg("--layout")
        .arg("16bit_uint,16bit_uint")
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("report json");
    assert_eq!(report["byte_order"], "big");
    assert_eq!(report["fields"][0]["value"], 258);
    assert_eq!(report["fields"][1]["value"], 772);
}

#[test]
fn decodes_inline_hex_little_endian() {
    let output = cmd()
        .arg("payload")
        .arg("decode")
        .arg("--hex")
        .arg("feff")
        .arg("--layout")
        .arg("16bit_int")
        .arg("--byte-order")
        .arg("little")
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("report json");
    assert_eq!(report["fields"][0]["value"], -2);
}

#[test]
fn writes_report_file() {
    let temp = TempDir::new().expect("tempdir");
    let report_path = temp.path().join("report.json");

    cmd()
        .arg("payload")
        .arg("decode")
        .arg(sample_spec())
        .arg("-o")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(contains("OK: report written ->"));

    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&text).expect("report json");
    assert_eq!(report["fields"][0]["kind"], "16bit_uint");
}

#[test]
fn strict_fails_on_trailing_bytes() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg("--hex")
        .arg("010203")
        .arg("--layout")
        .arg("16bit_uint")
        .arg("--strict")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("trailing bytes left undecoded"));
}

#[test]
fn unknown_layout_name_is_reported() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg("--hex")
        .arg("01")
        .arg("--layout")
        .arg("bogus")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unknown value kind"));
}

#[test]
fn spec_file_conflicts_with_inline_flags() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg(sample_spec())
        .arg("--hex")
        .arg("01")
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("cannot combine"));
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg(sample_spec())
        .arg("--stdout")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure();
}

#[test]
fn list_fields_prints_summary_to_stderr() {
    cmd()
        .arg("payload")
        .arg("decode")
        .arg(sample_spec())
        .arg("--stdout")
        .arg("--list-fields")
        .assert()
        .success()
        .stderr(contains("Decoded fields:").and(contains("0 16bit_uint = 258")));
}
