use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SCHEDULE_CSV, SCHEDULE_TEXT, no_config, temp_path, w2i, write_fixture};

#[test]
fn test_convert_csv_writes_ics() {
    let input = write_fixture("cli_convert_csv", "csv", SCHEDULE_CSV);
    let out = temp_path("cli_convert_csv", "ics");
    let conf = no_config("cli_convert_csv");

    w2i()
        .args(["--config", &conf, "convert", &input, "--out", &out])
        .assert()
        .success()
        .stdout(contains("ICS export completed"))
        .stderr(contains("1 row(s) skipped"));

    let ics = fs::read_to_string(&out).expect("read ics");
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 8);
    assert!(ics.contains("SUMMARY:CSE 100 Final"));
    assert!(ics.contains("SUMMARY:MATH 20C Midterm"));
    assert!(ics.contains("EXDATE:20260119T100000,20260216T100000"));
}

#[test]
fn test_convert_with_json_and_bundle() {
    let input = write_fixture("cli_convert_bundle", "csv", SCHEDULE_CSV);
    let out = temp_path("cli_convert_bundle", "ics");
    let json = temp_path("cli_convert_bundle_preview", "json");
    let bundle = temp_path("cli_convert_bundle_bundle", "json");
    let conf = no_config("cli_convert_bundle");

    w2i()
        .args([
            "--config", &conf, "convert", &input, "--out", &out, "--json", &json, "--bundle",
            &bundle,
        ])
        .assert()
        .success();

    let preview: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).expect("read preview")).unwrap();
    assert_eq!(preview.as_array().map(Vec::len), Some(8));
    assert_eq!(preview[0]["daysOfWeek"], serde_json::json!([1]));

    let bundle: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&bundle).expect("read bundle")).unwrap();
    assert_eq!(bundle["ok"], serde_json::json!(true));
    assert_eq!(
        bundle["filename"],
        serde_json::json!("cli_convert_bundle_webreg2ics.ics")
    );
    assert!(bundle["ics"].as_str().unwrap().contains("BEGIN:VCALENDAR"));
    assert_eq!(bundle["events"].as_array().map(Vec::len), Some(8));
}

#[test]
fn test_convert_refuses_overwrite_without_force() {
    let input = write_fixture("cli_convert_overwrite", "csv", SCHEDULE_CSV);
    let out = write_fixture("cli_convert_overwrite_out", "ics", "keep me");
    let conf = no_config("cli_convert_overwrite");

    // answer "n" at the prompt
    w2i()
        .args(["--config", &conf, "convert", &input, "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    w2i()
        .args(["--config", &conf, "convert", &input, "--out", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("BEGIN:VCALENDAR"));
}

#[test]
fn test_convert_empty_document_fails() {
    let input = write_fixture("cli_convert_empty", "csv", "Subject Course,Type,Days,Time,BLDG,Room\n");
    let out = temp_path("cli_convert_empty", "ics");
    let conf = no_config("cli_convert_empty");

    w2i()
        .args(["--config", &conf, "convert", &input, "--out", &out])
        .assert()
        .failure()
        .stderr(contains("No schedule rows found"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_convert_ocr_text() {
    let input = write_fixture("cli_convert_text", "txt", SCHEDULE_TEXT);
    let out = temp_path("cli_convert_text", "ics");
    let conf = no_config("cli_convert_text");

    w2i()
        .args(["--config", &conf, "convert", &input, "--out", &out])
        .assert()
        .success();

    let ics = fs::read_to_string(&out).unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 6);
    assert!(ics.contains("SUMMARY:MATH 20C DI"));
    assert!(ics.contains("DTSTART:20260314T113000"));
}

#[test]
fn test_preview_prints_json() {
    let input = write_fixture("cli_preview", "csv", SCHEDULE_CSV);
    let conf = no_config("cli_preview");

    w2i()
        .args(["--config", &conf, "preview", &input])
        .assert()
        .success()
        .stdout(contains("\"daysOfWeek\"").and(contains("\"startRecur\": \"2026-01-05\"")))
        .stdout(contains("\"location\": \"WLH 2001\""));
}

#[test]
fn test_term_overrides() {
    let input = write_fixture("cli_term_override", "csv", SCHEDULE_CSV);
    let conf = no_config("cli_term_override");

    w2i()
        .args([
            "--config",
            &conf,
            "preview",
            &input,
            "--term-start",
            "2026-03-30",
            "--term-end",
            "2026-06-05",
            "--holiday",
            "2026-05-25",
        ])
        .assert()
        .success()
        .stdout(contains("\"startRecur\": \"2026-03-30\""))
        .stdout(contains("\"endRecur\": \"2026-06-05\""));

    w2i()
        .args([
            "--config",
            &conf,
            "preview",
            &input,
            "--term-start",
            "2026-06-05",
            "--term-end",
            "2026-03-30",
        ])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_list_shows_events_and_skips() {
    let input = write_fixture("cli_list", "csv", SCHEDULE_CSV);
    let conf = no_config("cli_list");

    w2i()
        .args(["--config", &conf, "list", &input, "--dates"])
        .assert()
        .success()
        .stdout(contains("CSE 100 LE").and(contains("Final")))
        .stdout(contains("01/19,02/16"))
        .stdout(contains("8 event(s), 0 row(s) ignored, 1 skipped"))
        .stderr(contains("invalid time format"));
}

#[test]
fn test_rows_shows_cleaned_ocr_fields() {
    let input = write_fixture("cli_rows", "txt", SCHEDULE_TEXT);
    let conf = no_config("cli_rows");

    w2i()
        .args(["--config", &conf, "rows", &input])
        .assert()
        .success()
        .stdout(contains("A00").and(contains("MWF")))
        .stdout(contains("(header)"))
        .stdout(contains("5 record(s)"));
}

#[test]
fn test_init_and_config_file() {
    let conf = temp_path("cli_init", "conf");

    w2i()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("uid_domain: webreg"));
    assert!(content.contains("2026-01-05"));

    // second init without --force refuses
    w2i()
        .args(["--config", &conf, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    w2i()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("meeting_types"));
}

#[test]
fn test_custom_config_changes_uid_domain_and_holidays() {
    let conf = write_fixture(
        "cli_custom_conf",
        "conf",
        "term:\n  start: 2026-01-05\n  end: 2026-03-13\n  holidays: []\nuid_domain: example.edu\n",
    );
    let input = write_fixture("cli_custom_conf_input", "csv", SCHEDULE_CSV);
    let out = temp_path("cli_custom_conf", "ics");

    w2i()
        .args(["--config", &conf, "convert", &input, "--out", &out])
        .assert()
        .success();

    let ics = fs::read_to_string(&out).unwrap();
    assert!(ics.contains("@example.edu"));
    assert!(!ics.contains("EXDATE"));
}

#[test]
fn test_broken_config_is_reported() {
    let conf = write_fixture("cli_broken_conf", "conf", "term: [not, a, term\n");
    let input = write_fixture("cli_broken_conf_input", "csv", SCHEDULE_CSV);

    w2i()
        .args(["--config", &conf, "preview", &input])
        .assert()
        .failure()
        .stderr(contains("YAML error"));
}

#[test]
fn test_rows_shows_normalized_type_codes() {
    let input = write_fixture(
        "cli_rows_json",
        "json",
        r#"[{"subjectCourse": "CSE 100", "type": "le", "days": "MWF", "time": "10:00a-10:50a"}]"#,
    );
    let conf = no_config("cli_rows_json");

    w2i()
        .args(["--config", &conf, "rows", &input])
        .assert()
        .success()
        .stdout(contains(" LE ").and(contains(" le ").not()))
        .stdout(contains("1 record(s)"));
}
