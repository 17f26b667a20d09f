//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gramdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gramdrill").unwrap()
}

fn write_responses(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("responses.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn show_builtin_fill_blank() {
    gramdrill()
        .arg("show")
        .arg("--kind")
        .arg("fill-blank")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fill in the Blanks"))
        .stdout(predicate::str::contains("4 questions"))
        .stdout(predicate::str::contains("She ___ to the store"));
}

#[test]
fn show_requires_kind_or_bank() {
    gramdrill()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("one of --kind or --bank"));
}

#[test]
fn show_rejects_kind_and_bank_together() {
    gramdrill()
        .arg("show")
        .arg("--kind")
        .arg("fill-blank")
        .arg("--bank")
        .arg("../../banks/irregular-verbs.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn show_unknown_kind_fails() {
    gramdrill()
        .arg("show")
        .arg("--kind")
        .arg("essay")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid exercise kind"));
}

#[test]
fn grade_perfect_multiple_choice() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(&dir, "[1, 2, 2, 2]");

    gramdrill()
        .arg("grade")
        .arg("--kind")
        .arg("multiple-choice")
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 4/4 (100%)"))
        .stdout(predicate::str::contains("Excellent work!"));
}

#[test]
fn grade_partial_responses_count_unanswered_as_incorrect() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(&dir, "[1]");

    gramdrill()
        .arg("grade")
        .arg("--kind")
        .arg("multiple-choice")
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1/4 (25%)"))
        .stdout(predicate::str::contains("Review the topics and try again!"));
}

#[test]
fn grade_fill_blank_normalizes_input() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(&dir, r#"[" Goes ", "HAVE", "was", "were"]"#);

    gramdrill()
        .arg("grade")
        .arg("--kind")
        .arg("fill-blank")
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2/4 (50%)"))
        .stdout(predicate::str::contains("Keep practicing!"))
        .stdout(predicate::str::contains("Correct: were"));
}

#[test]
fn grade_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(&dir, "[null, null, null, null]");
    let output = dir.path().join("out");

    gramdrill()
        .arg("grade")
        .arg("--kind")
        .arg("correction")
        .arg("--responses")
        .arg(&responses)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("json,html")
        .assert()
        .success()
        .stderr(predicate::str::contains("Results saved to"))
        .stderr(predicate::str::contains("HTML report"));

    let entries: Vec<_> = std::fs::read_dir(&output)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert!(entries.iter().any(|p| p.extension().unwrap() == "json"));
    assert!(entries.iter().any(|p| p.extension().unwrap() == "html"));
}

#[test]
fn grade_custom_bank() {
    let dir = TempDir::new().unwrap();
    let responses = write_responses(&dir, r#"["lost", "rises"]"#);

    gramdrill()
        .arg("grade")
        .arg("--bank")
        .arg("../../banks/irregular-verbs.toml")
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2/5 (40%)"));
}

#[test]
fn grade_empty_bank_fails() {
    let dir = TempDir::new().unwrap();
    let bank_path = dir.path().join("empty.toml");
    std::fs::write(
        &bank_path,
        "[bank]\nid = \"empty\"\nname = \"Empty\"\nkind = \"fill-blank\"\n",
    )
    .unwrap();
    let responses = write_responses(&dir, "[]");

    gramdrill()
        .arg("grade")
        .arg("--bank")
        .arg(&bank_path)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no questions"));
}

#[test]
fn validate_bank_file() {
    gramdrill()
        .arg("validate")
        .arg("--bank")
        .arg("../../banks/irregular-verbs.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 questions"))
        .stdout(predicate::str::contains("All banks valid"));
}

#[test]
fn validate_directory() {
    gramdrill()
        .arg("validate")
        .arg("--bank")
        .arg("../../banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Irregular Verbs"))
        .stdout(predicate::str::contains("Word Classes"))
        .stdout(predicate::str::contains("Common Mistakes"));
}

#[test]
fn validate_nonexistent_file() {
    gramdrill()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let bank_path = dir.path().join("warn.toml");
    std::fs::write(
        &bank_path,
        r#"
[bank]
id = "warn"
name = "Warn"
kind = "fill-blank"

[[items]]
sentence = "No marker in this sentence."
answer = "goes"
"#,
    )
    .unwrap();

    gramdrill()
        .arg("validate")
        .arg("--bank")
        .arg(&bank_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("blank markers"));
}

#[test]
fn topics_lists_all() {
    gramdrill()
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("parts-of-speech"))
        .stdout(predicate::str::contains("tenses"))
        .stdout(predicate::str::contains("punctuation"));
}

#[test]
fn topics_shows_one() {
    gramdrill()
        .arg("topics")
        .arg("tenses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verb Tenses"))
        .stdout(predicate::str::contains("Present Perfect").or(predicate::str::contains("I have worked")));
}

#[test]
fn topics_unknown_fails_with_available_list() {
    gramdrill()
        .arg("topics")
        .arg("morphology")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown topic"))
        .stderr(predicate::str::contains("parts-of-speech"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    gramdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created banks/example.toml"))
        .stdout(predicate::str::contains("Created responses.json"));

    assert!(dir.path().join("banks/example.toml").exists());
    assert!(dir.path().join("responses.json").exists());

    // Second run skips existing files
    gramdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}
