//! End-to-end tests of the command line interface.

mod common;

use assert_cmd::Command;
use common::fixture_path;
use predicates::prelude::*;

fn viewer() -> Command {
    Command::cargo_bin("scripture-viewer").unwrap()
}

#[test]
fn renders_root_view_into_container() {
    viewer()
        .arg("brahmasutram")
        .arg(fixture_path("brahmasutram.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div id=\"app\">"))
        .stdout(predicate::str::contains("chapter-card disabled"))
        .stdout(predicate::str::contains("Coming Soon"));
}

#[test]
fn applies_actions_in_order() {
    viewer()
        .arg("brahmasutram")
        .arg(fixture_path("brahmasutram.json"))
        .args(["--action", "mid:1", "--action", "leaf:1:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brahman is the cause."))
        .stdout(predicate::str::contains("← Back to समन्वयाध्यायः"));
}

#[test]
fn dispatches_region_ids() {
    viewer()
        .arg("upanishad")
        .arg(fixture_path("mundaka.json"))
        .args(["-a", "region:r1", "--regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("द्वितीयमुण्डकम्"))
        .stdout(predicate::str::contains("10 Mantras"))
        .stderr(predicate::str::contains("leaf:2:1"));
}

#[test]
fn back_returns_to_root() {
    viewer()
        .arg("upanishad")
        .arg(fixture_path("mundaka.json"))
        .args(["-a", "leaf:1:1", "-a", "back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 Sections • 22 Mantras"));
}

#[test]
fn writes_output_file_with_custom_links() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gita.html");

    viewer()
        .arg("verse")
        .arg(fixture_path("gita_dhyanam.json"))
        .args(["--container", "verses", "--index", "/gita/"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<div id=\"verses\">"));
    assert!(html.contains("<a href=\"/gita/\">Bhagavad Gita</a>"));
    assert!(html.contains("श्लोक 2"));
}

#[test]
fn load_failure_prints_error_fragment_and_fails() {
    viewer()
        .arg("brahmasutram")
        .arg("/nonexistent/brahmasutram.json")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error loading content. Please check data/brahmasutram.json file.",
        ));
}

#[test]
fn rejects_malformed_actions() {
    viewer()
        .arg("brahmasutram")
        .arg(fixture_path("brahmasutram.json"))
        .args(["--action", "mid:first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid action"));
}

#[test]
fn unbound_region_is_an_error() {
    viewer()
        .arg("brahmasutram")
        .arg(fixture_path("brahmasutram.json"))
        .args(["--action", "region:r99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No region bound to id r99"));
}

#[test]
fn non_brahmasutram_viewers_need_a_source() {
    viewer()
        .arg("verse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("a data source is required"));
}

#[test]
fn log_file_records_load_failures() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("viewer.log");

    viewer()
        .arg("verse")
        .arg(dir.path().join("missing.json"))
        .arg("--log")
        .arg(&log)
        .assert()
        .failure();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Error loading verse data"));
}
