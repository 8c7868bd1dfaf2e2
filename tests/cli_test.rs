//! End-to-end CLI tests against a mock package index.
// The cargo_bin function is marked deprecated in favor of the cargo_bin!
// macro, but both work correctly. Suppressing until assert_cmd stabilizes
// the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn py3ready() -> Command {
    Command::new(cargo_bin("py3ready"))
}

fn mock_project(server: &MockServer, name: &str, compatible: bool, requires_dist: &[&str]) {
    let classifiers = if compatible {
        vec!["Programming Language :: Python :: 3"]
    } else {
        vec!["Programming Language :: Python :: 2.7"]
    };
    server.mock(|when, then| {
        when.method(GET).path(format!("/pypi/{name}/json"));
        then.status(200).json_body(json!({
            "info": {
                "classifiers": classifiers,
                "requires_dist": requires_dist,
            }
        }));
    });
}

#[test]
fn cli_shows_help() {
    py3ready()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blocking your transition"));
}

#[test]
fn cli_shows_version() {
    py3ready()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_without_seeds_is_a_usage_error() {
    py3ready()
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Missing 'requirements', 'metadata', or 'projects'",
        ));
}

#[test]
fn ready_project_exits_zero() {
    let server = MockServer::start();
    mock_project(&server, "six", true, &[]);

    py3ready()
        .args(["--projects", "six", "--index-url", &server.url("/pypi")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You have 0 projects blocking you from using Python 3!",
        ));
}

#[test]
fn blocked_project_exits_one_and_names_the_chain() {
    let server = MockServer::start();
    mock_project(&server, "app", true, &["oldlib"]);
    mock_project(&server, "oldlib", false, &[]);

    py3ready()
        .args(["--projects", "app", "--index-url", &server.url("/pypi")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "You need 1 project to transition to Python 3.",
        ))
        .stdout(predicate::str::contains("oldlib (which is blocking app)"));
}

#[test]
fn requirements_file_seeds_the_check() {
    let server = MockServer::start();
    mock_project(&server, "fooproject", false, &[]);

    let temp = TempDir::new().unwrap();
    let reqs = temp.path().join("requirements.txt");
    fs::write(&reqs, "# pinned for the demo\nFooProject >= 1.2\n").unwrap();

    py3ready()
        .args(["--requirements"])
        .arg(&reqs)
        .args(["--index-url", &server.url("/pypi")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("fooproject"));
}

#[test]
fn metadata_file_seeds_the_check() {
    let server = MockServer::start();
    mock_project(&server, "bar", true, &[]);

    let temp = TempDir::new().unwrap();
    let meta = temp.path().join("PKG-INFO");
    fs::write(&meta, "Metadata-Version: 1.2\nName: demo\nRequires-Dist: bar\n").unwrap();

    py3ready()
        .args(["--metadata"])
        .arg(&meta)
        .args(["--index-url", &server.url("/pypi")])
        .assert()
        .success();
}

#[test]
fn missing_requirements_file_fails_with_its_path() {
    py3ready()
        .args(["--requirements", "/definitely/not/here.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/definitely/not/here.txt"));
}

#[test]
fn unreachable_index_reports_the_failing_project() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/fragile/json");
        then.status(500);
    });

    py3ready()
        .args(["--projects", "fragile", "--index-url", &server.url("/pypi")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fragile"));
}

#[test]
fn index_url_can_come_from_the_environment() {
    let server = MockServer::start();
    mock_project(&server, "six", true, &[]);

    py3ready()
        .env("PY3READY_INDEX_URL", server.url("/pypi"))
        .args(["--projects", "six"])
        .assert()
        .success();
}

#[test]
fn shared_blockers_are_merged_in_the_output() {
    let server = MockServer::start();
    mock_project(&server, "web", true, &["legacy"]);
    mock_project(&server, "worker", true, &["legacy"]);
    mock_project(&server, "legacy", false, &[]);

    py3ready()
        .args(["--projects", "web,worker", "--index-url", &server.url("/pypi")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "legacy (which is blocking web, which is blocking worker)",
        ));
}
