//! Package index client tests against a local mock server.

use httpmock::prelude::*;
use py3ready::oracle::{Oracle, PyPiOracle};
use py3ready::project::ProjectName;
use py3ready::Py3ReadyError;
use serde_json::json;

fn mock_project(server: &MockServer, name: &str, classifiers: &[&str], requires_dist: &[&str]) {
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
fn python3_classifier_reports_compatible() {
    let server = MockServer::start();
    mock_project(
        &server,
        "requests",
        &["Programming Language :: Python :: 3"],
        &["urllib3 (>=1.21.1)", "certifi"],
    );

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let report = oracle.query(&ProjectName::new("requests")).unwrap();

    assert!(report.compatible);
    let deps: Vec<&str> = report.dependencies.iter().map(|d| d.as_str()).collect();
    assert_eq!(deps, vec!["urllib3", "certifi"]);
}

#[test]
fn missing_python3_classifier_reports_incompatible() {
    let server = MockServer::start();
    mock_project(
        &server,
        "antique",
        &["Programming Language :: Python :: 2.7"],
        &[],
    );

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let report = oracle.query(&ProjectName::new("antique")).unwrap();

    assert!(!report.compatible);
    assert!(report.dependencies.is_empty());
}

#[test]
fn extra_gated_dependencies_are_not_followed() {
    let server = MockServer::start();
    mock_project(
        &server,
        "flexible",
        &["Programming Language :: Python :: 3"],
        &["core", "speedup ; extra == 'fast'"],
    );

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let report = oracle.query(&ProjectName::new("flexible")).unwrap();

    let deps: Vec<&str> = report.dependencies.iter().map(|d| d.as_str()).collect();
    assert_eq!(deps, vec!["core"]);
}

#[test]
fn unknown_project_defaults_to_compatible() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/nonexistent/json");
        then.status(404);
    });

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let report = oracle.query(&ProjectName::new("nonexistent")).unwrap();

    assert!(report.compatible);
    assert!(report.dependencies.is_empty());
}

#[test]
fn server_error_is_a_lookup_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/unlucky/json");
        then.status(503);
    });

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let err = oracle.query(&ProjectName::new("unlucky")).unwrap_err();

    match err {
        Py3ReadyError::LookupFailed { project, message } => {
            assert_eq!(project, "unlucky");
            assert!(message.contains("503"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_payload_is_a_lookup_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/garbled/json");
        then.status(200).body("not json at all");
    });

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let err = oracle.query(&ProjectName::new("garbled")).unwrap_err();

    assert!(matches!(err, Py3ReadyError::LookupFailed { .. }));
}

#[test]
fn null_requires_dist_means_no_dependencies() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pypi/minimal/json");
        then.status(200).json_body(json!({
            "info": {
                "classifiers": ["Programming Language :: Python :: 3"],
                "requires_dist": null,
            }
        }));
    });

    let oracle = PyPiOracle::with_base_url(server.url("/pypi"));
    let report = oracle.query(&ProjectName::new("minimal")).unwrap();

    assert!(report.compatible);
    assert!(report.dependencies.is_empty());
}
