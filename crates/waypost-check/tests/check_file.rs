//! Tests for checking route files on disk.

use std::io::Write;

use tempfile::NamedTempFile;
use waypost::{Method, ParamValue};
use waypost_check::{CheckError, check_file};

fn write_routes(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn all_routes_valid() {
    let file = write_routes(
        r#"[
            {"name": "home", "uri_pattern": "/", "method": "get",
             "controller": "HomeController", "action": "index"},
            {"name": "create_post", "uri_pattern": "/posts", "method": "post",
             "controller": "PostController", "action": "create",
             "params": {"format": "json"}}
        ]"#,
    );

    let report = check_file(file.path()).unwrap();
    assert!(report.is_ok());
    assert_eq!(report.routes.len(), 2);
    assert_eq!(report.routes[1].method(), Method::Post);
    assert!(report.duplicate_names().is_empty());
}

#[test]
fn invalid_entries_are_collected() {
    let file = write_routes(
        r#"[
            {"name": " ", "uri_pattern": "/", "method": "get",
             "controller": "C", "action": "a"},
            {"name": "ok", "uri_pattern": "/ok", "method": "any",
             "controller": "C", "action": "a"},
            {"name": "bad", "uri_pattern": "/x", "method": "patch",
             "controller": "C", "action": "a"},
            {"uri_pattern": "/nameless", "method": "get",
             "controller": "C", "action": "a"}
        ]"#,
    );

    let report = check_file(file.path()).unwrap();
    assert!(!report.is_ok());
    assert_eq!(report.routes.len(), 1);
    assert_eq!(report.routes[0].name(), "ok");

    let indexes: Vec<usize> = report.issues.iter().map(|i| i.index).collect();
    assert_eq!(indexes, vec![0, 2, 3]);
    assert!(report.issues[0].message.contains("invalid route name"));
    assert_eq!(report.issues[1].name.as_deref(), Some("bad"));
    assert!(report.issues[1].message.contains("patch"));
    assert_eq!(report.issues[2].name, None);
}

#[test]
fn duplicate_names_are_reported() {
    let file = write_routes(
        r#"[
            {"name": "users", "uri_pattern": "/users", "method": "get",
             "controller": "UserController", "action": "list"},
            {"name": "users", "uri_pattern": "/users", "method": "post",
             "controller": "UserController", "action": "create"},
            {"name": "home", "uri_pattern": "/", "method": "get",
             "controller": "HomeController", "action": "index"}
        ]"#,
    );

    let report = check_file(file.path()).unwrap();
    assert!(report.is_ok());
    assert_eq!(report.duplicate_names(), vec!["users"]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.json");
    let err = check_file(&path).unwrap_err();
    assert!(matches!(err, CheckError::Io { .. }));
    assert!(err.to_string().contains("routes.json"));
}

#[test]
fn malformed_file() {
    let file = write_routes("[{\"name\": ");
    assert!(matches!(
        check_file(file.path()),
        Err(CheckError::Parse(_))
    ));
}

#[test]
fn list_and_map_params_are_accepted() {
    let file = write_routes(
        r#"[
            {"name": "batch", "uri_pattern": "/batch", "method": "post",
             "controller": "BatchController", "action": "run",
             "params": {"ids": [1, 2], "options": {"dry_run": true}}}
        ]"#,
    );

    let report = check_file(file.path()).unwrap();
    assert!(report.is_ok());
    let ids = report.routes[0].param("ids").and_then(ParamValue::as_list);
    assert_eq!(ids, Some(&[ParamValue::Int(1), ParamValue::Int(2)][..]));
}
