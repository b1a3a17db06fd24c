// tests/catalog_tests.rs
//! Service catalog loading tests.

use assert_fs::prelude::*;
use log_scout::catalog::Catalog;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn loads_services_from_json() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    let f = tmp.child("services.json");
    f.write_str(
        r#"{
            "nginx": {
                "logs_file": ["/var/log/nginx/*.log"],
                "collections": ["nginx-logs"]
            },
            "sshd": {
                "logs_file": ["/var/log/auth.log"],
                "collections": ["sshd-logs"]
            }
        }"#,
    )?;

    let catalog = Catalog::load(f.path())?;
    assert_eq!(catalog.len(), 2);

    let names: Vec<_> = catalog.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["nginx", "sshd"]);

    let (_, nginx) = catalog.iter().next().unwrap();
    assert_eq!(nginx.logs_file, vec!["/var/log/nginx/*.log"]);
    assert_eq!(nginx.collections, vec!["nginx-logs"]);

    tmp.close()?;
    Ok(())
}

#[test]
fn loads_empty_catalog() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    let f = tmp.child("services.json");
    f.write_str("{}")?;

    let catalog = Catalog::load(f.path())?;
    assert!(catalog.is_empty());

    tmp.close()?;
    Ok(())
}

#[test]
fn missing_fields_default_to_empty() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    let f = tmp.child("services.json");
    f.write_str(r#"{"mysql": {}}"#)?;

    let catalog = Catalog::load(f.path())?;
    let (_, mysql) = catalog.iter().next().unwrap();
    assert!(mysql.logs_file.is_empty());
    assert!(mysql.collections.is_empty());

    tmp.close()?;
    Ok(())
}

#[test]
fn unreadable_catalog_errors() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let err = Catalog::load(&tmp.path().join("no-such.json")).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("cannot read service catalog"), "got: {msg}");
}

#[test]
fn malformed_catalog_errors() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let f = tmp.child("services.json");
    f.write_str("{not json").unwrap();
    let err = Catalog::load(f.path()).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("malformed service catalog"), "got: {msg}");
}
