use relpack_core::AppManifest;

use super::*;

fn manifest(raw: &str) -> AppManifest {
    AppManifest::from_toml_str(raw).expect("manifest must parse")
}

#[test]
fn formats_order_line_as_name_and_version() {
    let app = manifest(
        r#"
name = "kernel"
version = "3.2.1"
"#,
    );
    assert_eq!(format_order_line(&app), "kernel 3.2.1");
}

#[test]
fn accepts_release_with_all_dependencies_present() {
    let apps = vec![
        manifest(
            r#"
name = "app1"
version = "1.0.0"
applications = ["app2"]
libraries = ["kernel"]
"#,
        ),
        manifest(
            r#"
name = "app2"
version = "1.0.0"
"#,
        ),
        manifest(
            r#"
name = "kernel"
version = "1.0.0"
"#,
        ),
    ];

    check_dependencies(&apps).expect("complete release must pass");
}

#[test]
fn rejects_release_with_missing_dependency_manifest() {
    let apps = vec![manifest(
        r#"
name = "app1"
version = "1.0.0"
applications = ["app2"]
"#,
    )];

    let err = check_dependencies(&apps).expect_err("missing manifest must be reported");
    assert!(err.to_string().contains("no manifest for it was given"));
    assert!(err.to_string().contains("app2"));
}

#[test]
fn rejects_empty_path_list() {
    let err = load_manifests(&[]).expect_err("empty path list must be rejected");
    assert!(err.to_string().contains("no manifest paths given"));
}
