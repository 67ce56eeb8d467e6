//! Integration tests for `wpdock validate`

mod common;

use common::TestSite;

#[test]
fn validate_prints_enriched_config() {
    let site = TestSite::new();
    site.dir("plugins/acme")
        .dir("themes/flat")
        .file("db/seed.sql", "-- seed")
        .file(
            "wpdock.json",
            r#"{
  "instanceName": "shop",
  "containerPort": 8080,
  "localPlugins": ["plugins/acme"],
  "localThemes": ["themes/flat"],
  "downloadPlugins": ["akismet"],
  "database": { "mysqlDumpfile": "db/seed.sql", "dbPrefix": "shop_" }
}"#,
        );

    let result = site.run(&["validate"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    let root = site.root.path().display().to_string();
    assert_eq!(
        value["volumes"],
        serde_json::json!([
            format!("-v {root}/plugins/acme:/app/wp-content/plugins/acme"),
            format!("-v {root}/themes/flat:/app/wp-content/themes/flat"),
            format!("-v {root}/db/seed.sql:/data/db.sql"),
        ])
    );
    assert_eq!(
        value["envvars"],
        serde_json::json!({ "DB_NAME": "shop", "DB_PREFIX": "shop_" })
    );
    assert_eq!(value["alreadyInstalled"], serde_json::json!(["akismet", "acme"]));
    assert_eq!(value["containerPort"], "8080");
}

#[test]
fn validate_missing_instance_name_exits_1_with_one_line() {
    let site = TestSite::new();
    site.file("wpdock.json", r#"{ "containerPort": 8080 }"#);

    let result = site.run(&["validate"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty(), "no partial output: {}", result.stdout);
    assert_eq!(
        result.stderr,
        "[ERROR] instanceName is not defined in your config.\n"
    );
}

#[test]
fn validate_failure_under_github_actions_is_one_annotation() {
    let site = TestSite::new();
    site.file("wpdock.json", r#"{ "containerPort": 8080 }"#);

    let result = site.run_with_env(
        site.root.path(),
        &["validate"],
        &[("GITHUB_ACTIONS", "true")],
    );
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty(), "no partial output: {}", result.stdout);
    assert_eq!(result.stderr.lines().count(), 1, "{}", result.stderr);
    assert!(result.stderr.starts_with("::error file="), "{}", result.stderr);
    assert!(
        result
            .stderr
            .ends_with("::instanceName is not defined in your config.\n"),
        "{}",
        result.stderr
    );
}

#[test]
fn validate_missing_local_plugin_reports_absolute_path() {
    let site = TestSite::new();
    site.file(
        "wpdock.yaml",
        "instanceName: shop\ncontainerPort: 80\nlocalPlugins:\n  - ./missing\n",
    );

    let result = site.run(&["validate"]);
    assert_eq!(result.exit_code, 1);
    let expected = format!(
        "Local plugin at '{}' does not exist.",
        site.path("missing").display()
    );
    assert!(result.stderr.contains(&expected), "stderr: {}", result.stderr);
}

#[test]
fn validate_wrong_type_before_filesystem() {
    let site = TestSite::new();
    site.file(
        "wpdock.toml",
        "instanceName = \"shop\"\ncontainerPort = 80\nlocalPlugins = \"acme\"\nlocalThemes = [\"missing\"]\n",
    );

    let result = site.run(&["validate"]);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("localPlugins is defined in your config but it is not"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn validate_ftp_error_names_one_based_index() {
    let site = TestSite::new();
    site.file(
        "wpdock.json",
        r#"{
  "instanceName": "shop",
  "containerPort": 80,
  "ftp": [
    { "host": "a", "user": "b", "password": "c" },
    { "host": "a", "password": "c" }
  ]
}"#,
    );

    let result = site.run(&["validate"]);
    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("The user key for ftp config 2 is not defined."),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn validate_config_flag_resolves_relative_to_config_dir() {
    let site = TestSite::new();
    site.dir("site/plugins/acme").file(
        "site/wpdock.json",
        r#"{ "instanceName": "shop", "containerPort": 80, "localPlugins": ["plugins/acme"] }"#,
    );

    let result = site.run(&["validate", "--config", "site/wpdock.json"]);
    assert!(result.success, "stderr: {}", result.stderr);
    let expected = format!(
        "-v {}:/app/wp-content/plugins/acme",
        site.path("site/plugins/acme").display()
    );
    assert!(result.stdout.contains(&expected), "stdout: {}", result.stdout);
}

#[test]
fn validate_summary_format() {
    let site = TestSite::new();
    site.file(
        "wpdock.json",
        r#"{ "instanceName": "shop", "containerPort": 80, "database": { "dbName": "custom" } }"#,
    );

    let result = site.run(&["validate", "--format", "summary"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("DB_NAME=custom"));
    assert!(result.stdout.contains("DB_PREFIX=wp_"));
}

#[test]
fn validate_yaml_output_round_trips_through_validate() {
    let site = TestSite::new();
    site.dir("acme").file(
        "wpdock.json",
        r#"{ "instanceName": "shop", "containerPort": 80, "localPlugins": ["acme"] }"#,
    );

    let first = site.run(&["validate", "--format", "yaml"]);
    assert!(first.success, "stderr: {}", first.stderr);
    site.file("enriched.yaml", &first.stdout);

    let second = site.run(&["--strict", "validate", "--config", "enriched.yaml", "--format", "yaml"]);
    assert!(second.success, "stderr: {}", second.stderr);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn validate_unknown_key_warns_but_succeeds() {
    let site = TestSite::new();
    site.file(
        "wpdock.json",
        r#"{ "instanceName": "shop", "containerPort": 80, "localTheme": [] }"#,
    );

    let result = site.run(&["validate"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("unknown key 'localTheme'"));
    assert!(result.stderr.contains("did you mean 'localThemes'?"));
}

#[test]
fn validate_strict_rejects_unknown_key() {
    let site = TestSite::new();
    site.file(
        "wpdock.json",
        r#"{ "instanceName": "shop", "containerPort": 80, "localTheme": [] }"#,
    );

    let result = site.run(&["--strict", "validate"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("unknown keys in"), "stderr: {}", result.stderr);
}

#[test]
fn validate_without_config_file() {
    let site = TestSite::new();
    let result = site.run(&["validate"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no config file found"), "stderr: {}", result.stderr);
}

#[test]
fn validate_json_mode_emits_events() {
    let site = TestSite::new();
    site.file("wpdock.json", r#"{ "instanceName": "shop" }"#);

    let result = site.run(&["--json", "validate"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.is_empty(), "stderr: {}", result.stderr);

    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "error");
    assert_eq!(event["code"], "missing_required_field");
    assert_eq!(event["field"], "containerPort");
}
