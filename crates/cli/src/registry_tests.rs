#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn exe() -> PathBuf {
    PathBuf::from("/work/builddir/jacktrip")
}

fn write_suite(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn default_executable_is_absolute_under_builddir() {
    let path = default_executable();
    assert!(path.is_absolute());
    assert!(path.ends_with("builddir/jacktrip"));
}

#[test]
fn builtin_version_test() {
    let cases = builtin(&exe());
    assert_eq!(cases.len(), 1);

    let case = &cases[0];
    assert_eq!(case.command, vec!["/work/builddir/jacktrip", "-v"]);
    assert_eq!(case.exit_code, Some(0));
    assert_eq!(
        case.stdout,
        Some(Expectation::Pattern(r"^JackTrip VERSION: 1\.2.*".to_string()))
    );
    assert_eq!(case.stderr, None);
    assert_eq!(case.timeout, Duration::from_secs(1));
}

#[test]
fn parse_toml_suite() {
    let config = SuiteConfig::from_toml(
        r#"
        name = "smoke"

        [[tests]]
        command = ["{exe}", "-v"]
        exit_code = 0
        stdout = '^JackTrip VERSION: 1\.2.*'
        regex = true

        [[tests]]
        command = ["{exe}", "--bogus"]
        exit_code = 1
        stderr = "unknown option"
        timeout = 2.5
        "#,
    )
    .unwrap();
    assert_eq!(config.name, "smoke");

    let cases = config.into_cases(&exe()).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].command, vec!["/work/builddir/jacktrip", "-v"]);
    assert_eq!(cases[0].timeout, Duration::from_secs(1));
    assert!(matches!(cases[0].stdout, Some(Expectation::Pattern(_))));
    assert_eq!(cases[1].exit_code, Some(1));
    assert_eq!(
        cases[1].stderr,
        Some(Expectation::Exact("unknown option".to_string()))
    );
    assert_eq!(cases[1].timeout, Duration::from_millis(2500));
}

#[test]
fn empty_expected_strings_are_unset() {
    let cases = SuiteConfig::from_toml(
        r#"
        [[tests]]
        command = ["true"]
        stdout = ""
        "#,
    )
    .unwrap()
    .into_cases(&exe())
    .unwrap();
    assert!(!cases[0].has_expectations());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SuiteConfig::from_toml(
        r#"
        [[tests]]
        command = ["true"]
        retries = 3
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SuiteError::Toml(_)));
}

#[test]
fn empty_command_is_rejected() {
    let err = SuiteConfig::from_toml("[[tests]]\ncommand = []\n")
        .unwrap()
        .into_cases(&exe())
        .unwrap_err();
    assert!(matches!(err, SuiteError::Validation { index: 0, .. }));
}

#[test]
fn non_positive_timeout_is_rejected() {
    for timeout in ["0", "-1.0", "nan"] {
        let content = format!("[[tests]]\ncommand = [\"true\"]\ntimeout = {}\n", timeout);
        let err = SuiteConfig::from_toml(&content)
            .unwrap()
            .into_cases(&exe())
            .unwrap_err();
        assert!(
            err.to_string().contains("timeout must be positive"),
            "{}: {}",
            timeout,
            err
        );
    }
}

#[test]
fn invalid_pattern_is_rejected_at_load() {
    let err = SuiteConfig::from_toml(
        r#"
        [[tests]]
        command = ["true"]
        stdout = "(unclosed"
        regex = true
        "#,
    )
    .unwrap()
    .into_cases(&exe())
    .unwrap_err();
    assert!(err.to_string().contains("invalid pattern"), "{}", err);
}

#[test]
fn unbalanced_pattern_is_rejected_at_load() {
    let err = SuiteConfig::from_toml(
        r#"
        [[tests]]
        command = ["true"]
        stderr = "a)|(?:b"
        regex = true
        "#,
    )
    .unwrap()
    .into_cases(&exe())
    .unwrap_err();
    assert!(matches!(err, SuiteError::Validation { index: 0, .. }), "{}", err);
}

#[test]
fn missing_exit_code_stays_unset() {
    let cases = SuiteConfig::from_toml("[[tests]]\ncommand = [\"true\"]\nstdout = \"x\"\n")
        .unwrap()
        .into_cases(&exe())
        .unwrap();
    assert_eq!(cases[0].exit_code, None);
}

#[test]
fn load_toml_file() {
    let file = write_suite("[[tests]]\ncommand = [\"{exe}\", \"-h\"]\nexit_code = 0\n", ".toml");
    let cases = load_suite(file.path(), &exe()).unwrap();
    assert_eq!(cases[0].command, vec!["/work/builddir/jacktrip", "-h"]);
}

#[test]
fn load_json_file() {
    let file = write_suite(
        r#"{ "tests": [ { "command": ["{exe}", "-v"], "stdout": "^JackTrip", "regex": true } ] }"#,
        ".json",
    );
    let cases = load_suite(file.path(), &exe()).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(
        cases[0].stdout,
        Some(Expectation::Pattern("^JackTrip".to_string()))
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_suite(Path::new("/nonexistent/suite.toml"), &exe()).unwrap_err();
    assert!(matches!(err, SuiteError::Io(_)));
}

#[test]
fn bundled_jacktrip_suite_matches_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../suites/jacktrip.toml");
    let cases = load_suite(&path, &exe()).unwrap();
    assert_eq!(cases, builtin(&exe()));
}
