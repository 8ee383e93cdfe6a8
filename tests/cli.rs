use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn symlang() -> Command {
    let mut cmd = Command::cargo_bin("symlang").unwrap();
    // Keep the user's global settings out of the run.
    cmd.env("HOME", "/nonexistent/symlang-home");
    cmd
}

#[test]
fn test_missing_command_is_usage_error() {
    symlang()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: symlang"));
}

#[test]
fn test_unknown_language_is_usage_error() {
    symlang()
        .args(["--lang", "cobol", "demangle", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("UNKNOWN_LANGUAGE"));
}

#[test]
fn test_qualify() {
    symlang()
        .args(["--lang", "c++", "qualify", "a", "b", "c"])
        .assert()
        .success()
        .stdout("a::b::c\n");
}

#[test]
fn test_demangle_from_stdin_with_fallback() {
    symlang()
        .args(["--lang", "java", "demangle"])
        .write_stdin("com.example.Foo\n")
        .assert()
        .success()
        .stdout("com.example.Foo\n");
}

#[test]
fn test_languages_json() {
    symlang()
        .args(["--json", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"name":"assembler","has_functions":false,"separator":null}"#));
}

#[test]
fn test_project_settings_apply() {
    let project = tempdir().unwrap();
    std::fs::create_dir(project.path().join(".symlang")).unwrap();
    std::fs::write(
        project.path().join(".symlang/settings.json"),
        r#"{"output.fallbackToMangled": false}"#,
    )
    .unwrap();

    symlang()
        .current_dir(project.path())
        .args(["--lang", "java", "demangle", "com.example.Foo"])
        .assert()
        .success()
        .stdout("\n");
}

#[cfg(all(feature = "itanium", not(feature = "rust-demangle")))]
#[test]
fn test_rust_legacy_demangle() {
    symlang()
        .args(["demangle", "_ZN3foo11bar$u20$baz17h0123456789abcdefE"])
        .assert()
        .success()
        .stdout("foo::bar baz\n");
}

#[cfg(all(feature = "itanium", not(feature = "rust-demangle")))]
#[test]
fn test_underscore_flag_overrides_default() {
    let mangled = "_ZN4core3ptr13drop_in_place17h0123456789abcdefE";
    symlang()
        .args(["demangle", mangled])
        .assert()
        .success()
        .stdout(format!("{}\n", mangled));
    symlang()
        .args(["--underscore", "drop", "demangle", mangled])
        .assert()
        .success()
        .stdout("core::ptr::dropinplace\n");
}
