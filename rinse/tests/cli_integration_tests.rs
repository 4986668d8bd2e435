// rinse/tests/cli_integration_tests.rs
//! Command-line integration tests for the `rinse` binary.
//!
//! The binary is driven through `assert_cmd`, with input on stdin or in
//! temporary files created by `tempfile`.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn rinse(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("rinse").unwrap();
    cmd.env_remove("RINSE_CONFIG");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn test_check_clean_input() {
    rinse("have a nice day\n", &["--quiet", "check"])
        .success()
        .stdout("clean\n");
}

#[test]
fn test_check_profane_input_exits_with_one() {
    rinse("f u c k you\n", &["--quiet", "check"])
        .code(1)
        .stdout("profane\n");
}

#[test]
fn test_check_with_command_line_lists() {
    let args = ["--quiet", "check", "--no-defaults", "--blacklist", "duck", "--whitelist", "Duck"];
    rinse("Duck is a bird\n", &args).success().stdout("clean\n");
    rinse("DUCK is a bird\n", &args).code(1).stdout("profane\n");
}

#[test]
fn test_check_no_join_flag() {
    let args = ["--quiet", "check", "--no-defaults", "-b", "fuck", "--no-join"];
    rinse("f u c k you\n", &args).success().stdout("clean\n");
}

#[test]
fn test_check_line_buffered() {
    rinse("hello there\nsh1t happens\nbye\n", &["--quiet", "check", "--line-buffered"])
        .code(1)
        .stdout("clean\nprofane\nclean\n");
}

#[test]
fn test_check_json_output() {
    rinse("oh fu(_)ck\n", &["--quiet", "check", "--no-defaults", "-b", "fuck", "--json"])
        .code(1)
        .stdout(predicate::str::contains(r#""token":"fu(_)ck""#))
        .stdout(predicate::str::contains(r#""word":"fuck""#))
        .stdout(predicate::str::contains(r#""whitelisted":false"#));

    rinse("nothing here\n", &["--quiet", "check", "--json"])
        .success()
        .stdout("null\n");
}

#[test]
fn test_check_with_config_file() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    config.write_all(b"blacklist:\n  - frak\nwhitelist:\n  - Frakking\n")?;
    let path = config.path().to_str().unwrap();

    rinse("what the fr@k\n", &["--quiet", "check", "--config", path])
        .code(1)
        .stdout("profane\n");
    rinse("Frakking toasters\n", &["--quiet", "check", "--config", path, "--no-defaults"])
        .success()
        .stdout("clean\n");
    Ok(())
}

#[test]
fn test_missing_config_file_fails() {
    rinse("anything\n", &["--quiet", "check", "--config", "/no/such/profanity.yaml"])
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_errors_exit_with_two_not_profane_status() {
    rinse("", &["--quiet", "check", "--input-file", "/no/such/input.txt"])
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read input file"));
    rinse("", &["--quiet", "obfuscate", "--config", "/no/such/profanity.yaml"])
        .code(2);
}

#[test]
fn test_obfuscate_masks_whole_input() {
    rinse("f4ck off\n", &["--quiet", "obfuscate"])
        .success()
        .stdout("********\n");
}

#[test]
fn test_obfuscate_leaves_clean_input() {
    rinse("have a nice day\n", &["--quiet", "obfuscate"])
        .success()
        .stdout("have a nice day\n");
}

#[test]
fn test_obfuscate_line_buffered_with_custom_mask() {
    rinse("good line\nsh!t line\n", &["--quiet", "obfuscate", "--line-buffered", "--mask", "#"])
        .success()
        .stdout("good line\n#########\n");
}

#[test]
fn test_obfuscate_to_output_file() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all(b"you b1tch\n")?;
    let output = NamedTempFile::new()?;

    rinse(
        "",
        &[
            "--quiet",
            "obfuscate",
            "--input-file",
            input.path().to_str().unwrap(),
            "--output",
            output.path().to_str().unwrap(),
        ],
    )
    .success()
    .stdout("");

    assert_eq!(fs::read_to_string(output.path())?, "*********\n");
    Ok(())
}
