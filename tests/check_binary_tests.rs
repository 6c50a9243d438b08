//! Exit-code tests for the greeter-check binary

use std::process::Command;

use greeter::Salutation;

fn greeter_check() -> Command {
    Command::new(env!("CARGO_BIN_EXE_greeter-check"))
}

#[test]
fn test_default_check_passes() {
    let status = greeter_check().status().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_native_check_passes() {
    let status = greeter_check().arg("--native").status().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_usage_errors_exit_with_fail_code() {
    let cases: [&[&str]; 4] = [
        &["--bogus"],
        &["--name", "Bob"],
        &["--salutation", "hello"],
        &["--log-level", "loud"],
    ];
    for args in cases {
        let status = greeter_check().args(args).status().unwrap();
        assert_eq!(status.code(), Some(1), "args {:?}", args);
    }
}

#[test]
fn test_help_exits_zero() {
    let output = greeter_check().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("greeter-check"));
}

#[test]
fn test_wrong_expectation_fails() {
    let status = greeter_check()
        .args(["--expect", "Hi, Alice!"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_custom_name() {
    let expected = format!("{}Eve!", Salutation::from_build());
    let output = greeter_check()
        .args(["--name", "Eve", "--expect", expected.as_str(), "-v"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains(&format!("PASS: {}", expected)));
}
