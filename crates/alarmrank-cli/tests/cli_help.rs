use assert_cmd::Command;

#[test]
fn help_lists_flags() {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("alarmrank"));
    let output = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--input", "--config", "--format", "--top", "--output"] {
        assert!(text.contains(flag), "missing flag {flag}");
    }
}
