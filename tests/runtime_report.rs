use chrono::{DateTime, Local, TimeZone};
use runtime_info::{RuntimeDetails, runtime_descriptor, write_runtime_details};

fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2021, 7, 1, 8, 30, 0).single().unwrap()
}

fn render(script: &str, version: &str, script_path: &str) -> String {
    let details = RuntimeDetails::at(script, version, script_path, fixed_time());
    let mut buf = Vec::new();
    write_runtime_details(&mut buf, &details).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_descriptor_has_version_and_platform() {
    let descriptor = runtime_descriptor();
    assert!(!descriptor.is_empty());
    let (version, platform) = descriptor.split_once(" (").expect("delimiter between version and platform");
    assert!(!version.is_empty());
    assert!(platform.ends_with(')'));
    assert!(platform.contains(std::env::consts::ARCH));
}

#[test]
fn test_demo_values_layout() {
    let output = render("Script", "1.0", "/path/to/script.py");
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines[0], "Script version 1.0");
    assert_eq!(lines[1], "  Script Path    : /path/to/script.py");
    assert_eq!(lines[2], "  Current Time   : 2021-07-01 08:30:00");
    assert!(lines[3].starts_with("  Rust Version   : "));
    assert_eq!(lines[4], "");
    // Trailing newline after the blank line
    assert_eq!(lines[5], "");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_report_is_idempotent() {
    let first = render("Script", "1.0", "/path/to/script.py");
    let second = render("Script", "1.0", "/path/to/script.py");
    assert_eq!(first, second);
}

#[test]
fn test_unusual_text_inputs() {
    let output = render("", "", "");
    assert!(output.starts_with(" version \n  Script Path    : \n"));

    let output = render("rendu €", "2.0-β", "C:\\chemins\\scène.py");
    assert!(output.starts_with("rendu € version 2.0-β\n"));
    assert!(output.contains("  Script Path    : C:\\chemins\\scène.py\n"));
}
