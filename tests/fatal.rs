use std::process::Command;

use fasthash::sample::SAMPLE;
use fasthash::{basic, djb2};

// Set in the re-executed child so the failing check actually runs there.
const CHILD_ENV: &str = "FASTHASH_FAILING_CHECK_CHILD";

fn mismatched_twins(data: &[u8]) {
    fasthash::check!(basic(data) == djb2(data));
}

#[test]
fn failing_check_aborts_with_one_line() {
    if std::env::var_os(CHILD_ENV).is_some() {
        mismatched_twins(SAMPLE.as_bytes());
        unreachable!("check! returned after a failed condition");
    }

    let exe = std::env::current_exe().unwrap();
    let output = Command::new(exe)
        .args(["failing_check_aborts_with_one_line", "--exact", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.code(), None, "terminated by a signal");
        assert_eq!(output.status.signal(), Some(6), "SIGABRT");
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let failures: Vec<_> = stderr
        .lines()
        .filter(|line| line.starts_with("[assert-fail]: "))
        .collect();
    assert_eq!(failures.len(), 1, "{stderr}");
    let line = failures[0];
    assert!(line.starts_with("[assert-fail]: tests/fatal.rs:"), "{line}");
    assert!(
        line.ends_with(" mismatched_twins(): basic(data) == djb2(data)"),
        "{line}"
    );
}

#[test]
fn passing_check_does_not_abort() {
    fasthash::check!(basic(SAMPLE.as_bytes()) == fasthash::basic_simd(SAMPLE.as_bytes()));
}
