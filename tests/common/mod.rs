//! Shared helpers for the binary-level tests

use assert_cmd::Command;

/// The interpreter binary with logging switched off, so stderr only carries
/// diagnostics.
pub fn ish() -> Command {
    let mut cmd = Command::cargo_bin("ish").unwrap();
    cmd.env_remove("ISH_LOG");
    cmd
}

/// Expected stdout for `lines` when none of them print anything.
#[allow(dead_code)]
pub fn framed(lines: &[&str]) -> String {
    let mut out = String::from("% ");
    for line in lines {
        out.push_str(line);
        out.push_str("\n% ");
    }
    out.push('\n');
    out
}
