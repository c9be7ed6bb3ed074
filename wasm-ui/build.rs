//! Build script stamping the showcase footer with build metadata.
//!
//! Exposes `BUILD_HOST`, `BUILD_COMMIT` and `BUILD_TIMESTAMP` to the crate.

use std::process::Command;

/// Run a command and return its trimmed stdout, or "unknown".
fn capture(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let stamps = [
        ("BUILD_HOST", capture("hostname", &["-s"])),
        ("BUILD_COMMIT", capture("git", &["rev-parse", "--short", "HEAD"])),
        ("BUILD_TIMESTAMP", capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])),
    ];
    for (key, value) in stamps {
        println!("cargo:rustc-env={key}={value}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
