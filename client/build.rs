// build.rs
use std::process::Command;

const GIT_COMMIT_HASH_KEY: &str = "DEVICECONNECT_CLIENT_GIT_COMMIT_HASH";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    // outside of a git checkout (e.g. a packaged crate) the commit stays unknown
    let output = match Command::new("git").args(["rev-parse", "HEAD"]).output() {
        Ok(output) if output.status.success() => output,
        _ => return,
    };
    let Ok(commit_hash) = String::from_utf8(output.stdout) else {
        return;
    };
    let commit_hash = commit_hash.trim();
    if commit_hash.is_empty() {
        return;
    }
    println!("cargo:rustc-env={GIT_COMMIT_HASH_KEY}={commit_hash}");
}
