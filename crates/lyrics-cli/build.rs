use chrono::Local;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let commit = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());

    // `git diff --quiet` exits non-zero when tracked files differ from HEAD
    let dirty = git(&["diff", "--quiet", "HEAD"]).is_none() && commit != "unknown";

    let build_hash = if dirty {
        format!("{commit}-dirty-{}", Local::now().format("%Y%m%d-%H%M%S"))
    } else {
        commit
    };
    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // Workspace root holds .git
    for file in ["HEAD", "index"] {
        println!("cargo:rerun-if-changed=../../.git/{file}");
    }
}
