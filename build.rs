use std::process::Command;

fn main() {
    // Tell Cargo to rerun this if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-changed=.git/refs/tags/");

    let git_hash = git(&["rev-parse", "--short", "HEAD"])
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string());

    // On a release tag (v*)
    let is_release = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    let is_dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    let dirty_suffix = if is_dirty { "-dirty" } else { "" };

    println!("cargo:rustc-env=REVISE_GIT_HASH={git_hash}{dirty_suffix}");
    println!("cargo:rustc-env=REVISE_IS_RELEASE={is_release}");
}

/// Run git, returning stdout on success.
fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
}
