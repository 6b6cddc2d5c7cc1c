use std::process::Command;

/// Runs git and returns its trimmed stdout, or `None` outside a checkout.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let commit_date =
        git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d"]).unwrap_or_default();

    // A release build sits exactly on the version tag with a clean tree.
    let version = env!("CARGO_PKG_VERSION");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| {
            tags.lines()
                .any(|tag| tag == version || tag.strip_prefix('v') == Some(version))
        })
        .unwrap_or(false);
    let clean = git(&["status", "--porcelain"]).is_some_and(|s| s.is_empty());

    println!("cargo:rustc-env=POCKETPAL_GIT_HASH={}", hash);
    println!("cargo:rustc-env=POCKETPAL_COMMIT_DATE={}", commit_date);
    println!("cargo:rustc-env=POCKETPAL_IS_RELEASE={}", tagged && clean);
}
