use std::path::Path;
use std::process::Command;

/// The crate version, followed by the git revision when built from a checkout.
fn describe_version() -> String {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let revision = Command::new("git")
        .args(["describe", "--always", "--dirty=+dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default();
    if revision.is_empty() {
        version
    } else {
        format!("{version} ({revision})")
    }
}

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("missing OUT_DIR");
    let path = Path::new(&out_dir).join("version.txt");
    if let Err(e) = std::fs::write(&path, describe_version()) {
        panic!("Failed to write the version file at {}: {}", path.display(), e);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
