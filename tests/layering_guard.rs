//! Layering guardrails to keep the registry crate free of tooling dependencies.
//!
//! `easel_core` is linked into the runtime; CLI parsing, JSON output, and subscriber setup belong to the `easel`
//! tooling crate. This test scans `crates/easel_core/Cargo.toml` and fails if any of them appear in `[dependencies]`.

const TOOLING_ONLY: &[&str] = &["clap", "serde_json", "tracing-subscriber", "insta", "proptest"];

#[test]
fn registry_crate_does_not_depend_on_tooling() {
    let manifest = include_str!("../crates/easel_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        let crate_name = line_no_comment.split(['=', ' ']).next().unwrap_or("");
        if TOOLING_ONLY.contains(&crate_name) {
            panic!("`{crate_name}` must not appear in easel_core's [dependencies]; it belongs to the easel tooling crate");
        }
    }
}

#[test]
fn tooling_depends_on_registry_crate() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        manifest.lines().any(|l| l.trim().starts_with("easel_core")),
        "the easel crate must depend on easel_core"
    );
}
