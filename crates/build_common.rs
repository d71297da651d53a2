// Shared build script utilities for README-to-rustdoc transformation.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Render this crate's README.md into `OUT_DIR/README_GENERATED.md` for the
/// `#![doc = include_str!(...)]` crate header.
///
/// Rewrites links so the same README reads correctly on the repo page and in
/// rustdoc: `src/`-relative links become module links, and links back to the
/// workspace README point at the repository URL from the workspace manifest.
/// Always writes the output file (empty when no README exists) so the doc
/// include never breaks the build.
fn render_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme = fs::read_to_string(Path::new(crate_dir).join("README.md")).unwrap_or_default();

    // Strip 'src/' prefixes and '.rs' extensions so links resolve to modules
    let mut rendered = readme.replace("](src/", "](").replace(".rs)", ")");

    // Point relative workspace-README links at the repo URL (read from the
    // workspace Cargo.toml, keeping the README itself URL-agnostic)
    if let Some(url) = workspace_repo_url(crate_dir) {
        rendered = rendered.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo for build scripts");
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rendered)
        .expect("write README_GENERATED.md");
}

/// Repository URL from the workspace Cargo.toml, if declared.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(workspace_toml).ok()?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("repository")
            && line.contains('=')
            && let Some(start) = line.find('"')
            && let Some(end) = line.rfind('"')
            && start < end
        {
            return Some(line[start + 1..end].to_string());
        }
    }
    None
}
