//! End-to-end discovery and activation over real directories

use skilldock_guidance::{ActivationReason, GuidanceRegistry};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_entry(root: &Path, slug: &str, description: &str, triggers: &[&str], body: &str) {
    let dir = root.join(slug);
    fs::create_dir_all(&dir).unwrap();

    let mut doc = String::from("---\n");
    doc.push_str(&format!("name: {slug}\n"));
    doc.push_str(&format!("description: {description}\n"));
    doc.push_str("triggers:\n");
    for trigger in triggers {
        doc.push_str(&format!("  - {trigger}\n"));
    }
    doc.push_str("---\n\n");
    doc.push_str(body);

    fs::write(dir.join("SKILL.md"), doc).unwrap();
}

#[test]
fn test_discovery_and_activation() {
    let tmp = TempDir::new().unwrap();
    write_entry(
        tmp.path(),
        "uniswap-v4-hooks",
        "Security guidance for Uniswap V4 hook contracts.",
        &["uniswap", "beforeSwap", "afterSwap"],
        "# Hook Security\n\nThreat model checklist.\n",
    );

    let mut registry = GuidanceRegistry::new().add_directory(tmp.path());
    registry.discover().unwrap();
    assert_eq!(registry.len(), 1);

    // Metadata-only after discovery
    let entry = registry.get("uniswap-v4-hooks").unwrap();
    assert!(entry.body.is_none());

    // Keyword activation, then phase-2 load
    let activations = registry.activate("Create a basic afterSwap hook");
    assert_eq!(activations.len(), 1);
    assert_eq!(activations[0].name, "uniswap-v4-hooks");
    assert_eq!(
        activations[0].reason,
        ActivationReason::Trigger("afterSwap".to_string())
    );

    let entry = registry.load_entry("uniswap-v4-hooks").unwrap();
    assert!(entry.body.as_deref().unwrap().contains("# Hook Security"));
}

#[test]
fn test_discovery_skips_invalid_entries() {
    let tmp = TempDir::new().unwrap();
    write_entry(
        tmp.path(),
        "uniswap-v4-hooks",
        "Security guidance for Uniswap V4 hook contracts.",
        &["uniswap"],
        "body\n",
    );

    // No frontmatter at all
    let broken = tmp.path().join("broken");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("SKILL.md"), "# no fence\n").unwrap();

    // Directory without a document file
    fs::create_dir_all(tmp.path().join("not-an-entry")).unwrap();

    let mut registry = GuidanceRegistry::new().add_directory(tmp.path());
    registry.discover().unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.get("uniswap-v4-hooks").is_some());

    // lint reports both offenders, including the file-less directory
    let findings = registry.lint();
    assert_eq!(findings.len(), 2);
}

#[test]
fn test_later_directory_overrides_earlier() {
    let personal = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    write_entry(
        personal.path(),
        "uniswap-v4-hooks",
        "Personal copy.",
        &["uniswap"],
        "personal body\n",
    );
    write_entry(
        project.path(),
        "uniswap-v4-hooks",
        "Project copy.",
        &["uniswap", "beforeSwap"],
        "project body\n",
    );

    let mut registry = GuidanceRegistry::new()
        .add_directory(personal.path())
        .add_directory(project.path());
    registry.discover().unwrap();

    assert_eq!(registry.len(), 1);
    let entry = registry.get("uniswap-v4-hooks").unwrap();
    assert_eq!(entry.description(), "Project copy.");

    let entry = registry.load_entry("uniswap-v4-hooks").unwrap();
    assert_eq!(entry.body.as_deref(), Some("project body\n"));
}

#[test]
fn test_nonexistent_directory_is_skipped() {
    let mut registry =
        GuidanceRegistry::new().add_directory("/definitely/not/a/real/path/guidance");
    registry.discover().unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_explicit_invocation_end_to_end() {
    let tmp = TempDir::new().unwrap();
    write_entry(
        tmp.path(),
        "uniswap-v4-hooks",
        "Security guidance for Uniswap V4 hook contracts.",
        &["uniswap"],
        "body\n",
    );

    let mut registry = GuidanceRegistry::new().add_directory(tmp.path());
    registry.discover().unwrap();

    let activations = registry.activate("/uniswap-v4-hooks review this");
    assert_eq!(activations.len(), 1);
    assert_eq!(activations[0].reason, ActivationReason::Invocation);

    assert!(registry.activate("What's the weather today?").is_empty());
}

#[test]
fn test_catalog_summary_lists_entries_sorted() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "zz-last", "Z entry.", &["zeta"], "z\n");
    write_entry(tmp.path(), "aa-first", "A entry.", &["alpha"], "a\n");

    let mut registry = GuidanceRegistry::new().add_directory(tmp.path());
    registry.discover().unwrap();

    let summary = registry.catalog_summary();
    let aa = summary.find("- aa-first: A entry.").unwrap();
    let zz = summary.find("- zz-last: Z entry.").unwrap();
    assert!(aa < zz);
    assert!(summary.starts_with("Available guidance"));
}
