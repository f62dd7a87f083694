//! Merge and convert flows exercised through real catalog files.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use lingot::core::catalog::{Catalog, CatalogEntry, Context, Flag};
use lingot::core::convert::{FlatMessages, externalize, internalize};
use lingot::core::merge::merge;
use lingot::persist::{read_catalog, read_catalog_if_exists, write_catalog, write_flat};

fn entry(message: Option<&str>, file: &str, line: usize) -> CatalogEntry {
    CatalogEntry {
        message: message.map(String::from),
        contexts: vec![Context::new(file, line, 1)],
        flag: Flag::None,
    }
}

fn source_catalog() -> Catalog {
    let mut source = Catalog::new();
    source.insert("Welcome", entry(Some("Welcome"), "home.jsx", 2));
    source.insert("Contact us", entry(Some("Contact us"), "about.tsx", 5));
    source
}

#[test]
fn merge_against_existing_locale_file_preserves_translations() {
    let dir = tempdir().unwrap();
    let target_path = dir.path().join("fr-FR.json");

    let mut existing = Catalog::new();
    existing.insert("Welcome", entry(Some("Bienvenue"), "old.jsx", 1));
    existing.insert("Goodbye", entry(Some("Au revoir"), "old.jsx", 9));
    write_catalog(&target_path, &existing).unwrap();

    let source = source_catalog();
    let target = read_catalog(&target_path).unwrap();
    let (merged, stats) = merge(&source, &target);
    write_catalog(&target_path, &merged).unwrap();

    let reread = read_catalog(&target_path).unwrap();
    assert_eq!(
        reread.get("Welcome").unwrap().message.as_deref(),
        Some("Bienvenue")
    );
    assert_eq!(reread.get("Welcome").unwrap().flag, Flag::None);
    // Contexts refreshed from the source scan
    assert_eq!(reread.get("Welcome").unwrap().contexts[0].file, "home.jsx");

    assert_eq!(reread.get("Contact us").unwrap().flag, Flag::Missing);
    assert_eq!(reread.get("Goodbye").unwrap().flag, Flag::Unused);
    assert_eq!(stats.missing, 1);
    assert_eq!(stats.unused, 1);
}

#[test]
fn missing_target_file_initializes_the_locale() {
    let dir = tempdir().unwrap();
    let target_path = dir.path().join("de-DE.json");

    let source = source_catalog();
    let target = read_catalog_if_exists(&target_path)
        .unwrap()
        .unwrap_or_default();
    assert!(target.is_empty());

    let (merged, stats) = merge(&source, &target);
    write_catalog(&target_path, &merged).unwrap();

    let reread = read_catalog(&target_path).unwrap();
    assert_eq!(reread.len(), source.len());
    for (_, entry) in reread.iter() {
        assert_eq!(entry.message, None);
        assert_eq!(entry.flag, Flag::Missing);
    }
    assert_eq!(stats.missing, source.len());
    assert_eq!(stats.unused, 0);
}

#[test]
fn remerging_an_unchanged_source_is_stable_on_disk() {
    let dir = tempdir().unwrap();
    let target_path = dir.path().join("fr-FR.json");

    let mut existing = Catalog::new();
    existing.insert("Welcome", entry(Some("Bienvenue"), "old.jsx", 1));
    write_catalog(&target_path, &existing).unwrap();

    let source = source_catalog();

    for _ in 0..2 {
        let target = read_catalog(&target_path).unwrap();
        let (merged, _) = merge(&source, &target);
        write_catalog(&target_path, &merged).unwrap();
    }
    let first = fs::read_to_string(&target_path).unwrap();

    let target = read_catalog(&target_path).unwrap();
    let (merged, _) = merge(&source, &target);
    write_catalog(&target_path, &merged).unwrap();
    let second = fs::read_to_string(&target_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn flag_spelling_on_disk_is_uppercase() {
    let dir = tempdir().unwrap();
    let target_path = dir.path().join("es-ES.json");

    let (merged, _) = merge(&source_catalog(), &Catalog::new());
    write_catalog(&target_path, &merged).unwrap();

    let raw = fs::read_to_string(&target_path).unwrap();
    assert!(raw.contains(r#""flag": "MISSING""#));
    assert!(raw.contains(r#""message": null"#));
}

#[test]
fn externalize_writes_flat_files_importable_again() {
    let dir = tempdir().unwrap();
    let flat_path = dir.path().join("fr-FR.json");

    let mut catalog = Catalog::new();
    catalog.insert("Welcome", entry(Some("Bienvenue"), "home.jsx", 2));
    catalog.insert(
        "Contact us",
        CatalogEntry {
            message: None,
            contexts: vec![],
            flag: Flag::Missing,
        },
    );

    write_flat(&flat_path, &externalize(&catalog)).unwrap();

    let raw = fs::read_to_string(&flat_path).unwrap();
    assert!(raw.contains(r#""Welcome": "Bienvenue""#));
    assert!(!raw.contains("Contact us"));
    assert!(!raw.contains("contexts"));

    let flat: FlatMessages = serde_json::from_str(&raw).unwrap();
    let imported = internalize(&flat);
    let entry = imported.get("Welcome").unwrap();
    assert_eq!(entry.message.as_deref(), Some("Bienvenue"));
    assert!(entry.contexts.is_empty());
}

#[test]
fn written_catalogs_keep_source_discovery_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("en-US.json");

    let source = source_catalog();
    write_catalog(&path, &source).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let welcome = raw.find("Welcome").unwrap();
    let contact = raw.find("Contact us").unwrap();
    assert!(welcome < contact);
}
