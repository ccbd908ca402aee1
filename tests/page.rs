// Host page checks: every asset index.html references ships with the crate.

use std::path::{Path, PathBuf};

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn page() -> String {
    std::fs::read_to_string(root().join("index.html")).unwrap()
}

/// Values of `attr="..."` in the page that point under `assets/`
fn asset_refs(html: &str, attr: &str) -> Vec<String> {
    let needle = format!("{}=\"", attr);
    html.split(needle.as_str())
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|value| value.starts_with("assets"))
        .map(str::to_string)
        .collect()
}

#[test]
fn copy_dir_source_exists() {
    let dirs = asset_refs(&page(), "href");
    assert_eq!(dirs, vec!["assets".to_string()]);
    assert!(root().join("assets").is_dir());
}

#[test]
fn sprite_images_exist() {
    let sources = asset_refs(&page(), "src");
    assert_eq!(sources.len(), 2);
    for src in &sources {
        assert!(root().join(Path::new(src)).is_file(), "missing {}", src);
    }
}

#[test]
fn sprites_have_ids_the_loader_waits_on() {
    let html = page();
    for id in ["ship-img", "brick-img", "game-canvas", "title-screen", "game-over", "final-score"] {
        assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
    }
}
