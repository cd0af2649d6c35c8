//! Shared test support for the Larder workspace: golden scenario files,
//! event and pantry builders, and scripted collaborator doubles.

pub mod builders;
pub mod doubles;
pub mod scenario;

pub use builders::{consumption, day, key, pantry_item, purchase};
pub use scenario::GoldenScenario;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// This crate's directory; fixture paths are relative to it.
fn fixtures_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Read and deserialize a JSON fixture, e.g. `"golden/leite.json"`.
///
/// # Panics
/// On a missing or malformed file, naming the path.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_dir().join(relative_path);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_dir().join(relative_path).is_file()
}

/// JSON files directly under `subdir`, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixtures_dir().join(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Every scenario under `golden/`, paired with its file stem.
pub fn golden_scenarios() -> Vec<(String, GoldenScenario)> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let scenario = load_fixture(&format!("golden/{stem}.json"));
            (stem, scenario)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_files_are_present() {
        for name in ["leite", "arroz_low_stock", "manual_only", "mixed_ranking"] {
            let path = format!("golden/{name}.json");
            assert!(fixture_exists(&path), "missing {path}");
        }
    }

    #[test]
    fn golden_files_build_valid_events() {
        let scenarios = golden_scenarios();
        assert_eq!(scenarios.len(), 4);
        for (name, scenario) in &scenarios {
            for event in scenario.purchase_events() {
                assert!(event.validate().is_ok(), "{name}: {event:?}");
            }
            for event in scenario.consumption_events() {
                assert!(event.validate().is_ok(), "{name}: {event:?}");
            }
            assert_eq!(scenario.pantry_snapshot().len(), scenario.pantry.len());
        }
    }

    #[test]
    fn missing_directory_lists_nothing() {
        assert!(list_fixtures("no-such-dir").is_empty());
    }
}
