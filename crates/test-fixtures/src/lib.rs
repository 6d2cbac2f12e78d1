//! Test fixtures for the maintenance engine: JSON case datasets and seeded
//! synthetic streams shared by tests and benches across crates.

pub mod datasets;

use std::path::PathBuf;

use cbm_core::Case;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use datasets::{disjoint_drift_windows, two_class_stream, StreamSpec};

/// One case as stored in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCase {
    pub id: u64,
    pub features: Vec<f64>,
    pub label: u32,
    #[serde(default)]
    pub arrival: Option<u64>,
}

impl From<FixtureCase> for Case {
    fn from(f: FixtureCase) -> Self {
        let case = Case::new(f.id, f.features, f.label);
        match f.arrival {
            Some(arrival) => case.with_arrival(arrival),
            None => case,
        }
    }
}

/// A named dataset split into old and new windows.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowedDataset {
    pub description: String,
    pub k: usize,
    pub old: Vec<FixtureCase>,
    pub new: Vec<FixtureCase>,
}

/// Root directory of the fixture data folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("data").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/data from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a windowed dataset and convert its records into cases.
pub fn load_windows(relative_path: &str) -> (WindowedDataset, Vec<Case>, Vec<Case>) {
    let dataset: WindowedDataset = load_fixture(relative_path);
    let old = dataset.old.iter().cloned().map(Case::from).collect();
    let new = dataset.new.iter().cloned().map(Case::from).collect();
    (dataset, old, new)
}
