//! Named JSON fixtures shared by the storyboard crates' tests.
//!
//! Every fixture is listed in `fixtures/manifest.json` at the workspace root;
//! paths in the manifest are relative to that directory.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures/manifest.json is valid")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    states: HashMap<String, String>,
    #[serde(default)]
    configs: HashMap<String, String>,
    #[serde(default)]
    bitmaps: HashMap<String, [f64; 2]>,
}

fn fixture_path(entries: &HashMap<String, String>, kind: &str, name: &str) -> Result<PathBuf> {
    let rel = entries
        .get(name)
        .ok_or_else(|| anyhow!("no {kind} fixture named '{name}' in manifest"))?;
    Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel))
}

fn read(entries: &HashMap<String, String>, kind: &str, name: &str) -> Result<String> {
    let path = fixture_path(entries, kind, name)?;
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

fn sorted_keys<V>(entries: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = entries.keys().cloned().collect();
    keys.sort();
    keys
}

/// Sampled state sequences, one object each.
pub mod states {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_keys(&MANIFEST.states)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        fixture_path(&MANIFEST.states, "state", name)
    }

    pub fn json(name: &str) -> Result<String> {
        read(&MANIFEST.states, "state", name)
    }

    /// Parse the named sequence, typically as `Vec<State>`.
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("parsing state fixture '{name}'"))
    }
}

pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        sorted_keys(&MANIFEST.configs)
    }

    pub fn json(name: &str) -> Result<String> {
        read(&MANIFEST.configs, "config", name)
    }
}

/// Pixel size of the bitmaps the state fixtures draw.
pub mod bitmaps {
    use super::*;

    pub fn size(texture_path: &str) -> Option<[f64; 2]> {
        MANIFEST.bitmaps.get(texture_path).copied()
    }

    pub fn all() -> Vec<(String, [f64; 2])> {
        sorted_keys(&MANIFEST.bitmaps)
            .into_iter()
            .filter_map(|path| size(&path).map(|s| (path, s)))
            .collect()
    }
}
