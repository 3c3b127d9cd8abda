//! Persisted record of the published index.
//!
//! Replaces re-parsing the previously generated `index.html`: the builder
//! writes a small JSON manifest next to the pages listing every artist
//! entry the index contains. The manifest is written last, so its
//! presence also marks the previous run as complete.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Manifest filename inside the output root.
pub const MANIFEST_FILE: &str = "dashboard_manifest.json";

/// One published artist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistEntry {
    pub name: String,
    /// Sanitized folder name; identity for merge deduplication.
    pub link: String,
}

/// The published state of the top-level index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub artists: Vec<ArtistEntry>,
    pub generated_at: Option<String>,
}

impl Manifest {
    /// Load the manifest from an output root. A missing or corrupt file
    /// means no prior index exists.
    pub fn load(output_root: &Path) -> Option<Self> {
        fs::read_to_string(output_root.join(MANIFEST_FILE))
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save the manifest into an output root.
    pub fn save(&self, output_root: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(output_root.join(MANIFEST_FILE), json)?;
        Ok(())
    }

    pub fn contains_link(&self, link: &str) -> bool {
        self.artists.iter().any(|a| a.link == link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Manifest {
        Manifest {
            artists: vec![ArtistEntry {
                name: "Alice".into(),
                link: "Alice".into(),
            }],
            generated_at: Some("2025-01-01T00:00:00Z".into()),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        sample().save(dir.path()).unwrap();

        let loaded = Manifest::load(dir.path()).expect("manifest should load");
        assert_eq!(loaded.artists, sample().artists);
        assert!(loaded.contains_link("Alice"));
        assert!(!loaded.contains_link("Bob"));
    }

    #[test]
    fn missing_manifest_loads_as_none() {
        let dir = tempdir().unwrap();
        assert!(Manifest::load(dir.path()).is_none());
    }

    #[test]
    fn corrupt_manifest_loads_as_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{not json").unwrap();
        assert!(Manifest::load(dir.path()).is_none());
    }
}
