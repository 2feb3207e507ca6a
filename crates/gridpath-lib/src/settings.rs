//! JSON application settings.
//!
//! Settings files wrap everything in a top-level `Settings` section:
//!
//! ```json
//! {
//!   "Settings": {
//!     "Pathfinding": { "Type": "AStar" },
//!     "Map": {
//!       "Path": "map_15x15.txt",
//!       "Parser": { "StartKey": "S", "EndKey": "E", "EmptyKey": "-", "BlockedKey": "#" }
//!     }
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::map::{load_map, CharacterKeys, Map};
use crate::routing::PathAlgorithm;

/// Application settings: which algorithm to run on which map.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pathfinding: PathfindingSettings,
    pub map: MapSettings,
}

/// Pathfinding section of the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathfindingSettings {
    pub algorithm: PathAlgorithm,
}

/// Map section of the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSettings {
    /// Map file, resolved against the settings file's directory.
    pub path: PathBuf,
    /// Keys used when parsing the map file.
    pub parser: CharacterKeys,
    /// Keys used when printing the map.
    pub printer: CharacterKeys,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSettings {
    pathfinding: RawPathfinding,
    map: RawMap,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawPathfinding {
    #[serde(rename = "Type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawMap {
    path: PathBuf,
    #[serde(default)]
    parser: CharacterKeys,
    #[serde(default)]
    printer: CharacterKeys,
}

impl Settings {
    /// Load settings from the JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let settings = Self::from_json(&text, base).map_err(|error| match error {
            Error::MissingSettingsSection { .. } => Error::MissingSettingsSection {
                path: path.to_path_buf(),
            },
            other => other,
        })?;

        tracing::debug!(
            settings = %path.display(),
            algorithm = %settings.pathfinding.algorithm,
            map = %settings.map.path.display(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Parse settings JSON, resolving a relative map path against `base`.
    pub fn from_json(text: &str, base: &Path) -> Result<Self> {
        let mut document: serde_json::Value = serde_json::from_str(text)?;
        let section = document
            .get_mut("Settings")
            .map(serde_json::Value::take)
            .ok_or_else(|| Error::MissingSettingsSection {
                path: PathBuf::new(),
            })?;
        let raw: RawSettings = serde_json::from_value(section)?;

        let algorithm: PathAlgorithm = raw.pathfinding.kind.parse()?;
        let path = if raw.map.path.is_absolute() {
            raw.map.path
        } else {
            base.join(raw.map.path)
        };

        Ok(Self {
            pathfinding: PathfindingSettings { algorithm },
            map: MapSettings {
                path,
                parser: raw.map.parser,
                printer: raw.map.printer,
            },
        })
    }

    /// Read and parse the configured map file.
    pub fn load_map(&self) -> Result<Map> {
        load_map(&self.map.path, &self.map.parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "Settings": {
            "Pathfinding": { "Type": "Dijkstra" },
            "Map": {
                "Path": "maps/small.txt",
                "Parser": { "StartKey": "A", "EndKey": "B", "EmptyKey": ".", "BlockedKey": "X" }
            }
        }
    }"##;

    #[test]
    fn from_json_reads_every_section() {
        let settings = Settings::from_json(SAMPLE, Path::new("/srv/config")).unwrap();
        assert_eq!(settings.pathfinding.algorithm, PathAlgorithm::Dijkstra);
        assert_eq!(settings.map.path, PathBuf::from("/srv/config/maps/small.txt"));
        assert_eq!(settings.map.parser.start_key, 'A');
        assert_eq!(settings.map.parser.blocked_key, 'X');
        assert_eq!(settings.map.printer, CharacterKeys::default());
    }

    #[test]
    fn missing_section_is_reported() {
        let error = Settings::from_json(r#"{ "Other": {} }"#, Path::new("")).unwrap_err();
        assert!(matches!(error, Error::MissingSettingsSection { .. }));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let text = SAMPLE.replace("Dijkstra", "Bellman");
        let error = Settings::from_json(&text, Path::new("")).unwrap_err();
        assert!(matches!(error, Error::InvalidAlgorithm { .. }));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let error = Settings::from_json("{ not json", Path::new("")).unwrap_err();
        assert!(matches!(error, Error::Json(_)));
    }
}
