// Module exports for CLI subcommands.
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod compare;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use gridpath_lib::{build_graph, load_map, CharacterKeys, Graph, PathAlgorithm, Settings};

/// Map, keys and algorithm after merging the settings file with CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub map_path: PathBuf,
    pub algorithm: PathAlgorithm,
    pub parser: CharacterKeys,
    pub printer: CharacterKeys,
}

impl ResolvedInputs {
    /// Merge an optional settings file with command-line overrides.
    ///
    /// Flags win over the settings file; at least one of them must name a map.
    pub fn resolve(
        settings_path: Option<&Path>,
        map_override: Option<&Path>,
        algorithm_override: Option<PathAlgorithm>,
    ) -> Result<Self> {
        let settings = settings_path
            .map(|path| {
                Settings::load(path)
                    .with_context(|| format!("failed to load settings from {}", path.display()))
            })
            .transpose()?;

        let map_path = match (map_override, &settings) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(settings)) => settings.map.path.clone(),
            (None, None) => bail!("no map given; pass --map or --settings"),
        };

        let algorithm = algorithm_override
            .or_else(|| settings.as_ref().map(|s| s.pathfinding.algorithm))
            .unwrap_or_default();
        let (parser, printer) = settings
            .as_ref()
            .map(|s| (s.map.parser, s.map.printer))
            .unwrap_or_default();

        Ok(Self {
            map_path,
            algorithm,
            parser,
            printer,
        })
    }

    /// Parse the map and build its graph.
    pub fn load_graph(&self) -> Result<Graph> {
        let map = load_map(&self.map_path, &self.parser)
            .with_context(|| format!("failed to load map from {}", self.map_path.display()))?;
        tracing::info!(
            map = %self.map_path.display(),
            size = map.size,
            start = %map.start,
            end = %map.end,
            "loaded map"
        );
        Ok(build_graph(&map))
    }
}
