//! Gridpath library entry points.
//!
//! This crate parses textual grid maps, builds node graphs from them and runs
//! shortest-path searches (Dijkstra and A*) over those graphs. Higher-level
//! consumers (the CLI, benchmarks) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;
pub mod settings;

pub use error::{Error, Result};
pub use graph::{build_graph, Graph, Node, NodeGrid, NodeId};
pub use map::{load_map, CharacterKeys, Map, Point};
pub use output::{render_grid, render_summary};
pub use path::{cross, manhattan};
pub use routing::{
    backtrack, find_graph_path, find_path, plan_path, resolve_algorithm, select_pathfinder,
    AStarPathfinder, DijkstraPathfinder, PathAlgorithm, PathPlan, Pathfinder,
};
pub use settings::{MapSettings, PathfindingSettings, Settings};
