//! Path planning over a [`Graph`].
//!
//! This module provides:
//! - [`PathAlgorithm`] - Supported search algorithms (Dijkstra, A*)
//! - [`Pathfinder`] - Strategy trait implemented by each algorithm
//! - [`find_path`] / [`find_graph_path`] - Run a search and scrub node state
//! - [`plan_path`] - Serializable [`PathPlan`] for display and JSON output
//!
//! # Strategy Pattern
//!
//! Each algorithm is encapsulated in its own pathfinder struct, chosen by
//! [`select_pathfinder`] from a [`PathAlgorithm`] or by [`resolve_algorithm`]
//! from a configuration string.
//!
//! # Graph reuse
//!
//! Searches keep their scratch state on the graph's nodes. [`find_path`]
//! resets every node once the search finishes, whether it found a path or
//! not, so the same graph can be searched again with any algorithm.
//!
//! # Example
//!
//! ```
//! use gridpath_lib::{build_graph, plan_path, Map, PathAlgorithm, Point};
//!
//! let map = Map::from_parts(3, Point::new(0, 0), Point::new(2, 2), Vec::new());
//! let mut graph = build_graph(&map);
//! let plan = plan_path(&mut graph, PathAlgorithm::AStar)?;
//! assert_eq!(plan.hop_count(), 4);
//! # Ok::<(), gridpath_lib::Error>(())
//! ```

mod planner;

pub use planner::{
    resolve_algorithm, select_pathfinder, AStarPathfinder, DijkstraPathfinder, Pathfinder,
};
pub use crate::path::backtrack;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeGrid, NodeId};
use crate::map::Point;

/// Names accepted for each algorithm, in display form first.
const ALGORITHM_NAMES: [&str; 2] = ["dijkstra", "a-star"];

/// Minimum Jaro-Winkler similarity for an algorithm name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Supported pathfinding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PathAlgorithm {
    /// Uniform-cost search ordered by the cost from the start.
    #[serde(alias = "Dijkstra")]
    Dijkstra,
    /// Heuristic-guided search ordered by cost plus Manhattan estimate.
    #[default]
    #[serde(alias = "AStar", alias = "astar", alias = "a_star")]
    AStar,
}

impl PathAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [PathAlgorithm; 2] = [PathAlgorithm::Dijkstra, PathAlgorithm::AStar];
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathAlgorithm::Dijkstra => "dijkstra",
            PathAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for PathAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized: String = value
            .replace('*', "star")
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "dijkstra" => Ok(PathAlgorithm::Dijkstra),
            "astar" => Ok(PathAlgorithm::AStar),
            _ => Err(Error::InvalidAlgorithm {
                value: value.to_string(),
                suggestions: suggest_algorithms(value),
            }),
        }
    }
}

fn suggest_algorithms(value: &str) -> Vec<String> {
    let needle = value.to_lowercase();
    ALGORITHM_NAMES
        .iter()
        .filter(|name| strsim::jaro_winkler(&needle, name) >= SUGGESTION_THRESHOLD)
        .map(|name| name.to_string())
        .collect()
}

/// Planned path returned by [`plan_path`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathPlan {
    pub algorithm: PathAlgorithm,
    pub start: Point,
    pub goal: Point,
    /// Positions from start to goal, both included.
    pub steps: Vec<Point>,
}

impl PathPlan {
    /// Number of moves along the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Run `pathfinder` from `start` to `goal`, then reset every node in `nodes`.
///
/// The reset happens on both success and failure so the grid never carries
/// stale search state into the next run.
pub fn find_path(
    pathfinder: &dyn Pathfinder,
    nodes: &mut NodeGrid,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    let result = pathfinder.find_path(nodes, start, goal);
    nodes.reset_all();
    tracing::trace!(algorithm = %pathfinder.algorithm(), "reset node search state");

    match &result {
        Ok(path) => tracing::debug!(
            algorithm = %pathfinder.algorithm(),
            nodes = path.len(),
            "path found"
        ),
        Err(error) => tracing::debug!(algorithm = %pathfinder.algorithm(), %error, "no path"),
    }
    result
}

/// Run the selected algorithm between the graph's start and end nodes.
pub fn find_graph_path(algorithm: PathAlgorithm, graph: &mut Graph) -> Result<Vec<NodeId>> {
    let pathfinder = select_pathfinder(algorithm);
    find_path(pathfinder.as_ref(), &mut graph.nodes, graph.start, graph.end)
}

/// Compute a path with `algorithm` and describe it as a [`PathPlan`].
pub fn plan_path(graph: &mut Graph, algorithm: PathAlgorithm) -> Result<PathPlan> {
    let route = find_graph_path(algorithm, graph)?;
    let steps = route
        .into_iter()
        .map(|id| graph.nodes[id].position())
        .collect();

    Ok(PathPlan {
        algorithm,
        start: graph.start_node().position(),
        goal: graph.end_node().position(),
        steps,
    })
}
