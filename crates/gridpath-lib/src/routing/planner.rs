//! Pathfinding strategies implementing the Strategy pattern.
//!
//! This module provides the `Pathfinder` trait and one implementation per
//! search algorithm. The orchestrator in the parent module only talks to the
//! trait, so adding an algorithm does not touch [`super::find_path`].

use crate::error::Result;
use crate::graph::{NodeGrid, NodeId};
use crate::path::{find_path_a_star, find_path_dijkstra};

use super::PathAlgorithm;

/// Trait for pathfinding strategies.
pub trait Pathfinder: Send + Sync {
    /// The algorithm identifier for this pathfinder.
    fn algorithm(&self) -> PathAlgorithm;

    /// Search from `start` to `goal` and return the route, both ends included.
    ///
    /// Fails with [`crate::Error::PathNotFound`] when the goal is unreachable.
    /// Search state is left on the nodes; see [`super::find_path`] for the
    /// variant that scrubs it.
    fn find_path(
        &self,
        nodes: &mut NodeGrid,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Vec<NodeId>>;
}

/// Dijkstra pathfinder, prioritising nodes by their cost from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPathfinder;

impl Pathfinder for DijkstraPathfinder {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        nodes: &mut NodeGrid,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Vec<NodeId>> {
        find_path_dijkstra(nodes, start, goal)
    }
}

/// A* pathfinder using the Manhattan heuristic with a cross-product
/// tie-breaker.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::AStar
    }

    fn find_path(
        &self,
        nodes: &mut NodeGrid,
        start: NodeId,
        goal: NodeId,
    ) -> Result<Vec<NodeId>> {
        find_path_a_star(nodes, start, goal)
    }
}

/// Select a fresh pathfinder for the given algorithm.
pub fn select_pathfinder(algorithm: PathAlgorithm) -> Box<dyn Pathfinder> {
    match algorithm {
        PathAlgorithm::Dijkstra => Box::new(DijkstraPathfinder),
        PathAlgorithm::AStar => Box::new(AStarPathfinder),
    }
}

/// Resolve an algorithm name (as found in settings files) to a pathfinder.
///
/// Fails with [`crate::Error::InvalidAlgorithm`] for unknown names.
pub fn resolve_algorithm(name: &str) -> Result<Box<dyn Pathfinder>> {
    let algorithm: PathAlgorithm = name.parse()?;
    Ok(select_pathfinder(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn dijkstra_pathfinder_returns_correct_algorithm() {
        assert_eq!(DijkstraPathfinder.algorithm(), PathAlgorithm::Dijkstra);
    }

    #[test]
    fn astar_pathfinder_returns_correct_algorithm() {
        assert_eq!(AStarPathfinder.algorithm(), PathAlgorithm::AStar);
    }

    #[test]
    fn select_pathfinder_chooses_correct_type() {
        for algorithm in PathAlgorithm::ALL {
            assert_eq!(select_pathfinder(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn resolve_algorithm_rejects_unknown_names() {
        assert_eq!(
            resolve_algorithm("AStar").unwrap().algorithm(),
            PathAlgorithm::AStar
        );
        assert!(matches!(
            resolve_algorithm("bfs"),
            Err(Error::InvalidAlgorithm { .. })
        ));
    }
}
