//! Node graph built from a [`Map`].
//!
//! Nodes live in a flat arena ([`NodeGrid`]); adjacency and predecessor links
//! are stored as [`NodeId`] indices into that arena.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::map::{Map, Point};

/// Index of a node inside a [`NodeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A traversable grid cell plus the scratch state of the running search.
#[derive(Debug, Clone)]
pub struct Node {
    position: Point,
    blocked: bool,
    edges: Vec<NodeId>,
    /// Cost of the cheapest known path from the start to this node.
    pub g_score: f64,
    /// `g_score` plus the heuristic estimate to the goal (A* only).
    pub f_score: f64,
    /// Predecessor on the cheapest known path.
    pub previous: Option<NodeId>,
}

impl Node {
    fn new(position: Point, edges: Vec<NodeId>) -> Self {
        Self {
            position,
            blocked: false,
            edges,
            g_score: f64::INFINITY,
            f_score: f64::INFINITY,
            previous: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Orthogonal in-bounds neighbours (2 to 4 of them).
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }

    /// Restore the default search state.
    pub fn reset(&mut self) {
        self.previous = None;
        self.g_score = f64::INFINITY;
        self.f_score = f64::INFINITY;
    }

    /// Whether the node carries no search state.
    pub fn is_clean(&self) -> bool {
        self.previous.is_none() && self.g_score == f64::INFINITY && self.f_score == f64::INFINITY
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.position, f)
    }
}

/// Square arena of nodes indexed by position.
///
/// Search state lives on the nodes themselves, so every search takes the grid
/// by `&mut`: two searches can never run over the same grid at once.
#[derive(Debug, Clone)]
pub struct NodeGrid {
    size: usize,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identifier of the node at `point`, if it lies inside the grid.
    pub fn id_of(&self, point: Point) -> Option<NodeId> {
        let size = self.size as i64;
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(NodeId((x * size + y) as usize))
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Node at `point`, if it lies inside the grid.
    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.id_of(point).map(|id| self.node(id))
    }

    /// Iterate over every node together with its identifier.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Reset the search state of every node.
    pub fn reset_all(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    /// Whether no node carries leftover search state.
    pub fn is_clean(&self) -> bool {
        self.nodes.iter().all(Node::is_clean)
    }

    fn neighbours(size: usize, x: usize, y: usize) -> Vec<NodeId> {
        let id = |x: usize, y: usize| NodeId(x * size + y);
        let mut edges = Vec::with_capacity(4);
        // Left and down.
        if x > 0 {
            edges.push(id(x - 1, y));
        }
        if y > 0 {
            edges.push(id(x, y - 1));
        }
        // Right and up.
        if x + 1 < size {
            edges.push(id(x + 1, y));
        }
        if y + 1 < size {
            edges.push(id(x, y + 1));
        }
        edges
    }
}

impl Index<NodeId> for NodeGrid {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}

impl IndexMut<NodeId> for NodeGrid {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_mut(id)
    }
}

/// Node grid plus its designated start and end nodes.
#[derive(Debug, Clone)]
pub struct Graph {
    pub nodes: NodeGrid,
    pub start: NodeId,
    pub end: NodeId,
}

impl Graph {
    pub fn start_node(&self) -> &Node {
        self.nodes.node(self.start)
    }

    pub fn end_node(&self) -> &Node {
        self.nodes.node(self.end)
    }
}

/// Build a graph with one node per map cell and 4-directional adjacency.
///
/// The map is expected to be valid (see [`Map::parse`]); start, end and
/// blocked points outside the grid are a programming error and panic.
pub fn build_graph(map: &Map) -> Graph {
    let size = map.size;
    let mut nodes = Vec::with_capacity(size * size);
    for x in 0..size {
        for y in 0..size {
            let position = Point::new(x as i32, y as i32);
            nodes.push(Node::new(position, NodeGrid::neighbours(size, x, y)));
        }
    }
    let mut nodes = NodeGrid { size, nodes };

    let resolve = |grid: &NodeGrid, point: Point| {
        grid.id_of(point)
            .unwrap_or_else(|| panic!("map point {point} lies outside a {size}x{size} grid"))
    };

    for &point in &map.blocked {
        let id = resolve(&nodes, point);
        nodes[id].blocked = true;
    }

    let start = resolve(&nodes, map.start);
    let end = resolve(&nodes, map.end);

    tracing::debug!(
        size,
        nodes = nodes.len(),
        blocked = map.blocked.len(),
        "built graph"
    );

    Graph { nodes, start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_map(size: usize) -> Map {
        Map::from_parts(
            size,
            Point::new(0, 0),
            Point::new(size as i32 - 1, size as i32 - 1),
            Vec::new(),
        )
    }

    #[test]
    fn edges_follow_left_down_right_up_order() {
        let graph = build_graph(&open_map(3));
        let centre = graph.nodes.node_at(Point::new(1, 1)).unwrap();
        let positions: Vec<_> = centre
            .edges()
            .iter()
            .map(|&id| graph.nodes[id].position())
            .collect();
        assert_eq!(
            positions,
            vec![
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn id_of_rejects_out_of_bounds() {
        let graph = build_graph(&open_map(2));
        assert!(graph.nodes.id_of(Point::new(-1, 0)).is_none());
        assert!(graph.nodes.id_of(Point::new(0, 2)).is_none());
        assert!(graph.nodes.id_of(Point::new(1, 1)).is_some());
    }

    #[test]
    fn fresh_graph_is_clean() {
        let mut graph = build_graph(&open_map(4));
        assert!(graph.nodes.is_clean());

        let start = graph.start;
        graph.nodes[start].g_score = 0.0;
        assert!(!graph.nodes.is_clean());

        graph.nodes.reset_all();
        assert!(graph.nodes.is_clean());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_start_panics() {
        let map = Map::from_parts(2, Point::new(5, 5), Point::new(1, 1), Vec::new());
        build_graph(&map);
    }
}
