use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::{Node, NodeGrid, NodeId};
use crate::map::Point;

/// Every edge on the grid has the same cost.
const LINE_WEIGHT: f64 = 1.0;

/// Scale applied to the cross-product tie-breaker so it never outweighs a
/// whole step of real cost.
const TIE_BREAK_SCALE: f64 = 0.001;

/// Manhattan distance between two points; admissible and consistent for a
/// 4-directional unit-cost grid.
pub fn manhattan(a: Point, b: Point) -> f64 {
    let dx = (i64::from(b.x) - i64::from(a.x)).abs();
    let dy = (i64::from(b.y) - i64::from(a.y)).abs();
    (dx + dy) as f64
}

/// Absolute 2D cross product of `current - goal` and `start - goal`.
///
/// Zero for points on the straight line through `start` and `goal`, growing
/// with the distance from that line.
pub fn cross(current: Point, start: Point, goal: Point) -> f64 {
    let dx1 = i64::from(current.x) - i64::from(goal.x);
    let dy1 = i64::from(current.y) - i64::from(goal.y);
    let dx2 = i64::from(start.x) - i64::from(goal.x);
    let dy2 = i64::from(start.y) - i64::from(goal.y);
    (dx1 * dy2 - dx2 * dy1).abs() as f64
}

/// Run uniform-cost search (Dijkstra) from `start` to `goal`.
///
/// Leaves search state on the nodes; callers are expected to reset the grid
/// afterwards (see [`crate::routing::find_path`]).
pub fn find_path_dijkstra(
    nodes: &mut NodeGrid,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    let mut open = OpenSet::new(nodes.len());
    let mut expanded = 0usize;

    nodes[start].g_score = 0.0;
    open.push(start, 0.0);

    while let Some(current) = open.pop(nodes, |node| node.g_score) {
        if current == goal {
            tracing::debug!(expanded, "dijkstra reached goal");
            return Ok(backtrack(nodes, start, goal));
        }

        if nodes[current].is_blocked() {
            continue;
        }
        expanded += 1;

        let current_score = nodes[current].g_score;
        for index in 0..nodes[current].edges().len() {
            let edge = nodes[current].edges()[index];
            let tentative = current_score + LINE_WEIGHT;
            if tentative >= nodes[edge].g_score {
                continue;
            }

            let node = &mut nodes[edge];
            node.previous = Some(current);
            node.g_score = tentative;
            open.push(edge, tentative);
        }
    }

    tracing::debug!(expanded, "dijkstra exhausted open set");
    Err(not_found(nodes, start, goal))
}

/// Run A* from `start` to `goal` using the Manhattan heuristic plus a
/// cross-product tie-breaker that favours nodes near the start-goal line.
///
/// The tie-breaker never changes the optimal path length but may pick a
/// different route than [`find_path_dijkstra`] among equally short ones.
pub fn find_path_a_star(
    nodes: &mut NodeGrid,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    let mut open = OpenSet::new(nodes.len());
    let mut expanded = 0usize;

    let start_point = nodes[start].position();
    let goal_point = nodes[goal].position();

    let estimate = manhattan(start_point, goal_point);
    nodes[start].g_score = 0.0;
    nodes[start].f_score = estimate;
    open.push(start, estimate);

    while let Some(current) = open.pop(nodes, |node| node.f_score) {
        if current == goal {
            tracing::debug!(expanded, "a* reached goal");
            return Ok(backtrack(nodes, start, goal));
        }

        if nodes[current].is_blocked() {
            continue;
        }
        expanded += 1;

        let current_score = nodes[current].g_score;
        let tie_break =
            cross(nodes[current].position(), start_point, goal_point) * TIE_BREAK_SCALE;
        for index in 0..nodes[current].edges().len() {
            let edge = nodes[current].edges()[index];
            let tentative = current_score + LINE_WEIGHT;
            if tentative >= nodes[edge].g_score {
                continue;
            }

            let node = &mut nodes[edge];
            node.previous = Some(current);
            node.g_score = tentative;
            node.f_score = tentative + manhattan(node.position(), goal_point) + tie_break;
            open.push(edge, node.f_score);
        }
    }

    tracing::debug!(expanded, "a* exhausted open set");
    Err(not_found(nodes, start, goal))
}

/// Follow `previous` links from `goal` back to `start` and return the route in
/// start-to-goal order, both ends included.
pub fn backtrack(nodes: &NodeGrid, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        if node == start {
            break;
        }
        path.push(node);
        current = nodes[node].previous;
    }
    path.push(start);
    path.reverse();
    path
}

fn not_found(nodes: &NodeGrid, start: NodeId, goal: NodeId) -> Error {
    Error::PathNotFound {
        start: nodes[start].position(),
        goal: nodes[goal].position(),
    }
}

/// Open set backed by a binary min-heap.
///
/// Membership is tracked per node; a node whose score drops while it is open
/// gets a fresh heap entry and the outdated one is skipped when popped.
struct OpenSet {
    heap: BinaryHeap<QueueEntry>,
    members: Vec<bool>,
    sequence: u64,
}

impl OpenSet {
    fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: vec![false; capacity],
            sequence: 0,
        }
    }

    fn push(&mut self, node: NodeId, score: f64) {
        self.members[node.index()] = true;
        self.heap.push(QueueEntry {
            node,
            score: FloatOrd(score),
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Remove and return the open node with the lowest `key`.
    fn pop(&mut self, nodes: &NodeGrid, key: impl Fn(&Node) -> f64) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let member = &mut self.members[entry.node.index()];
            if !*member || entry.score.0 != key(&nodes[entry.node]) {
                continue;
            }
            *member = false;
            return Some(entry.node);
        }
        None
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    score: FloatOrd,
    sequence: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; equal scores pop
        // in insertion order.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
