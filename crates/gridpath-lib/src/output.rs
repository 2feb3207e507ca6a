//! Text rendering for graphs and planned paths.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::graph::Graph;
use crate::map::{CharacterKeys, Point};
use crate::routing::PathPlan;

/// Number of path points printed per line in [`render_summary`].
const POINTS_PER_LINE: usize = 10;

/// What occupies a grid cell when drawing a graph with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blocked,
    Start,
    End,
    /// Interior path cell, carrying its two-character box-drawing connector.
    Path(&'static str),
    Empty,
}

impl GridCell {
    /// Two-character plain-text form of the cell.
    pub fn glyph(self, keys: &CharacterKeys) -> String {
        match self {
            GridCell::Blocked => format!("{} ", keys.blocked_key),
            GridCell::Start => format!("{} ", keys.start_key),
            GridCell::End => format!("{} ", keys.end_key),
            GridCell::Path(connector) => connector.to_string(),
            GridCell::Empty => format!("{} ", keys.empty_key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Direction of `to` as seen from `from`; "up" is towards smaller `y`.
fn direction(from: Point, to: Point) -> Option<Direction> {
    if to.y > from.y {
        Some(Direction::Down)
    } else if to.y < from.y {
        Some(Direction::Up)
    } else if to.x > from.x {
        Some(Direction::Right)
    } else if to.x < from.x {
        Some(Direction::Left)
    } else {
        None
    }
}

fn connector(previous: Option<Direction>, next: Option<Direction>) -> &'static str {
    use Direction::*;

    match (previous, next) {
        (None | Some(Left | Right), Some(Left | Right)) => "──",
        (None | Some(Up | Down), Some(Up | Down)) => "│ ",
        (Some(Right), Some(Up)) | (Some(Up), Some(Right)) => "└─",
        (Some(Right), Some(Down)) | (Some(Down), Some(Right)) => "┌─",
        (Some(Left), Some(Up)) | (Some(Up), Some(Left)) => "┘ ",
        (Some(Left), Some(Down)) | (Some(Down), Some(Left)) => "┐ ",
        (_, None) => "··",
    }
}

/// Classify every cell of `graph`, row by row (`y` outer, `x` inner).
pub fn grid_cells(graph: &Graph, path: &[Point]) -> Vec<Vec<GridCell>> {
    let on_path: HashMap<Point, usize> = path
        .iter()
        .enumerate()
        .map(|(index, &point)| (point, index))
        .collect();
    let start = graph.start_node().position();
    let end = graph.end_node().position();
    let size = graph.nodes.size() as i32;

    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    let point = Point::new(x, y);
                    let blocked = graph.nodes.node_at(point).is_some_and(|n| n.is_blocked());
                    if blocked {
                        GridCell::Blocked
                    } else if point == start {
                        GridCell::Start
                    } else if point == end {
                        GridCell::End
                    } else if let Some(&index) = on_path.get(&point) {
                        let previous = index
                            .checked_sub(1)
                            .and_then(|i| direction(point, path[i]));
                        let next = path.get(index + 1).and_then(|&p| direction(point, p));
                        GridCell::Path(connector(previous, next))
                    } else {
                        GridCell::Empty
                    }
                })
                .collect()
        })
        .collect()
}

/// Draw `graph` with `path` overlaid using box-drawing connectors.
pub fn render_grid(graph: &Graph, path: &[Point], keys: &CharacterKeys) -> String {
    let mut out = String::new();
    for row in grid_cells(graph, path) {
        let line: String = row.into_iter().map(|cell| cell.glyph(keys)).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Summarise a planned path: algorithm, map, keys, endpoints and raw steps.
pub fn render_summary(
    plan: &PathPlan,
    map_path: &Path,
    parser: &CharacterKeys,
    printer: &CharacterKeys,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary:\n");
    let _ = writeln!(out, "Used algorithm: {}", plan.algorithm);
    let _ = writeln!(out, "Map path: {}", map_path.display());
    let _ = writeln!(out, "Map parsing keys: {parser}");
    let _ = writeln!(out, "Map printer keys: {printer}");
    let _ = writeln!(out, "\nStarting point: {}", plan.start);
    let _ = writeln!(out, "Ending point: {}", plan.goal);
    let _ = write!(out, "\nRaw path ({} steps):", plan.steps.len());

    for (index, point) in plan.steps.iter().enumerate() {
        if index == 0 {
            let _ = write!(out, " {point}");
            continue;
        }
        let _ = write!(out, " → {point}");
        if index % POINTS_PER_LINE == 0 && index + 1 < plan.steps.len() {
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
