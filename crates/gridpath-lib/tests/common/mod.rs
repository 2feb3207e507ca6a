#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use gridpath_lib::{Map, Point};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Square map without blocked cells.
pub fn open_map(size: usize, start: (i32, i32), end: (i32, i32)) -> Map {
    Map::from_parts(size, start.into(), end.into(), Vec::new())
}

/// Square map with the given blocked cells.
pub fn blocked_map(
    size: usize,
    start: (i32, i32),
    end: (i32, i32),
    blocked: &[(i32, i32)],
) -> Map {
    Map::from_parts(
        size,
        start.into(),
        end.into(),
        blocked.iter().copied().map(Point::from).collect(),
    )
}

/// Shortest path length in nodes (moves + 1) computed by plain breadth-first
/// search, or `None` when the goal is unreachable.
pub fn bfs_path_nodes(map: &Map) -> Option<usize> {
    let blocked: HashSet<Point> = map.blocked.iter().copied().collect();
    let size = map.size as i32;
    let mut seen = HashSet::from([map.start]);
    let mut queue = VecDeque::from([(map.start, 1usize)]);

    while let Some((point, nodes)) = queue.pop_front() {
        if point == map.end {
            return Some(nodes);
        }
        if blocked.contains(&point) {
            continue;
        }
        for (dx, dy) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
            let next = Point::new(point.x + dx, point.y + dy);
            if next.x < 0 || next.y < 0 || next.x >= size || next.y >= size {
                continue;
            }
            if seen.insert(next) {
                queue.push_back((next, nodes + 1));
            }
        }
    }
    None
}

/// Deterministic pseudo-random maps for property-style checks.
pub fn scattered_maps(count: usize, size: usize) -> Vec<Map> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let start = Point::new(0, 0);
            let end = Point::new(size as i32 - 1, size as i32 - 1);
            let blocked = (0..size as i32)
                .flat_map(|x| (0..size as i32).map(move |y| Point::new(x, y)))
                .filter(|&p| p != start && p != end)
                .filter(|_| next() % 100 < 30)
                .collect();
            Map::from_parts(size, start, end, blocked)
        })
        .collect()
}
