//! Textual grid maps.
//!
//! A map is a square grid of single-character cells separated by spaces, for
//! example:
//!
//! ```text
//! - - # - -
//! - S # - -
//! - # # - -
//! - - - - E
//! - - - - -
//! ```
//!
//! The cell in column `j` of line `i` lives at `Point::new(j, i)`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point in the grid, addressed by column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Characters used to encode cells when parsing or printing a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CharacterKeys {
    pub start_key: char,
    pub end_key: char,
    pub empty_key: char,
    pub blocked_key: char,
}

impl CharacterKeys {
    fn recognises(&self, cell: char) -> bool {
        cell == self.start_key
            || cell == self.end_key
            || cell == self.empty_key
            || cell == self.blocked_key
    }
}

impl Default for CharacterKeys {
    fn default() -> Self {
        Self {
            start_key: 'S',
            end_key: 'E',
            empty_key: '-',
            blocked_key: '#',
        }
    }
}

impl fmt::Display for CharacterKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(start = {}, end = {}, empty = {}, blocked = {})",
            self.start_key, self.end_key, self.empty_key, self.blocked_key
        )
    }
}

/// Parsed map: its side length, endpoints and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Map {
    pub size: usize,
    pub start: Point,
    pub end: Point,
    pub blocked: Vec<Point>,
}

impl Map {
    /// Assemble a map from already-validated parts.
    pub fn from_parts(size: usize, start: Point, end: Point, blocked: Vec<Point>) -> Self {
        Self {
            size,
            start,
            end,
            blocked,
        }
    }

    /// Parse map text using the given character keys.
    pub fn parse(text: &str, keys: &CharacterKeys) -> Result<Self> {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(Error::MapFormat {
                line: 0,
                reason: "map is empty".to_string(),
            });
        }

        let size = lines.len();
        let mut start = None;
        let mut end = None;
        let mut blocked = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let cells = parse_row(line, row + 1, size, keys)?;
            for (column, cell) in cells.into_iter().enumerate() {
                let point = Point::new(column as i32, row as i32);
                if cell == keys.start_key {
                    if start.replace(point).is_some() {
                        return Err(Error::DuplicateMapIdentifier {
                            identifier: keys.start_key,
                        });
                    }
                } else if cell == keys.end_key {
                    if end.replace(point).is_some() {
                        return Err(Error::DuplicateMapIdentifier {
                            identifier: keys.end_key,
                        });
                    }
                } else if cell == keys.blocked_key {
                    blocked.push(point);
                }
            }
        }

        let start = start.ok_or(Error::IdentifierNotFound {
            identifier: keys.start_key,
        })?;
        let end = end.ok_or(Error::IdentifierNotFound {
            identifier: keys.end_key,
        })?;

        tracing::debug!(
            size,
            %start,
            %end,
            blocked = blocked.len(),
            "parsed map"
        );

        Ok(Self {
            size,
            start,
            end,
            blocked,
        })
    }
}

fn parse_row(line: &str, line_no: usize, size: usize, keys: &CharacterKeys) -> Result<Vec<char>> {
    let malformed = |reason: String| Error::MapFormat {
        line: line_no,
        reason,
    };

    let mut cells = Vec::with_capacity(size);
    for token in line.trim_end().split(' ') {
        let mut chars = token.chars();
        let (Some(cell), None) = (chars.next(), chars.next()) else {
            return Err(malformed(format!(
                "expected single-character cells separated by one space, found '{token}'"
            )));
        };
        if !keys.recognises(cell) {
            return Err(malformed(format!("unexpected cell character '{cell}'")));
        }
        cells.push(cell);
    }

    if cells.len() != size {
        return Err(malformed(format!(
            "expected {size} cells, found {}",
            cells.len()
        )));
    }
    Ok(cells)
}

/// Read and parse the map file at `path`.
pub fn load_map(path: &Path, keys: &CharacterKeys) -> Result<Map> {
    let text = fs::read_to_string(path)?;
    Map::parse(&text, keys)
}
