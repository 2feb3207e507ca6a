//! Output formatting for planned paths.
//!
//! Text output draws the grid with the path overlaid followed by a summary;
//! JSON output serializes the [`PathPlan`].

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use gridpath_lib::output::{grid_cells, GridCell};
use gridpath_lib::{render_summary, CharacterKeys, Graph, PathPlan};

use crate::terminal::ColorPalette;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Grid drawing plus a human-readable summary.
    #[default]
    Text,
    /// Machine-readable JSON plan.
    Json,
}

/// Draw the grid with `plan` overlaid, colouring endpoints, path and walls.
pub fn render_grid_colored(
    graph: &Graph,
    plan: &PathPlan,
    keys: &CharacterKeys,
    palette: &ColorPalette,
) -> String {
    let mut out = String::new();
    for row in grid_cells(graph, &plan.steps) {
        let mut line = String::new();
        for cell in row {
            let glyph = cell.glyph(keys);
            let color = match cell {
                GridCell::Start => palette.tag_start,
                GridCell::End => palette.tag_end,
                GridCell::Path(_) => palette.cyan,
                GridCell::Blocked => palette.gray,
                GridCell::Empty => "",
            };
            if color.is_empty() {
                line.push_str(&glyph);
            } else {
                line.push_str(color);
                line.push_str(&glyph);
                line.push_str(palette.reset);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render a planned path in text format.
pub fn render_text(
    out: &mut impl Write,
    graph: &Graph,
    plan: &PathPlan,
    map_path: &Path,
    parser: &CharacterKeys,
    printer: &CharacterKeys,
    palette: &ColorPalette,
) -> io::Result<()> {
    write!(out, "{}", render_grid_colored(graph, plan, printer, palette))?;
    let rule = "──".repeat(graph.nodes.size());
    writeln!(out, "{}{}{}", palette.gray, rule, palette.reset)?;
    write!(out, "{}", render_summary(plan, map_path, parser, printer))
}

/// Render a planned path in JSON format.
pub fn render_json(out: &mut impl Write, plan: &PathPlan) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, plan)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_lib::{build_graph, plan_path, Map, PathAlgorithm, Point};

    fn sample() -> (Graph, PathPlan) {
        let map = Map::from_parts(2, Point::new(0, 0), Point::new(1, 1), Vec::new());
        let mut graph = build_graph(&map);
        let plan = plan_path(&mut graph, PathAlgorithm::Dijkstra).unwrap();
        (graph, plan)
    }

    #[test]
    fn plain_palette_matches_library_rendering() {
        let (graph, plan) = sample();
        let keys = CharacterKeys::default();
        assert_eq!(
            render_grid_colored(&graph, &plan, &keys, &ColorPalette::plain()),
            gridpath_lib::render_grid(&graph, &plan.steps, &keys)
        );
    }

    #[test]
    fn colored_palette_wraps_endpoints() {
        let (graph, plan) = sample();
        let palette = ColorPalette::colored();
        let rendered = render_grid_colored(&graph, &plan, &CharacterKeys::default(), &palette);
        assert!(rendered.contains(&format!("{}S ", palette.tag_start)));
        assert!(rendered.contains(&format!("{}E ", palette.tag_end)));
    }

    #[test]
    fn json_output_lists_steps() {
        let (_, plan) = sample();
        let mut buffer = Vec::new();
        render_json(&mut buffer, &plan).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["algorithm"], "dijkstra");
        assert_eq!(value["steps"].as_array().unwrap().len(), 3);
        assert_eq!(value["start"]["x"], 0);
    }
}
