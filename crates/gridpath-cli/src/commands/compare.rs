//! Compare command: run every algorithm on the same graph.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use gridpath_lib::{plan_path, PathAlgorithm};

use crate::commands::ResolvedInputs;
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

#[derive(Debug, Serialize)]
struct ComparisonRow {
    algorithm: PathAlgorithm,
    hops: usize,
    elapsed_us: u128,
}

/// Handle the compare subcommand.
///
/// The graph is built once and searched by each algorithm in turn, relying on
/// the library resetting node state between runs.
pub fn handle_compare_command(
    settings_path: Option<&Path>,
    map: Option<&Path>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let inputs = ResolvedInputs::resolve(settings_path, map, None)?;
    let mut graph = inputs.load_graph()?;

    let mut rows = Vec::new();
    for algorithm in PathAlgorithm::ALL {
        let started = Instant::now();
        let plan = plan_path(&mut graph, algorithm)
            .with_context(|| format!("{algorithm} search failed"))?;
        rows.push(ComparisonRow {
            algorithm,
            hops: plan.hop_count(),
            elapsed_us: started.elapsed().as_micros(),
        });
    }

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &rows)?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => {
            writeln!(
                stdout,
                "{}Comparison for {}{}",
                palette.white_bold,
                inputs.map_path.display(),
                palette.reset
            )?;
            for row in &rows {
                writeln!(
                    stdout,
                    " - {:<9} {} hops {}({} µs){}",
                    row.algorithm.to_string(),
                    row.hops,
                    palette.gray,
                    row.elapsed_us,
                    palette.reset
                )?;
            }
        }
    }
    Ok(())
}
