//! Route command handler for computing a path across a map.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use gridpath_lib::{plan_path, PathAlgorithm};

use crate::commands::ResolvedInputs;
use crate::output::{render_json, render_text, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Map file overriding the settings file.
    pub map: Option<std::path::PathBuf>,
    /// Algorithm overriding the settings file.
    pub algorithm: Option<PathAlgorithm>,
}

/// Handle the route subcommand.
pub fn handle_route_command(
    settings_path: Option<&Path>,
    format: OutputFormat,
    palette: &ColorPalette,
    args: &RouteCommandArgs,
) -> Result<()> {
    let inputs = ResolvedInputs::resolve(settings_path, args.map.as_deref(), args.algorithm)?;
    let mut graph = inputs.load_graph()?;

    let plan = plan_path(&mut graph, inputs.algorithm).with_context(|| {
        format!(
            "{} search failed on {}",
            inputs.algorithm,
            inputs.map_path.display()
        )
    })?;
    tracing::info!(algorithm = %plan.algorithm, hops = plan.hop_count(), "route planned");

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => render_text(
            &mut stdout,
            &graph,
            &plan,
            &inputs.map_path,
            &inputs.parser,
            &inputs.printer,
            palette,
        )?,
        OutputFormat::Json => render_json(&mut stdout, &plan)?,
    }
    Ok(())
}
