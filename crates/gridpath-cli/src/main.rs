use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridpath_cli::commands::compare::handle_compare_command;
use gridpath_cli::commands::route::{handle_route_command, RouteCommandArgs};
use gridpath_cli::output::OutputFormat;
use gridpath_cli::terminal::ColorPalette;
use gridpath_lib::PathAlgorithm;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths across textual grid maps")]
struct Cli {
    /// JSON settings file naming the map, algorithm and character keys.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors regardless of terminal support.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find and draw the shortest path between the map's start and end.
    Route {
        /// Map file (overrides the settings file).
        #[arg(long)]
        map: Option<PathBuf>,
        /// Algorithm to use: dijkstra or a-star (overrides the settings file).
        #[arg(long)]
        algorithm: Option<PathAlgorithm>,
    },
    /// Run every algorithm on the same map and compare path lengths.
    Compare {
        /// Map file (overrides the settings file).
        #[arg(long)]
        map: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Route { map, algorithm } => handle_route_command(
            cli.settings.as_deref(),
            cli.format,
            &palette,
            &RouteCommandArgs { map, algorithm },
        )?,
        Command::Compare { map } => handle_compare_command(
            cli.settings.as_deref(),
            map.as_deref(),
            cli.format,
            &palette,
        )?,
    }

    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "command finished");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
