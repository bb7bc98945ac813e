use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::commands::{
    connections::handle_connections_command,
    info::handle_info_command,
    load_registry,
    locations::handle_locations_command,
    path::{handle_path_command, PathCommandArgs},
    source_label,
};
use wayfinder_cli::output::OutputFormat;
use wayfinder_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Facility wayfinding utilities")]
struct Cli {
    /// Load the facility from a JSON definition instead of the built-in layout.
    #[arg(long, global = true)]
    facility: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every location in the facility.
    Locations,
    /// Compute the shortest walking route between two locations.
    Path {
        /// Starting location code.
        #[arg(long = "from")]
        from: String,
        /// Destination location code.
        #[arg(long = "to")]
        to: String,
    },
    /// Show the direct connections of a location.
    Connections {
        /// Location code.
        code: String,
    },
    /// Report location and connection counts.
    Info,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let facility = cli.facility.as_deref();
    let registry = load_registry(facility)?;
    let palette = ColorPalette::detect();

    let output = match cli.command {
        Command::Locations => handle_locations_command(&registry, cli.format, palette)?,
        Command::Path { from, to } => {
            handle_path_command(&registry, &PathCommandArgs { from, to }, cli.format)?
        }
        Command::Connections { code } => {
            handle_connections_command(&registry, &code, cli.format, palette)?
        }
        Command::Info => handle_info_command(&registry, &source_label(facility), cli.format)?,
    };

    print!("{}", output);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
