//! `path` subcommand: shortest walking route between two locations.

use anyhow::Result;
use tracing::debug;

use wayfinder_lib::{find_path, LocationRegistry, RouteSummary};

use crate::output::{render_path, OutputFormat};

/// Arguments for the path command.
#[derive(Debug, Clone)]
pub struct PathCommandArgs {
    /// Starting location code.
    pub from: String,
    /// Destination location code.
    pub to: String,
}

/// Compute and render the shortest route.
///
/// Unknown codes are errors. An unreachable destination is not: it renders
/// as a "no route" result and the command still succeeds.
pub fn handle_path_command(
    registry: &LocationRegistry,
    args: &PathCommandArgs,
    format: OutputFormat,
) -> Result<String> {
    let result = find_path(registry, &args.from, &args.to)?;
    debug!(
        valid = result.is_valid(),
        hops = result.hop_count(),
        distance = result.distance(),
        "path computed"
    );

    let summary = RouteSummary::from_path(registry, &result);
    render_path(&summary, format)
}
