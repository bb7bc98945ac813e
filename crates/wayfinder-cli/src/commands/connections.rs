//! `connections` subcommand.

use anyhow::Result;

use wayfinder_lib::LocationRegistry;

use crate::output::{render_connections, OutputFormat};
use crate::terminal::ColorPalette;

/// Render the direct neighbors of one location, in edge declaration order.
pub fn handle_connections_command(
    registry: &LocationRegistry,
    code: &str,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    let origin = registry.lookup(code)?;
    let neighbors = registry.neighbors(&origin.code)?;
    render_connections(origin, &neighbors, format, palette)
}
