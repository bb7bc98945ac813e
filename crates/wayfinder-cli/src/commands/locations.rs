//! `locations` subcommand.

use anyhow::Result;

use wayfinder_lib::LocationRegistry;

use crate::output::{render_locations, OutputFormat};
use crate::terminal::ColorPalette;

/// List every location in declaration order.
pub fn handle_locations_command(
    registry: &LocationRegistry,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    render_locations(registry.all_locations(), format, palette)
}
