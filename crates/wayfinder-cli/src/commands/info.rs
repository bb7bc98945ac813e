//! `info` subcommand.

use anyhow::Result;

use wayfinder_lib::LocationRegistry;

use crate::output::{render_info, OutputFormat};

/// Report location and connection counts of the loaded facility.
pub fn handle_info_command(
    registry: &LocationRegistry,
    source: &str,
    format: OutputFormat,
) -> Result<String> {
    render_info(source, registry.info(), format)
}
