//! Output formatting for CLI results.
//!
//! Every command renders to a `String` in one of the [`OutputFormat`]s.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use wayfinder_lib::{GraphInfo, Location, Neighbor, RouteRenderMode, RouteSummary};

use crate::terminal::{format_meters, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Markdown-flavoured text for chat or notes.
    Rich,
    /// Machine-readable JSON.
    Json,
}

#[derive(Serialize)]
struct ConnectionJson<'a> {
    code: &'a str,
    name: &'a str,
    distance: f64,
}

#[derive(Serialize)]
struct ConnectionsJson<'a> {
    code: &'a str,
    name: &'a str,
    connections: Vec<ConnectionJson<'a>>,
}

pub fn render_locations(
    locations: &[Location],
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(locations)? + "\n");
    }

    let mut buffer = String::new();
    for location in locations {
        let icon = location.icon.as_deref().unwrap_or("-");
        match format {
            OutputFormat::Rich => {
                let _ = writeln!(
                    buffer,
                    "* {} **{}** (`{}`)",
                    icon,
                    location.full_name_or_name(),
                    location.code
                );
            }
            _ => {
                let _ = writeln!(
                    buffer,
                    "{}{:<5}{} {}{}{}",
                    palette.cyan,
                    location.code,
                    palette.reset,
                    palette.white_bold,
                    location.name,
                    palette.reset
                );
            }
        }
    }
    Ok(buffer)
}

pub fn render_path(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)? + "\n"),
        OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
    }
}

pub fn render_connections(
    origin: &Location,
    neighbors: &[Neighbor<'_>],
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        let payload = ConnectionsJson {
            code: &origin.code,
            name: &origin.name,
            connections: neighbors
                .iter()
                .map(|n| ConnectionJson {
                    code: &n.location.code,
                    name: &n.location.name,
                    distance: n.distance,
                })
                .collect(),
        };
        return Ok(serde_json::to_string_pretty(&payload)? + "\n");
    }

    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Connections from {} ({}):",
        origin.name, origin.code
    );
    if neighbors.is_empty() {
        let _ = writeln!(buffer, "  (none)");
    }
    for neighbor in neighbors {
        let _ = writeln!(
            buffer,
            "  {}{:<5}{} {} {}{}{}",
            palette.cyan,
            neighbor.location.code,
            palette.reset,
            neighbor.location.name,
            palette.green,
            format_meters(neighbor.distance),
            palette.reset
        );
    }
    Ok(buffer)
}

pub fn render_info(source: &str, info: GraphInfo, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct InfoJson<'a> {
            source: &'a str,
            #[serde(flatten)]
            info: GraphInfo,
        }
        return Ok(serde_json::to_string_pretty(&InfoJson { source, info })? + "\n");
    }

    let mut buffer = String::new();
    let _ = writeln!(buffer, "Facility: {}", source);
    let _ = writeln!(buffer, "Locations: {}", info.locations);
    let _ = writeln!(buffer, "Connections: {}", info.connections);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_lib::{builtin_registry, find_path};

    #[test]
    fn plain_locations_list_every_code() {
        let registry = builtin_registry().unwrap();
        let text = render_locations(
            registry.all_locations(),
            OutputFormat::Text,
            ColorPalette::plain(),
        )
        .unwrap();

        assert_eq!(text.lines().count(), 11);
        assert!(text.starts_with("PKG   Parking Garage"));
    }

    #[test]
    fn json_path_contains_estimate() {
        let registry = builtin_registry().unwrap();
        let result = find_path(&registry, "PKG", "ER").unwrap();
        let summary = RouteSummary::from_path(&registry, &result);

        let json = render_path(&summary, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["estimated_time_minutes"], 8);
        assert_eq!(value["steps"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn connections_text_marks_isolated_location() {
        let origin = Location::new("X", "Storage");
        let text =
            render_connections(&origin, &[], OutputFormat::Text, ColorPalette::plain()).unwrap();
        assert!(text.contains("(none)"));
    }

    #[test]
    fn info_json_is_flat() {
        let info = GraphInfo {
            locations: 3,
            connections: 2,
        };
        let json = render_info("builtin", info, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["locations"], 3);
        assert_eq!(value["source"], "builtin");
    }
}
