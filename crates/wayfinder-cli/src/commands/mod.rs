//! CLI subcommand handlers.
//!
//! Each module handles one subcommand. Handlers take an already loaded
//! registry and return the rendered output; main.rs only parses arguments,
//! loads the facility, and prints.

pub mod connections;
pub mod info;
pub mod locations;
pub mod path;

use std::path::Path;

use anyhow::{Context, Result};

use wayfinder_lib::{builtin_registry, FacilityDefinition, LocationRegistry};

/// Load the facility named by `--facility`, or the built-in layout.
///
/// A definition that fails validation is an error; nothing is served from it.
pub fn load_registry(facility: Option<&Path>) -> Result<LocationRegistry> {
    match facility {
        Some(path) => FacilityDefinition::from_path(path)
            .and_then(FacilityDefinition::into_registry)
            .with_context(|| format!("failed to load facility from {}", path.display())),
        None => builtin_registry().context("built-in facility failed validation"),
    }
}

/// Human-readable name of the facility source.
pub fn source_label(facility: Option<&Path>) -> String {
    facility
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string())
}
