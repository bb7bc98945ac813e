//! Location graph registry.
//!
//! The registry owns the fixed set of facility locations and the weighted,
//! undirected connections between them. It is built once through
//! [`load_graph`], validated up front, and never mutated afterwards, so it can
//! be shared freely between threads.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, LocationRole, Result};

/// Maximum number of suggestions attached to an unknown-location error.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a location to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Longest accepted edge, in meters. Keeps summed path lengths finite.
pub const MAX_EDGE_DISTANCE: f64 = 1.0e9;

/// A named place in the facility graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Short unique code, e.g. `ER`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Longer descriptive name, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Icon or label hint for renderers. Opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Location {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            full_name: None,
            icon: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Full name when present, otherwise the display name.
    pub fn full_name_or_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }
}

/// Undirected connection between two locations as written in a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    /// Walking distance in meters.
    pub distance: f64,
}

impl EdgeDefinition {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Directed arc stored in the adjacency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub(crate) target: usize,
    pub(crate) distance: f64,
}

/// Neighbor of a location together with the connecting distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub location: &'a Location,
    pub distance: f64,
}

/// Structural summary of a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphInfo {
    /// Number of locations.
    pub locations: usize,
    /// Number of undirected connections.
    pub connections: usize,
}

/// Normalize a location code for storage and lookup.
///
/// Codes are compared after trimming surrounding whitespace and upper-casing
/// ASCII letters, so `" er "` and `"ER"` name the same location.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Immutable registry of locations and their weighted adjacency.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Link>>,
    connections: usize,
}

/// Build a registry from a location list and an edge list.
///
/// Every edge is stored as two arcs so the adjacency is symmetric by
/// construction. Fails if a code is blank or duplicated, if an edge names an
/// unknown location, joins a location to itself, repeats an existing pair, or
/// carries a distance outside `(0, MAX_EDGE_DISTANCE]`.
pub fn load_graph<L, E>(locations: L, edges: E) -> Result<LocationRegistry>
where
    L: IntoIterator<Item = Location>,
    E: IntoIterator<Item = EdgeDefinition>,
{
    let mut registry = LocationRegistry::default();

    for mut location in locations {
        let code = normalize_code(&location.code);
        if code.is_empty() {
            return Err(Error::EmptyLocationCode {
                name: location.name,
            });
        }
        if registry.index.contains_key(&code) {
            return Err(Error::DuplicateLocation { code });
        }
        location.code = code.clone();
        registry.index.insert(code, registry.locations.len());
        registry.locations.push(location);
        registry.adjacency.push(Vec::new());
    }

    for edge in edges {
        registry.insert_edge(edge)?;
    }

    debug!(
        locations = registry.locations.len(),
        connections = registry.connections,
        "location graph loaded"
    );

    Ok(registry)
}

impl LocationRegistry {
    fn insert_edge(&mut self, edge: EdgeDefinition) -> Result<()> {
        let from = normalize_code(&edge.from);
        let to = normalize_code(&edge.to);

        let from_idx = self.index.get(&from).copied();
        let to_idx = self.index.get(&to).copied();
        let (from_idx, to_idx) = match (from_idx, to_idx) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => {
                return Err(Error::DanglingEdge {
                    missing: from.clone(),
                    from,
                    to,
                })
            }
            (_, None) => {
                return Err(Error::DanglingEdge {
                    missing: to.clone(),
                    from,
                    to,
                })
            }
        };

        if !(edge.distance > 0.0 && edge.distance <= MAX_EDGE_DISTANCE) {
            return Err(Error::InvalidDistance {
                from,
                to,
                distance: edge.distance,
            });
        }

        if from_idx == to_idx {
            return Err(Error::SelfLoop { code: from });
        }

        if self.adjacency[from_idx]
            .iter()
            .any(|link| link.target == to_idx)
        {
            return Err(Error::DuplicateEdge { from, to });
        }

        self.adjacency[from_idx].push(Link {
            target: to_idx,
            distance: edge.distance,
        });
        self.adjacency[to_idx].push(Link {
            target: from_idx,
            distance: edge.distance,
        });
        self.connections += 1;
        Ok(())
    }

    /// True iff `code` names a known location.
    pub fn exists(&self, code: &str) -> bool {
        self.index.contains_key(&normalize_code(code))
    }

    /// Look up a location by code.
    pub fn location(&self, code: &str) -> Option<&Location> {
        self.index
            .get(&normalize_code(code))
            .map(|&idx| &self.locations[idx])
    }

    /// Look up a location by code, failing with suggestions when it is unknown.
    pub fn lookup(&self, code: &str) -> Result<&Location> {
        let idx = self.resolve(code, LocationRole::Lookup)?;
        Ok(self.location_at(idx))
    }

    /// Direct neighbors of `code` in edge declaration order.
    ///
    /// An isolated location yields an empty list; an unknown code is an error.
    pub fn neighbors(&self, code: &str) -> Result<Vec<Neighbor<'_>>> {
        let idx = self.resolve(code, LocationRole::Lookup)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|link| Neighbor {
                location: &self.locations[link.target],
                distance: link.distance,
            })
            .collect())
    }

    /// All locations in declaration order.
    pub fn all_locations(&self) -> &[Location] {
        &self.locations
    }

    /// Weight of the direct edge between two locations, if one exists.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        let from = *self.index.get(&normalize_code(from))?;
        let to = *self.index.get(&normalize_code(to))?;
        self.adjacency[from]
            .iter()
            .find(|link| link.target == to)
            .map(|link| link.distance)
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            locations: self.locations.len(),
            connections: self.connections,
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location codes that resemble `query`, best match first.
    ///
    /// Both codes and display names are considered, so `"pharmacy"` suggests
    /// `PHR` and `"PHX"` suggests `PHR` as well.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let code_query = normalize_code(query);
        let name_query = query.trim().to_lowercase();
        if code_query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, usize)> = self
            .locations
            .iter()
            .enumerate()
            .map(|(idx, location)| {
                let by_code = strsim::jaro_winkler(&code_query, &location.code);
                let by_name = strsim::jaro_winkler(&name_query, &location.name.to_lowercase());
                (by_code.max(by_name), idx)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, idx)| self.locations[idx].code.clone())
            .collect()
    }

    pub(crate) fn resolve(&self, code: &str, role: LocationRole) -> Result<usize> {
        self.index
            .get(&normalize_code(code))
            .copied()
            .ok_or_else(|| Error::UnknownLocation {
                code: code.trim().to_string(),
                role,
                suggestions: self.suggest(code, MAX_SUGGESTIONS),
            })
    }

    pub(crate) fn location_at(&self, idx: usize) -> &Location {
        &self.locations[idx]
    }

    pub(crate) fn links(&self, idx: usize) -> &[Link] {
        &self.adjacency[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> LocationRegistry {
        load_graph(
            vec![
                Location::new("A", "Alpha"),
                Location::new("B", "Beta"),
                Location::new("C", "Gamma"),
            ],
            vec![
                EdgeDefinition::new("A", "B", 10.0),
                EdgeDefinition::new("B", "C", 5.0),
            ],
        )
        .expect("valid graph")
    }

    #[test]
    fn adjacency_is_symmetric() {
        let registry = triangle();
        assert_eq!(registry.distance_between("A", "B"), Some(10.0));
        assert_eq!(registry.distance_between("B", "A"), Some(10.0));
        assert_eq!(registry.distance_between("A", "C"), None);
    }

    #[test]
    fn codes_are_normalized() {
        let registry = load_graph(
            vec![Location::new(" er ", "Emergency Room")],
            Vec::<EdgeDefinition>::new(),
        )
        .expect("valid graph");
        assert!(registry.exists("ER"));
        assert!(registry.exists("er"));
        assert_eq!(registry.all_locations()[0].code, "ER");
    }

    #[test]
    fn duplicate_codes_differing_in_case_are_rejected() {
        let err = load_graph(
            vec![Location::new("er", "One"), Location::new("ER", "Two")],
            Vec::<EdgeDefinition>::new(),
        )
        .expect_err("duplicate code");
        assert!(matches!(err, Error::DuplicateLocation { ref code } if code == "ER"));
    }

    #[test]
    fn info_counts_undirected_connections() {
        let info = triangle().info();
        assert_eq!(info.locations, 3);
        assert_eq!(info.connections, 2);
    }

    #[test]
    fn suggest_matches_names_and_codes() {
        let registry = triangle();
        assert_eq!(registry.suggest("gamma", 3).first().map(String::as_str), Some("C"));
        assert!(registry.suggest("zzzzzz", 3).is_empty());
        assert!(registry.suggest("   ", 3).is_empty());
    }
}
