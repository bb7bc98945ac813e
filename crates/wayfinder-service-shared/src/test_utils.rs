//! Test utilities for service handler testing.
//!
//! Handlers are exercised against the built-in hospital facility so tests
//! need no files on disk.

use std::sync::OnceLock;

use wayfinder_lib::{load_graph, EdgeDefinition, Location, LocationRegistry};

use crate::state::AppState;

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared test AppState backed by the built-in facility.
///
/// # Panics
///
/// Panics if the built-in facility fails validation.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            AppState::builtin()
                .unwrap_or_else(|e| panic!("failed to load built-in facility: {}", e))
        })
        .clone()
}

/// State with two disconnected wings, for "no route" scenarios.
///
/// `NA - NB` and `SA - SB` share no edges.
pub fn disconnected_state() -> AppState {
    let locations = vec![
        Location::new("NA", "North A"),
        Location::new("NB", "North B"),
        Location::new("SA", "South A"),
        Location::new("SB", "South B"),
    ];
    let edges = vec![
        EdgeDefinition::new("NA", "NB", 40.0),
        EdgeDefinition::new("SA", "SB", 60.0),
    ];
    let registry = load_graph(locations, edges)
        .unwrap_or_else(|e| panic!("disconnected fixture is invalid: {}", e));
    AppState::from_registry(registry, "disconnected-fixture")
}

/// State with no locations at all.
pub fn empty_state() -> AppState {
    AppState::from_registry(LocationRegistry::default(), "empty-fixture")
}

/// Known location codes in the built-in facility.
pub mod fixture_locations {
    /// Parking garage, the usual starting point.
    pub const PARKING: &str = "PKG";

    /// Main entrance.
    pub const MAIN_ENTRANCE: &str = "ME";

    /// Emergency room.
    pub const EMERGENCY: &str = "ER";

    /// Pharmacy.
    pub const PHARMACY: &str = "PHR";

    /// Cafeteria.
    pub const CAFETERIA: &str = "CAF";
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_loads_successfully() {
        let state = test_state();
        assert_eq!(state.registry().len(), 11);
        assert!(state.registry().exists(fixture_locations::EMERGENCY));
    }

    #[test]
    fn test_state_is_cached() {
        let a = test_state();
        let b = test_state();
        assert_eq!(a.loaded_at(), b.loaded_at());
    }

    #[test]
    fn test_disconnected_state_has_two_wings() {
        let state = disconnected_state();
        assert_eq!(state.registry().info().connections, 2);
        assert!(state.registry().distance_between("NA", "SA").is_none());
    }

    #[test]
    fn test_empty_state() {
        assert!(empty_state().registry().is_empty());
    }

    #[test]
    fn test_request_id_unique() {
        let id1 = test_request_id();
        let id2 = test_request_id();
        assert_ne!(id1, id2);
        assert!(id1.starts_with("test-"));
    }
}
