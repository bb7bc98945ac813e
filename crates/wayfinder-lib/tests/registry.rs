mod common;

use wayfinder_lib::{
    find_path, load_graph, EdgeDefinition, Error, Location, LocationRole, MAX_EDGE_DISTANCE,
};

use common::{chain, codes, registry};

fn locations(codes: &[&str]) -> Vec<Location> {
    codes
        .iter()
        .map(|code| Location::new(*code, code.to_lowercase()))
        .collect()
}

#[test]
fn exists_reports_known_codes_only() {
    let registry = chain();
    assert!(registry.exists("A"));
    assert!(registry.exists("b"));
    assert!(!registry.exists("D"));
    assert!(!registry.exists(""));
}

#[test]
fn all_locations_keeps_declaration_order() {
    let registry = registry(&["ZED", "ALPHA", "MID"], &[]);
    assert_eq!(codes(&registry), vec!["ZED", "ALPHA", "MID"]);
}

#[test]
fn neighbors_lists_weighted_adjacency() {
    let registry = chain();
    let neighbors: Vec<_> = registry
        .neighbors("B")
        .expect("known location")
        .into_iter()
        .map(|n| (n.location.code.clone(), n.distance))
        .collect();
    assert_eq!(
        neighbors,
        vec![("A".to_string(), 10.0), ("C".to_string(), 5.0)]
    );
}

#[test]
fn neighbors_of_isolated_location_is_empty() {
    let registry = registry(&["A", "B", "LONE"], &[("A", "B", 2.0)]);
    assert!(registry.neighbors("LONE").expect("known").is_empty());
}

#[test]
fn neighbors_of_unknown_location_is_not_found() {
    let registry = chain();
    let err = registry.neighbors("NOPE").expect_err("unknown");
    match err {
        Error::UnknownLocation { code, role, .. } => {
            assert_eq!(code, "NOPE");
            assert_eq!(role, LocationRole::Lookup);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_edge_to_unknown_location() {
    let err = load_graph(
        locations(&["A", "B"]),
        vec![EdgeDefinition::new("A", "GHOST", 5.0)],
    )
    .expect_err("dangling edge");
    assert!(err.is_validation());
    assert!(matches!(err, Error::DanglingEdge { ref missing, .. } if missing == "GHOST"));
}

#[test]
fn rejects_zero_and_negative_weights() {
    for distance in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = load_graph(
            locations(&["A", "B"]),
            vec![EdgeDefinition::new("A", "B", distance)],
        )
        .expect_err("invalid weight");
        assert!(
            matches!(err, Error::InvalidDistance { .. }),
            "distance {distance} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn rejects_weights_beyond_maximum() {
    let err = load_graph(
        locations(&["A", "B", "C"]),
        vec![
            EdgeDefinition::new("A", "B", 1e308),
            EdgeDefinition::new("B", "C", 1e308),
        ],
    )
    .expect_err("oversized weight");
    assert!(err.is_validation());
    assert!(matches!(err, Error::InvalidDistance { distance, .. } if distance == 1e308));
}

#[test]
fn maximum_weights_sum_to_a_finite_distance() {
    let registry = load_graph(
        locations(&["A", "B", "C"]),
        vec![
            EdgeDefinition::new("A", "B", MAX_EDGE_DISTANCE),
            EdgeDefinition::new("B", "C", MAX_EDGE_DISTANCE),
        ],
    )
    .expect("weights at the limit are accepted");
    let result = find_path(&registry, "A", "C").expect("known locations");
    assert!(result.is_valid());
    assert!(result.distance().is_finite());
    assert_eq!(result.distance(), 2.0 * MAX_EDGE_DISTANCE);
}

#[test]
fn lookup_returns_location_or_not_found() {
    let registry = chain();
    assert_eq!(registry.lookup(" b ").expect("known").code, "B");

    let err = registry.lookup("NOPE").expect_err("unknown");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "unknown location: NOPE");
}

#[test]
fn rejects_duplicate_location_code() {
    let err = load_graph(locations(&["A", "B", "A"]), Vec::<EdgeDefinition>::new())
        .expect_err("duplicate");
    assert!(err.is_validation());
    assert!(matches!(err, Error::DuplicateLocation { ref code } if code == "A"));
}

#[test]
fn rejects_blank_location_code() {
    let err = load_graph(
        vec![Location::new("  ", "Nowhere")],
        Vec::<EdgeDefinition>::new(),
    )
    .expect_err("blank");
    assert!(matches!(err, Error::EmptyLocationCode { ref name } if name == "Nowhere"));
}

#[test]
fn rejects_self_loop() {
    let err = load_graph(locations(&["A"]), vec![EdgeDefinition::new("A", "a", 1.0)])
        .expect_err("self loop");
    assert!(matches!(err, Error::SelfLoop { ref code } if code == "A"));
}

#[test]
fn rejects_repeated_pair_in_either_direction() {
    let err = load_graph(
        locations(&["A", "B"]),
        vec![
            EdgeDefinition::new("A", "B", 1.0),
            EdgeDefinition::new("B", "A", 2.0),
        ],
    )
    .expect_err("duplicate edge");
    assert!(matches!(err, Error::DuplicateEdge { .. }));
}

#[test]
fn unknown_lookup_suggests_similar_codes() {
    let registry = wayfinder_lib::builtin_registry().expect("builtin facility");
    let err = registry.neighbors("PHX").expect_err("unknown");
    let message = err.to_string();
    assert!(message.contains("PHX"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("PHR"));
}

#[test]
fn suggestions_match_display_names() {
    let registry = wayfinder_lib::builtin_registry().expect("builtin facility");
    let suggestions = registry.suggest("pharmacy", 3);
    assert_eq!(suggestions.first().map(String::as_str), Some("PHR"));
    assert!(registry.suggest("pharmacy", 1).len() <= 1);
}

#[test]
fn location_lookup_returns_metadata() {
    let registry = wayfinder_lib::builtin_registry().expect("builtin facility");
    let radiology = registry.location("rad").expect("known");
    assert_eq!(radiology.name, "Radiology");
    assert_eq!(radiology.full_name_or_name(), "Radiology & Imaging Center");
    assert!(radiology.icon.is_some());
}
