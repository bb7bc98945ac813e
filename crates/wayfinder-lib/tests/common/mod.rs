#![allow(dead_code)]

use wayfinder_lib::{load_graph, EdgeDefinition, Location, LocationRegistry};

/// Build a registry from bare codes and `(from, to, distance)` triples.
pub fn registry(codes: &[&str], edges: &[(&str, &str, f64)]) -> LocationRegistry {
    load_graph(
        codes.iter().map(|code| Location::new(*code, format!("Location {code}"))),
        edges
            .iter()
            .map(|&(from, to, distance)| EdgeDefinition::new(from, to, distance)),
    )
    .expect("fixture graph is valid")
}

/// A–B (10), B–C (5); A–C absent.
pub fn chain() -> LocationRegistry {
    registry(&["A", "B", "C"], &[("A", "B", 10.0), ("B", "C", 5.0)])
}

/// Small graph with several competing routes plus an isolated pair.
pub fn mesh() -> LocationRegistry {
    registry(
        &["A", "B", "C", "D", "E", "F", "X", "Y"],
        &[
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
            ("C", "E", 10.0),
            ("D", "E", 2.0),
            ("D", "F", 6.0),
            ("E", "F", 2.0),
            ("X", "Y", 3.0),
        ],
    )
}

/// Sum of edge weights along `path`, panicking if a leg has no direct edge.
pub fn path_weight(registry: &LocationRegistry, path: &[String]) -> f64 {
    path.windows(2)
        .map(|leg| {
            registry
                .distance_between(&leg[0], &leg[1])
                .unwrap_or_else(|| panic!("no edge between {} and {}", leg[0], leg[1]))
        })
        .sum()
}

/// Minimum weight over every simple path from `start` to `end`, found by
/// exhaustive depth-first enumeration.
pub fn brute_force_distance(registry: &LocationRegistry, start: &str, end: &str) -> Option<f64> {
    fn walk(
        registry: &LocationRegistry,
        current: &str,
        end: &str,
        visited: &mut Vec<String>,
        so_far: f64,
        best: &mut Option<f64>,
    ) {
        if current == end {
            if best.map_or(true, |b| so_far < b) {
                *best = Some(so_far);
            }
            return;
        }
        let neighbors = registry.neighbors(current).expect("known location");
        for neighbor in neighbors {
            let code = neighbor.location.code.clone();
            if visited.contains(&code) {
                continue;
            }
            visited.push(code.clone());
            walk(registry, &code, end, visited, so_far + neighbor.distance, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start.to_string()];
    walk(registry, start, end, &mut visited, 0.0, &mut best);
    best
}

pub fn codes(registry: &LocationRegistry) -> Vec<String> {
    registry
        .all_locations()
        .iter()
        .map(|location| location.code.clone())
        .collect()
}
