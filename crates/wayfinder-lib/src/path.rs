use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use crate::error::{LocationRole, Result};
use crate::registry::LocationRegistry;

/// Outcome of a shortest-path query.
///
/// An unreachable destination is a valid outcome: `is_valid()` is false, the
/// path is empty and the distance is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    path: Vec<String>,
    distance: f64,
    valid: bool,
}

impl PathResult {
    fn found(path: Vec<String>, distance: f64) -> Self {
        Self {
            path,
            distance,
            valid: true,
        }
    }

    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: 0.0,
            valid: false,
        }
    }

    /// Location codes from start to destination inclusive.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Sum of edge distances along the path, in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the minimum-distance path between two locations using Dijkstra's
/// algorithm over a binary-heap frontier.
///
/// Fails only when `start` or `end` is not a known location (start is checked
/// first). Among several equally short paths, the one reported is decided by
/// location declaration order and is stable for a given registry.
pub fn find_path(registry: &LocationRegistry, start: &str, end: &str) -> Result<PathResult> {
    let start = registry.resolve(start, LocationRole::Start)?;
    let goal = registry.resolve(end, LocationRole::Destination)?;

    if start == goal {
        let code = registry.location_at(start).code.clone();
        return Ok(PathResult::found(vec![code], 0.0));
    }

    let count = registry.len();
    let mut distances = vec![f64::INFINITY; count];
    let mut parents: Vec<Option<usize>> = vec![None; count];
    let mut settled = vec![false; count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if settled[current] || entry.cost.0 > distances[current] {
            continue;
        }
        settled[current] = true;

        if current == goal {
            break;
        }

        for link in registry.links(current) {
            if settled[link.target] {
                continue;
            }
            let candidate = distances[current] + link.distance;
            if candidate < distances[link.target] {
                distances[link.target] = candidate;
                parents[link.target] = Some(current);
                queue.push(QueueEntry::new(link.target, candidate));
            }
        }
    }

    if !distances[goal].is_finite() {
        debug!(
            start = %registry.location_at(start).code,
            end = %registry.location_at(goal).code,
            "destination unreachable"
        );
        return Ok(PathResult::unreachable());
    }

    let path = reconstruct_path(&parents, start, goal)
        .into_iter()
        .map(|idx| registry.location_at(idx).code.clone())
        .collect::<Vec<_>>();

    debug!(
        hops = path.len().saturating_sub(1),
        distance = distances[goal],
        "shortest path computed"
    );

    Ok(PathResult::found(path, distances[goal]))
}

fn reconstruct_path(parents: &[Option<usize>], start: usize, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with the
        // earlier-declared location winning ties.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
