use std::fmt::Write;

use serde::Serialize;

use crate::path::PathResult;
use crate::registry::LocationRegistry;

/// Average walking speed used to estimate travel time.
pub const WALKING_SPEED_METERS_PER_MINUTE: f64 = 50.0;

/// Whole minutes needed to walk `distance` meters, rounded up.
pub fn estimated_minutes(distance: f64) -> u64 {
    if distance <= 0.0 || !distance.is_finite() {
        return 0;
    }
    (distance / WALKING_SPEED_METERS_PER_MINUTE).ceil() as u64
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// One location along a rendered route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Distance of the leg arriving at this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Structured representation of a path query that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub valid: bool,
    pub hops: usize,
    pub distance: f64,
    pub estimated_time_minutes: u64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Resolve names and leg distances for a computed path.
    pub fn from_path(registry: &LocationRegistry, result: &PathResult) -> Self {
        let mut previous: Option<&str> = None;
        let steps = result
            .path()
            .iter()
            .enumerate()
            .map(|(index, code)| {
                let location = registry.location(code);
                let step = RouteStep {
                    index,
                    code: code.clone(),
                    name: location
                        .map(|l| l.name.clone())
                        .unwrap_or_else(|| code.clone()),
                    icon: location.and_then(|l| l.icon.clone()),
                    distance: previous.and_then(|prev| registry.distance_between(prev, code)),
                };
                previous = Some(code.as_str());
                step
            })
            .collect();

        Self {
            valid: result.is_valid(),
            hops: result.hop_count(),
            distance: result.distance(),
            estimated_time_minutes: estimated_minutes(result.distance()),
            steps,
        }
    }

    /// Display names along the route, in order.
    pub fn step_names(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.name.clone()).collect()
    }

    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if !self.valid {
            let _ = writeln!(buffer, "No route exists between the selected locations.");
            return buffer;
        }

        let (start, goal) = self.endpoints();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops):",
            start, goal, self.hops
        );
        for step in &self.steps {
            match step.distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({}) +{:.0}m",
                        step.index, step.name, step.code, distance
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {} ({})", step.index, step.name, step.code);
                }
            }
        }
        let _ = writeln!(buffer, "\nTotal distance: {:.0}m", self.distance);
        let _ = writeln!(
            buffer,
            "Estimated walking time: {} min",
            self.estimated_time_minutes
        );
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        if !self.valid {
            let _ = writeln!(buffer, "**No route** between the selected locations.");
            return buffer;
        }

        let (start, goal) = self.endpoints();
        let _ = writeln!(
            buffer,
            "**Route** — _{} → {}_ ({:.0}m, ~{} min)",
            start, goal, self.distance, self.estimated_time_minutes
        );
        for step in &self.steps {
            let icon = step.icon.as_deref().unwrap_or("📍");
            let _ = writeln!(
                buffer,
                "* {:>2}. {} **{}** (`{}`)",
                step.index, icon, step.name, step.code
            );
        }
        buffer
    }

    fn endpoints(&self) -> (&str, &str) {
        let start = self.steps.first().map(|s| s.name.as_str()).unwrap_or("<unknown>");
        let goal = self.steps.last().map(|s| s.name.as_str()).unwrap_or("<unknown>");
        (start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_minutes_rounds_up() {
        assert_eq!(estimated_minutes(0.0), 0);
        assert_eq!(estimated_minutes(1.0), 1);
        assert_eq!(estimated_minutes(50.0), 1);
        assert_eq!(estimated_minutes(51.0), 2);
        assert_eq!(estimated_minutes(270.0), 6);
    }

    #[test]
    fn estimated_minutes_ignores_non_finite() {
        assert_eq!(estimated_minutes(f64::INFINITY), 0);
        assert_eq!(estimated_minutes(f64::NAN), 0);
    }
}
