//! Static facility definitions.
//!
//! A facility definition is the load-once description of a site: its
//! locations and the walking distances between them. Definitions come either
//! from a JSON document or from the built-in hospital layout.
//!
//! ```json
//! {
//!   "locations": [
//!     { "code": "ER", "name": "Emergency Room", "icon": "🚑" },
//!     { "code": "RAD", "name": "Radiology", "full_name": "Radiology & Imaging Center" }
//!   ],
//!   "edges": [
//!     { "from": "ER", "to": "RAD", "distance": 60 }
//!   ]
//! }
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::registry::{load_graph, EdgeDefinition, Location, LocationRegistry};

/// Locations and edges describing one facility.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FacilityDefinition {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

impl FacilityDefinition {
    /// Load a definition from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let definition = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            locations = definition.locations.len(),
            edges = definition.edges.len(),
            "facility definition read"
        );
        Ok(definition)
    }

    /// Load a definition from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the definition and build the registry.
    pub fn into_registry(self) -> Result<LocationRegistry> {
        load_graph(self.locations, self.edges)
    }

    /// The hospital layout served by default.
    pub fn builtin() -> Self {
        const LOCATIONS: &[(&str, &str, &str, &str)] = &[
            ("PKG", "Parking Garage", "Parking Garage", "🅿️"),
            ("ME", "Main Entrance", "Main Entrance & Reception", "🚪"),
            ("ER", "Emergency Room", "Emergency Room", "🚑"),
            ("OPC", "Outpatient Clinic", "Outpatient Clinic", "🏥"),
            ("RAD", "Radiology", "Radiology & Imaging Center", "🩻"),
            ("LAB", "Laboratory", "Laboratory", "🧪"),
            ("SUR", "Surgical Center", "Surgical Center", "🔬"),
            ("IWA", "Inpatient Ward A", "Inpatient Ward A", "🛏️"),
            ("IWB", "Inpatient Ward B", "Inpatient Ward B", "🏨"),
            ("PHR", "Pharmacy", "Pharmacy", "💊"),
            ("CAF", "Cafeteria", "Cafeteria", "🍽️"),
        ];

        // Distances in meters.
        const EDGES: &[(&str, &str, f64)] = &[
            ("PKG", "ME", 100.0),
            ("ME", "OPC", 120.0),
            ("ME", "CAF", 50.0),
            ("ME", "IWA", 150.0),
            ("ER", "RAD", 60.0),
            ("ER", "SUR", 90.0),
            ("OPC", "LAB", 70.0),
            ("OPC", "PHR", 80.0),
            ("RAD", "LAB", 40.0),
            ("RAD", "IWA", 110.0),
            ("RAD", "IWB", 130.0),
            ("LAB", "PHR", 50.0),
            ("IWA", "IWB", 80.0),
            ("IWA", "SUR", 100.0),
            ("IWB", "SUR", 70.0),
            ("CAF", "IWA", 140.0),
        ];

        Self {
            locations: LOCATIONS
                .iter()
                .map(|&(code, name, full_name, icon)| {
                    Location::new(code, name)
                        .with_full_name(full_name)
                        .with_icon(icon)
                })
                .collect(),
            edges: EDGES
                .iter()
                .map(|&(from, to, distance)| EdgeDefinition::new(from, to, distance))
                .collect(),
        }
    }
}

/// Build the registry for the built-in hospital layout.
pub fn builtin_registry() -> Result<LocationRegistry> {
    FacilityDefinition::builtin().into_registry()
}
