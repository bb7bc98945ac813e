//! Facility wayfinding library entry points.
//!
//! This crate loads a fixed graph of facility locations, validates it once,
//! and answers shortest-path queries over it. Higher-level consumers (CLI,
//! HTTP service) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod facility;
pub mod output;
pub mod path;
pub mod registry;

pub use error::{Error, LocationRole, Result};
pub use facility::{builtin_registry, FacilityDefinition};
pub use output::{
    estimated_minutes, RouteRenderMode, RouteStep, RouteSummary, WALKING_SPEED_METERS_PER_MINUTE,
};
pub use path::{find_path, PathResult};
pub use registry::{
    load_graph, normalize_code, EdgeDefinition, GraphInfo, Location, LocationRegistry, Neighbor,
    MAX_EDGE_DISTANCE,
};
