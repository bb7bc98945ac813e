//! Application state for the HTTP service.
//!
//! This module provides the shared state structure that axum handlers use to
//! access the loaded location registry.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use wayfinder_lib::{Error as LibError, FacilityDefinition, LocationRegistry};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The facility definition failed to parse or validate.
    FacilityLoad(LibError),

    /// Facility definition file not found.
    DefinitionNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FacilityLoad(e) => write!(f, "failed to load facility: {}", e),
            Self::DefinitionNotFound(path) => {
                write!(f, "facility definition not found: {}", path)
            }
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FacilityLoad(e) => Some(e),
            Self::DefinitionNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::FacilityLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. The registry inside is read-only, so
/// concurrent path queries need no coordination.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use wayfinder_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let registry = state.registry();
///     // ... use registry
/// }
///
/// let state = AppState::builtin().unwrap();
/// let app = Router::new()
///     .route("/api/v1/locations", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    service: &'static str,
}

/// Service name reported by health checks until one is set with
/// [`AppState::with_service`].
pub const DEFAULT_SERVICE_NAME: &str = "wayfinder";

struct AppStateInner {
    registry: LocationRegistry,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Load application state from a facility definition file.
    ///
    /// Any validation failure aborts loading; a partially valid facility is
    /// never served.
    pub fn load(definition_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let definition_path = definition_path.as_ref();

        if !definition_path.exists() {
            return Err(AppStateError::DefinitionNotFound(
                definition_path.display().to_string(),
            ));
        }

        tracing::info!(path = %definition_path.display(), "loading facility definition");
        let registry = FacilityDefinition::from_path(definition_path)?.into_registry()?;
        tracing::info!(
            locations = registry.len(),
            connections = registry.info().connections,
            "facility loaded successfully"
        );

        Ok(Self::from_registry(
            registry,
            definition_path.display().to_string(),
        ))
    }

    /// Load the built-in hospital facility.
    pub fn builtin() -> Result<Self, AppStateError> {
        let registry = FacilityDefinition::builtin().into_registry()?;
        tracing::info!(locations = registry.len(), "built-in facility loaded");
        Ok(Self::from_registry(registry, "builtin"))
    }

    /// Create application state from an already validated registry.
    pub fn from_registry(registry: LocationRegistry, source: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                registry,
                source: source.into(),
                loaded_at: Utc::now(),
            }),
            service: DEFAULT_SERVICE_NAME,
        }
    }

    /// Name the service that owns this state in health responses.
    pub fn with_service(mut self, service: &'static str) -> Self {
        self.service = service;
        self
    }

    /// Service name reported by health checks.
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Access the loaded registry.
    pub fn registry(&self) -> &LocationRegistry {
        &self.inner.registry
    }

    /// Where the facility was loaded from (a path, or `builtin`).
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    /// When the facility was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.inner.loaded_at
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("location_count", &self.inner.registry.len())
            .field("source", &self.inner.source)
            .field("service", &self.service)
            .finish()
    }
}
