use thiserror::Error;

/// Convenient result alias for the wayfinding library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a query referenced a location code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRole {
    /// Starting point of a path query.
    Start,
    /// Destination of a path query.
    Destination,
    /// Any other lookup (neighbors, location details).
    Lookup,
}

impl LocationRole {
    /// Word placed before "location" in error messages; empty for plain lookups.
    fn qualifier(self) -> &'static str {
        match self {
            LocationRole::Start => "start ",
            LocationRole::Destination => "destination ",
            LocationRole::Lookup => "",
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A location in the definition has a blank code.
    #[error("location '{name}' has an empty code")]
    EmptyLocationCode { name: String },

    /// Two locations in the definition normalize to the same code.
    #[error("duplicate location code: {code}")]
    DuplicateLocation { code: String },

    /// An edge references a location that was never declared.
    #[error("edge {from}-{to} references unknown location {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    /// An edge weight is not positive or exceeds the accepted maximum.
    #[error(
        "edge {from}-{to} has invalid distance {distance}; \
         distances must be positive and at most {max}",
        max = crate::registry::MAX_EDGE_DISTANCE
    )]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    /// An edge connects a location to itself.
    #[error("edge {code}-{code} connects a location to itself")]
    SelfLoop { code: String },

    /// The same unordered pair of locations is connected more than once.
    #[error("edge {from}-{to} is declared more than once")]
    DuplicateEdge { from: String, to: String },

    /// A query referenced a location code absent from the registry.
    #[error(
        "unknown {}location: {code}{}",
        .role.qualifier(),
        format_suggestions(.suggestions)
    )]
    UnknownLocation {
        code: String,
        role: LocationRole,
        suggestions: Vec<String>,
    },

    /// The facility definition document could not be parsed.
    #[error("failed to parse facility definition: {0}")]
    Definition(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors raised while validating a graph definition at load time.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyLocationCode { .. }
                | Error::DuplicateLocation { .. }
                | Error::DanglingEdge { .. }
                | Error::InvalidDistance { .. }
                | Error::SelfLoop { .. }
                | Error::DuplicateEdge { .. }
        )
    }

    /// True when a query referenced an unknown location.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UnknownLocation { .. })
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
