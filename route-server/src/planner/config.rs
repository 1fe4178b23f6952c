//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stops a candidate route may visit.
    /// This is a hard cutoff: longer branches are truncated, not
    /// penalized.
    pub max_depth: usize,

    /// Maximum number of routes to return.
    pub max_results: usize,

    /// Optional bound on the number of search states expanded during
    /// enumeration. When exhausted, enumeration stops with whatever has
    /// been found so far. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_depth: usize, max_results: usize, max_expansions: Option<usize>) -> Self {
        Self {
            max_depth,
            max_results,
            max_expansions,
        }
    }

    /// This configuration with a different depth cutoff.
    pub fn with_max_depth(&self, max_depth: usize) -> Self {
        Self {
            max_depth,
            ..self.clone()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_results: 10,
            max_expansions: None,
        }
    }
}
