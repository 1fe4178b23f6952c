//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::PlanCache;
use crate::network::TransitNetwork;
use crate::planner::SearchConfig;
use crate::render::LineMarkers;

/// Shared application state.
///
/// The network is read-only after construction, so every field is
/// safely shared across request handlers without locking.
#[derive(Clone)]
pub struct AppState {
    /// The transit network, built once at startup
    pub network: Arc<TransitNetwork>,

    /// Planner configuration
    pub config: Arc<SearchConfig>,

    /// Line display markers
    pub markers: Arc<LineMarkers>,

    /// Cache of plan results
    pub plans: Arc<PlanCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: TransitNetwork,
        config: SearchConfig,
        markers: LineMarkers,
        plans: PlanCache,
    ) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            markers: Arc::new(markers),
            plans: Arc::new(plans),
        }
    }
}
