use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_server::cache::{CacheConfig, PlanCache};
use route_server::loader::{load_network, sample_network};
use route_server::planner::SearchConfig;
use route_server::render::default_markers;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the network from NETWORK_FILE, or fall back to the built-in
    // sample network.
    let network = match std::env::var("NETWORK_FILE") {
        Ok(path) => match load_network(&path) {
            Ok(network) => {
                info!(path = %path, stops = network.stop_count(), "loaded network");
                network
            }
            Err(e) => {
                error!(path = %path, "failed to load network: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => {
            info!("NETWORK_FILE not set, using built-in sample network");
            sample_network()
        }
    };

    let config = SearchConfig::default();
    let markers = default_markers();
    let plans = PlanCache::new(&CacheConfig::default());

    let state = AppState::new(network, config, markers, plans);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    info!("route planner listening on http://{addr}");
    info!("endpoints: GET /health, GET /stops, POST /routes/plan, GET /distances");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
