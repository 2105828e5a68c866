use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_router::config::ServerConfig;
use metro_router::network::{delhi_metro, load_network};
use metro_router::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    // Load the network (fail fast if the file is unusable)
    let graph = match &config.network {
        Some(path) => match load_network(path) {
            Ok(graph) => graph,
            Err(e) => {
                error!(path = %path.display(), "failed to load network: {e}");
                std::process::exit(1);
            }
        },
        None => delhi_metro(),
    };
    info!(
        stations = graph.vertex_count(),
        edges = graph.edge_count(),
        "network loaded"
    );

    // Build app state
    let state = AppState::new(graph, config.cost.clone());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr;
    info!("Metro router listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                     - Health check");
    info!("  GET  /stations                   - List stations with codes");
    info!("  GET  /map                        - Show the network map");
    info!("  GET  /distance?from=..&to=..     - Shortest distance");
    info!("  GET  /time?from=..&to=..         - Shortest travel time");
    info!("  GET  /route/distance?from=..&to=.. - Route by distance");
    info!("  GET  /route/time?from=..&to=..   - Route by travel time");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
