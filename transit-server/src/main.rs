use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_server::network::{load_path, sample_network};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A malformed network file is a configuration error: fail at startup,
    // never at query time.
    let network = match std::env::var("NETWORK_FILE") {
        Ok(path) => load_path(&path).expect("Failed to load network file"),
        Err(_) => {
            info!("NETWORK_FILE not set, using built-in sample network");
            sample_network()
        }
    };

    info!(
        lines = network.lines().len(),
        transfers = network.transfers().len(),
        "network loaded"
    );

    let state = AppState::new(network);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit route planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /network  - Loaded network summary");
    println!("  POST /plan     - Plan a route between two stations");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
