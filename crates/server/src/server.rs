use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::RwLock;

use crate::cash_flows;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
    pub seed_path: Arc<PathBuf>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(cash_flows::index))
        .route("/cash-flows/setup", post(cash_flows::setup))
        .route("/cash-flows", get(cash_flows::list).post(cash_flows::create))
        .route("/cash-flows/types", get(cash_flows::types))
        .route("/cash-flows/sources", get(cash_flows::sources))
        .route("/cash-flows/labels", get(cash_flows::labels))
        .route(
            "/cash-flows/{id}",
            get(cash_flows::get_by_id)
                .put(cash_flows::update)
                .delete(cash_flows::remove),
        )
        .with_state(state)
}

pub async fn run(engine: Engine, seed_path: PathBuf) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, seed_path, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    seed_path: PathBuf,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
        seed_path: Arc::new(seed_path),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    seed_path: PathBuf,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, seed_path, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
