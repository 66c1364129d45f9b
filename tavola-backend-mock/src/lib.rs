//! Tavola Backend Mock - in-memory stand-in for the ordering backend
//!
//! Implements the REST surface the admin client consumes, seeded with a
//! deterministic dataset. Used by the client's integration tests and
//! runnable standalone for manual console sessions.

pub mod api;
pub mod state;

pub use state::{AppState, SharedState, StoreData};

use axum::Router;
use tokio::net::TcpListener;

/// Build the mock application router
pub fn app(state: SharedState) -> Router {
    api::router(state)
}

/// Serve the mock on the given listener until the task is dropped
pub async fn run(listener: TcpListener, state: SharedState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}
