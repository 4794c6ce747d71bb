//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Includes `/health` and `/ready`, so the mounted API exposes
/// `/api/health` and `/api/ready` for in-cluster probes.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health::router(state.clone()))
}
