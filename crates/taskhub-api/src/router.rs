//! Route definitions for the TaskHub HTTP API.
//!
//! Public routes (`/register`, `/login`, `/health`) sit outside the
//! authentication layer. Everything else is wrapped by it; admin-only
//! handlers additionally take the `AdminUser` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state)
}

/// Account and health endpoints, no token required.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/health", get(handlers::health::health))
}

/// Task and promotion endpoints, bearer token required.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::task::list_tasks).post(handlers::task::create_task),
        )
        .route(
            "/tasks/{id}",
            get(handlers::task::get_task)
                .put(handlers::task::update_task)
                .delete(handlers::task::delete_task),
        )
        .route("/promote/{username}", post(handlers::admin::promote_user))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::authenticate,
        ))
}
