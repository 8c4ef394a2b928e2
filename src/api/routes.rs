//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, lru_get_handler, lru_put_handler, rate_limit_middleware, ttl_delete_handler,
    ttl_get_handler, ttl_set_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /ttl` - Store a value with an optional lifetime
/// - `GET /ttl/:key` - Retrieve a live value
/// - `DELETE /ttl/:key` - Delete a value
/// - `PUT /lru` - Store a value in the LRU cache
/// - `GET /lru/:key` - Retrieve and promote a value
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Rate limiting: every route, keyed by the `x-client-id` header
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ttl", put(ttl_set_handler))
        .route("/ttl/:key", get(ttl_get_handler).delete(ttl_delete_handler))
        .route("/lru", put(lru_put_handler))
        .route("/lru/:key", get(lru_get_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
