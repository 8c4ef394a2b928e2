//! API Module
//!
//! HTTP handlers and routing for the demo server exposing the stores.
//!
//! # Endpoints
//! - `PUT /ttl`, `GET /ttl/:key`, `DELETE /ttl/:key` - TTL cache
//! - `PUT /lru`, `GET /lru/:key` - LRU cache
//! - `GET /health` - Health check endpoint
//!
//! Every endpoint sits behind the sliding-window rate limiter.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
