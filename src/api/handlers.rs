//! API Handlers
//!
//! HTTP request handlers for the TTL cache, LRU cache and health endpoints,
//! plus the rate-limit middleware in front of them.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
    Json,
};
use tracing::debug;

use crate::cache::{SyncLruCache, TtlCache};
use crate::config::Config;
use crate::error::{EvictError, Result};
use crate::limiter::SlidingWindowRateLimiter;
use crate::models::{
    DeleteResponse, HealthResponse, LruGetResponse, LruPutRequest, LruPutResponse, TtlGetResponse,
    TtlSetRequest, TtlSetResponse,
};

/// Header identifying the client for rate limiting
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Client key used when the request carries no identifier
pub const ANONYMOUS_CLIENT: &str = "anonymous";

/// Application state shared across all handlers.
///
/// Each store is constructed once and handed to the router here; nothing is
/// global.
#[derive(Clone)]
pub struct AppState {
    pub ttl: Arc<TtlCache<String, String>>,
    pub lru: Arc<SyncLruCache<String, String>>,
    pub limiter: Arc<SlidingWindowRateLimiter<String>>,
}

impl AppState {
    /// Creates a new AppState from already constructed stores.
    pub fn new(
        ttl: TtlCache<String, String>,
        lru: SyncLruCache<String, String>,
        limiter: SlidingWindowRateLimiter<String>,
    ) -> Self {
        Self {
            ttl: Arc::new(ttl),
            lru: Arc::new(lru),
            limiter: Arc::new(limiter),
        }
    }

    /// Builds every store from configuration.
    ///
    /// Must be called inside a tokio runtime, since the TTL cache and the
    /// limiter start their sweeps immediately.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let ttl = TtlCache::new(config.ttl_sweep_interval())?;
        let lru = SyncLruCache::new(config.lru_capacity);
        let limiter = SlidingWindowRateLimiter::new(
            config.rate_window(),
            config.rate_limit,
            config.rate_sweep_interval(),
        )?;

        Ok(Self::new(ttl, lru, limiter))
    }

    /// Stops the background sweeps of every store.
    pub fn shutdown(&self) {
        self.ttl.shutdown();
        self.limiter.shutdown();
    }
}

/// Middleware admitting each request through the sliding-window limiter.
///
/// Clients are told apart by the `x-client-id` header.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let client = client_id(request.headers());

    if !state.limiter.is_allowed(client.as_str()) {
        debug!("Rate limit exceeded for client {}", client);
        return Err(EvictError::RateLimited(client));
    }

    Ok(next.run(request).await)
}

fn client_id(headers: &HeaderMap) -> String {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

/// Handler for PUT /ttl
///
/// Stores a key-value pair; a missing or zero `ttl_ms` never expires.
pub async fn ttl_set_handler(
    State(state): State<AppState>,
    Json(req): Json<TtlSetRequest>,
) -> Result<Json<TtlSetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(EvictError::InvalidRequest(error_msg));
    }

    let ttl = Duration::from_millis(req.ttl_ms.unwrap_or(0));
    state.ttl.set(req.key.clone(), req.value, ttl);

    Ok(Json(TtlSetResponse::new(req.key)))
}

/// Handler for GET /ttl/:key
pub async fn ttl_get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TtlGetResponse>> {
    let (value, ttl) = state
        .ttl
        .get_with_ttl(key.as_str())
        .ok_or_else(|| EvictError::NotFound(key.clone()))?;

    let ttl_remaining_ms = ttl.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
    Ok(Json(TtlGetResponse::new(key, value, ttl_remaining_ms)))
}

/// Handler for DELETE /ttl/:key
pub async fn ttl_delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if !state.ttl.delete(key.as_str()) {
        return Err(EvictError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for PUT /lru
pub async fn lru_put_handler(
    State(state): State<AppState>,
    Json(req): Json<LruPutRequest>,
) -> Result<Json<LruPutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(EvictError::InvalidRequest(error_msg));
    }

    let evicted = state.lru.put(req.key.clone(), req.value).map(|(k, _)| k);
    if let Some(evicted_key) = &evicted {
        debug!("LRU cache evicted key {}", evicted_key);
    }

    Ok(Json(LruPutResponse::new(req.key, evicted)))
}

/// Handler for GET /lru/:key
///
/// A hit promotes the key to most recently used.
pub async fn lru_get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LruGetResponse>> {
    let value = state
        .lru
        .get(key.as_str())
        .ok_or_else(|| EvictError::NotFound(key.clone()))?;

    Ok(Json(LruGetResponse::new(key, value)))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        state.ttl.len(),
        state.lru.len(),
        state.limiter.tracked_keys(),
    ))
}
