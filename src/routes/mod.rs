//! HTTP surface.
//!
//! - `files`: Directory listing (GET /api/files?path=)
//! - `assets`: The page and its client script/stylesheet
//!
//! API and static routes sit behind separate rate limiters. Anything else
//! is a plain 404.

pub mod assets;
pub mod files;

use std::sync::Arc;

use axum::{http::StatusCode, middleware, Router};

use crate::archive::SharedArchive;
use crate::rate_limit::{self, RateLimiter, SharedLimiter};

pub struct Limits {
    pub api: SharedLimiter,
    pub assets: SharedLimiter,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            api: Arc::new(RateLimiter::per_minute(rate_limit::API_REQUESTS_PER_MINUTE)),
            assets: Arc::new(RateLimiter::per_minute(rate_limit::STATIC_REQUESTS_PER_MINUTE)),
        }
    }
}

pub fn create_router(archive: SharedArchive, limits: Limits) -> Router {
    let api = files::routes(archive)
        .layer(middleware::from_fn_with_state(limits.api, rate_limit::limit));
    let assets = assets::routes()
        .layer(middleware::from_fn_with_state(limits.assets, rate_limit::limit));

    Router::new()
        .merge(api)
        .merge(assets)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
}
