//! Per-client request limiting.
//!
//! Fixed window per client IP: the first request from an address opens a
//! window, and at most `max_requests` are admitted until it expires. Stale
//! windows are pruned lazily whenever a full window has passed since the
//! last sweep.
//!
//! Used by: API routes (100/min) and static routes (300/min)

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const REJECTION_MESSAGE: &str = "Too many requests from this IP, please try again later.";

pub const API_REQUESTS_PER_MINUTE: u32 = 100;
pub const STATIC_REQUESTS_PER_MINUTE: u32 = 300;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
struct Windows {
    clients: HashMap<IpAddr, Window>,
    last_sweep: Instant,
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    state: Mutex<Windows>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(Windows {
                clients: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    /// Records one request from `client` and reports whether it is admitted.
    pub fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if now.duration_since(state.last_sweep) >= self.window {
            let window = self.window;
            state
                .clients
                .retain(|_, w| now.duration_since(w.started) < window);
            state.last_sweep = now;
        }

        let entry = state.clients.entry(client).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}

pub type SharedLimiter = Arc<RateLimiter>;

/// Client address from the connection, or unspecified when the router is
/// driven without a socket (tests, in-process calls).
fn client_ip(req: &Request<Body>) -> IpAddr {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

pub async fn limit(
    State(limiter): State<SharedLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let client = client_ip(&req);
    if !limiter.check(client) {
        tracing::warn!(%client, path = %req.uri().path(), "rate limit exceeded");
        return (StatusCode::TOO_MANY_REQUESTS, REJECTION_MESSAGE).into_response();
    }
    next.run(req).await
}
