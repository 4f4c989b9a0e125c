//! Embedded client assets.
//!
//! Only the page, its script, and its stylesheet are reachable:
//! `/`, `/index.html`, `/script.js`, `/styles.css`.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "frontend/"]
struct Assets;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(|| serve_asset("index.html")))
        .route("/index.html", get(|| serve_asset("index.html")))
        .route("/script.js", get(|| serve_asset("script.js")))
        .route("/styles.css", get(|| serve_asset("styles.css")))
}

async fn serve_asset(path: &'static str) -> Response {
    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                Body::from(content.data.into_owned()),
            )
                .into_response()
        }
        None => {
            tracing::error!(path, "embedded asset missing");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
