//! Directory listing endpoint.
//!
//! GET /api/files?path=
//!
//! Lists the direct children of `path` (relative to the archive root, empty
//! for the root itself). Folders come first, then files, both by name.
//!
//! Used by: the file grid and breadcrumb navigation in script.js

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::archive::SharedArchive;
use crate::error::Result;
use crate::models::ListingResponse;

pub fn routes(archive: SharedArchive) -> Router {
    Router::new()
        .route("/api/files", get(list_files))
        .with_state(archive)
}

#[derive(Debug, Deserialize)]
struct FilesQuery {
    #[serde(default)]
    path: String,
}

async fn list_files(
    State(archive): State<SharedArchive>,
    Query(query): Query<FilesQuery>,
) -> Result<Json<ListingResponse>> {
    let listing = archive.list(&query.path)?;
    Ok(Json(listing.into()))
}
