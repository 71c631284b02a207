//! Peer API Handlers
//!
//! The HTTP endpoint other nodes call to fetch a value this node owns.
//! Translates the wire request into a `Group::get` against the local
//! registry and maps lookup errors onto the protocol's status codes.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::error::CacheError;
use crate::group::manager::CacheManager;

use super::protocol::{CONTENT_TYPE_OCTET_STREAM, normalize_base_path};

/// Builds the router serving `<base_path>{group}/{key}` from `manager`.
/// Mount it on the node's HTTP server alongside any public routes.
pub fn router(manager: Arc<CacheManager>, base_path: &str) -> Router {
    let base = normalize_base_path(base_path);
    Router::new()
        .route(&format!("{base}:group/:key"), get(handle_fetch))
        .layer(Extension(manager))
}

/// Serves one value. Axum has already URL-decoded the path segments, so
/// group and key arrive byte-for-byte as the client sent them.
pub async fn handle_fetch(
    Extension(manager): Extension<Arc<CacheManager>>,
    Path((group_name, key)): Path<(String, String)>,
) -> Response {
    tracing::debug!(group = %group_name, key = %key, "peer fetch");

    let Some(group) = manager.group(&group_name) else {
        return (
            StatusCode::NOT_FOUND,
            CacheError::NoSuchGroup(group_name).to_string(),
        )
            .into_response();
    };

    match group.get(&key).await {
        Ok(view) => (
            [(header::CONTENT_TYPE, CONTENT_TYPE_OCTET_STREAM)],
            view.bytes(),
        )
            .into_response(),
        Err(e @ CacheError::EmptyKey) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
