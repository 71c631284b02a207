//! Peer Wire Conventions
//!
//! The inter-peer protocol is a single HTTP GET:
//! `<base_path><group>/<key>`, group and key URL-encoded.
//!
//! - `200` — hit; body is the raw value as `application/octet-stream`.
//! - `400` — malformed path or empty key.
//! - `404` — the named group does not exist on the serving node.
//! - `500` — the serving node's origin loader failed.

/// Path prefix every peer mounts its fetch endpoint under.
pub const DEFAULT_BASE_PATH: &str = "/_cache/";

/// Virtual nodes per peer on the placement ring.
pub const DEFAULT_REPLICAS: usize = 50;

pub const CONTENT_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Normalizes a base path to `/prefix/` form so pools and routers agree on
/// the exact string regardless of how the operator wrote it.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
