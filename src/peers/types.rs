use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Fetches a value from one remote peer.
///
/// Implementations carry their transport state (base URL, connection pool)
/// and must tolerate concurrent calls. The response body is fully consumed
/// before `fetch` returns.
#[async_trait]
pub trait PeerClient: Send + Sync {
    async fn fetch(&self, group: &str, key: &str) -> Result<Bytes>;
}

/// Chooses the owning peer for a key.
///
/// Returning `None` means "handle locally": either this node owns the key
/// or no peers are configured.
pub trait PeerPicker: Send + Sync {
    fn pick_peer(&self, key: &str) -> Option<Arc<dyn PeerClient>>;
}
