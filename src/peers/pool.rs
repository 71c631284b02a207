use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::routing::ring::HashRing;

use super::client::HttpPeerClient;
use super::protocol::{DEFAULT_BASE_PATH, DEFAULT_REPLICAS, normalize_base_path};
use super::types::{PeerClient, PeerPicker};

/// The default HTTP peer picker.
///
/// Holds the placement ring and one [`HttpPeerClient`] per peer. The whole
/// peer set is replaced atomically by [`set_peers`](HttpPool::set_peers);
/// picking consults the ring and reports "handle locally" whenever the ring
/// names this node itself.
pub struct HttpPool {
    self_id: String,
    base_path: String,
    http: reqwest::Client,
    inner: Mutex<PoolInner>,
}

struct PoolInner {
    ring: HashRing,
    clients: HashMap<String, Arc<HttpPeerClient>>,
}

impl HttpPool {
    /// Creates a pool for the node reachable at `self_id` (its base URL,
    /// e.g. `http://10.0.0.1:8080`), using the default base path.
    pub fn new(self_id: impl Into<String>) -> Self {
        Self::with_base_path(self_id, DEFAULT_BASE_PATH)
    }

    pub fn with_base_path(self_id: impl Into<String>, base_path: &str) -> Self {
        Self {
            self_id: self_id.into(),
            base_path: normalize_base_path(base_path),
            http: reqwest::Client::new(),
            inner: Mutex::new(PoolInner {
                ring: HashRing::new(DEFAULT_REPLICAS, None),
                clients: HashMap::new(),
            }),
        }
    }

    pub fn self_id(&self) -> &str {
        &self.self_id
    }

    /// Replaces the peer set. The list is the full fleet and normally
    /// includes this node; ownership of every key is recomputed from
    /// scratch, so a changed list is a rebalance.
    pub fn set_peers<S: Into<String>>(&self, peers: impl IntoIterator<Item = S>) {
        let mut inner = self.inner.lock();
        inner.ring = HashRing::new(DEFAULT_REPLICAS, None);
        inner.clients.clear();
        for peer in peers {
            let peer = peer.into();
            inner.ring.add([peer.clone()]);
            inner.clients.insert(
                peer.clone(),
                Arc::new(HttpPeerClient::new(&peer, &self.base_path, self.http.clone())),
            );
        }
    }
}

impl PeerPicker for HttpPool {
    fn pick_peer(&self, key: &str) -> Option<Arc<dyn PeerClient>> {
        let inner = self.inner.lock();
        let owner = inner.ring.get(key)?;
        if owner == self.self_id {
            return None;
        }
        tracing::debug!(self_id = %self.self_id, peer = %owner, key, "picked remote owner");
        let client: Arc<dyn PeerClient> = inner.clients.get(owner)?.clone();
        Some(client)
    }
}
