use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::cache::byteview::ByteView;
use crate::cache::lru::LruStore;
use crate::error::{CacheError, Result};
use crate::flight::coalescer::FlightGroup;
use crate::peers::types::{PeerClient, PeerPicker};

use super::loader::Loader;

/// One cache namespace: a name, a byte budget, an origin loader, and the
/// machinery that turns those into coalesced, peer-aware lookups.
///
/// Construct through `CacheManager::create_group`; groups are always
/// shared behind an `Arc`.
pub struct Group {
    name: String,
    loader: Arc<dyn Loader>,
    main_cache: Mutex<LruStore>,
    flight: FlightGroup<Result<ByteView>>,
    peers: OnceLock<Arc<dyn PeerPicker>>,
}

impl Group {
    pub(crate) fn new(name: String, max_bytes: usize, loader: Arc<dyn Loader>) -> Self {
        Self {
            name,
            loader,
            main_cache: Mutex::new(LruStore::new(max_bytes)),
            flight: FlightGroup::new(),
            peers: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Installs the peer picker. May be called at most once; the peer set
    /// must be wired up before the group starts routing lookups.
    ///
    /// # Panics
    /// Panics on a second registration.
    pub fn register_peers(&self, picker: Arc<dyn PeerPicker>) {
        if self.peers.set(picker).is_err() {
            panic!("register_peers called more than once for group {}", self.name);
        }
    }

    /// Looks up `key`, consulting in order the local store, the owning
    /// peer, and the origin loader. Concurrent lookups for the same key
    /// share a single fetch.
    pub async fn get(&self, key: &str) -> Result<ByteView> {
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }

        if let Some(hit) = self.main_cache.lock().get(key) {
            tracing::debug!(group = %self.name, key, "cache hit");
            return Ok(hit);
        }

        self.load(key).await
    }

    async fn load(&self, key: &str) -> Result<ByteView> {
        self.flight.execute(key, || self.load_uncoalesced(key)).await
    }

    /// The single fetch behind the coalescer: try the owning peer, fall
    /// back to the origin loader.
    async fn load_uncoalesced(&self, key: &str) -> Result<ByteView> {
        if let Some(picker) = self.peers.get() {
            if let Some(peer) = picker.pick_peer(key) {
                match self.fetch_from_peer(peer.as_ref(), key).await {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        tracing::warn!(
                            group = %self.name,
                            key,
                            error = %e,
                            "peer fetch failed, falling back to origin"
                        );
                    }
                }
            }
        }
        self.load_from_origin(key).await
    }

    /// Fetches from a remote owner. The value is returned as-is and not
    /// admitted locally: the owner is the authoritative cache for this key
    /// and mirroring it here would multiply its residency across the fleet.
    async fn fetch_from_peer(&self, peer: &dyn PeerClient, key: &str) -> anyhow::Result<ByteView> {
        let bytes = peer.fetch(&self.name, key).await?;
        Ok(ByteView::from(bytes))
    }

    /// Invokes the origin loader and admits the result to the local store.
    async fn load_from_origin(&self, key: &str) -> Result<ByteView> {
        let bytes = self
            .loader
            .load(key)
            .await
            .map_err(|e| CacheError::origin(key, e))?;
        let value = ByteView::from(bytes);
        self.main_cache.lock().add(key, value.clone());
        Ok(value)
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self, key: &str) -> bool {
        self.main_cache.lock().get(key).is_some()
    }
}
