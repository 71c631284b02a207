use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Total function from bytes to a 32-bit ring position.
pub type HashFn = Box<dyn Fn(&[u8]) -> u32 + Send + Sync>;

/// Consistent-hash ring over a set of peer identifiers.
///
/// Holds `replicas` virtual nodes per peer in an ascending hash array plus
/// a reverse map from virtual-node hash to peer. Lookups are O(log n)
/// binary searches; membership changes rebuild only the affected entries.
pub struct HashRing {
    replicas: usize,
    hash: HashFn,
    keys: Vec<u32>,
    owners: HashMap<u32, String>,
}

impl HashRing {
    /// Creates an empty ring. `hash` defaults to the standard hasher
    /// truncated to 32 bits when not supplied.
    pub fn new(replicas: usize, hash: Option<HashFn>) -> Self {
        Self {
            replicas,
            hash: hash.unwrap_or_else(|| Box::new(default_hash)),
            keys: Vec::new(),
            owners: HashMap::new(),
        }
    }

    /// Adds peers to the ring, `replicas` virtual nodes each. A virtual
    /// node hashes the decimal replica index concatenated with the peer id.
    /// On a hash collision the first-inserted peer keeps the position.
    pub fn add<S: Into<String>>(&mut self, peers: impl IntoIterator<Item = S>) {
        for peer in peers {
            let peer = peer.into();
            for replica in 0..self.replicas {
                let hash = (self.hash)(format!("{replica}{peer}").as_bytes());
                self.keys.push(hash);
                self.owners.entry(hash).or_insert_with(|| peer.clone());
            }
        }
        // Stable sort keeps first-inserted virtual nodes ahead on ties.
        self.keys.sort();
    }

    /// Removes a peer's virtual nodes from the ring.
    pub fn remove(&mut self, peer: &str) {
        for replica in 0..self.replicas {
            let hash = (self.hash)(format!("{replica}{peer}").as_bytes());
            if let Ok(idx) = self.keys.binary_search(&hash) {
                self.keys.remove(idx);
            }
            self.owners.remove(&hash);
        }
    }

    /// Returns the peer owning `key`: the one mapped by the first virtual
    /// node whose hash is >= the key's hash, wrapping around past the end.
    /// `None` on an empty ring.
    pub fn get(&self, key: &str) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let hash = (self.hash)(key.as_bytes());
        let mut idx = self.keys.partition_point(|&k| k < hash);
        if idx == self.keys.len() {
            idx = 0;
        }
        self.owners.get(&self.keys[idx]).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn default_hash(data: &[u8]) -> u32 {
    let mut hasher = DefaultHasher::new();
    data.hash(&mut hasher);
    hasher.finish() as u32
}
