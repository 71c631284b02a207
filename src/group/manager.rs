use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::Lazy;

use super::coordinator::Group;
use super::loader::Loader;

/// Registry mapping group names to live groups.
///
/// Reads are shared and creation is exclusive (per `DashMap` shard). Prefer
/// passing an explicit manager handle to the code that creates and resolves
/// groups; [`default_manager`] exists so small programs and the peer
/// handler have a process-wide fallback.
#[derive(Default)]
pub struct CacheManager {
    groups: DashMap<String, Arc<Group>>,
}

impl CacheManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a group.
    ///
    /// # Panics
    /// Panics if a group with this name is already registered. Names are
    /// configuration; replacing a live group would strand peers that are
    /// mid-flight against it.
    pub fn create_group(
        &self,
        name: impl Into<String>,
        max_bytes: usize,
        loader: Arc<dyn Loader>,
    ) -> Arc<Group> {
        let name = name.into();
        match self.groups.entry(name.clone()) {
            Entry::Occupied(_) => panic!("group {name} is already registered"),
            Entry::Vacant(slot) => {
                let group = Arc::new(Group::new(name, max_bytes, loader));
                slot.insert(group.clone());
                group
            }
        }
    }

    /// Resolves a group by name.
    pub fn group(&self, name: &str) -> Option<Arc<Group>> {
        self.groups.get(name).map(|entry| entry.value().clone())
    }

    /// Names of all registered groups.
    pub fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|entry| entry.key().clone()).collect()
    }
}

static DEFAULT_MANAGER: Lazy<CacheManager> = Lazy::new(CacheManager::new);

/// The process-wide default manager.
pub fn default_manager() -> &'static CacheManager {
    &DEFAULT_MANAGER
}

/// Creates a group in the default manager.
pub fn new_group(
    name: impl Into<String>,
    max_bytes: usize,
    loader: Arc<dyn Loader>,
) -> Arc<Group> {
    DEFAULT_MANAGER.create_group(name, max_bytes, loader)
}

/// Resolves a group from the default manager.
pub fn get_group(name: &str) -> Option<Arc<Group>> {
    DEFAULT_MANAGER.group(name)
}
