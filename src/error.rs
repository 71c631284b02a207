use thiserror::Error;

/// Errors surfaced by a group lookup.
///
/// The enum is `Clone` because the single-flight coalescer broadcasts one
/// result to every waiting caller. Peer fetch failures never appear here:
/// the coordinator logs them and retries against the origin loader, so a
/// lookup returns at most one error and it is always the authoritative one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// An empty key was passed to `Group::get`.
    #[error("key is required")]
    EmptyKey,

    /// The named group is not registered on the serving node.
    #[error("no such group: {0}")]
    NoSuchGroup(String),

    /// The user-supplied origin loader failed for this key.
    #[error("origin load for {key} failed: {message}")]
    Origin { key: String, message: String },
}

impl CacheError {
    /// Wraps a loader error, keeping only its rendered message so the value
    /// stays clonable across coalesced waiters.
    pub fn origin(key: &str, err: anyhow::Error) -> Self {
        Self::Origin {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
