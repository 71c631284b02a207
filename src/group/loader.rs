use std::future::Future;

use anyhow::Result;
use async_trait::async_trait;

/// Computes the authoritative value for a key on a cache miss.
///
/// Implementations are supplied by the host program (a database query, a
/// file read, an upstream API call) and must be safe for concurrent use;
/// the coalescer guarantees at most one in-flight load per key per group,
/// but different keys load in parallel.
#[async_trait]
pub trait Loader: Send + Sync {
    async fn load(&self, key: &str) -> Result<Vec<u8>>;
}

/// Adapter that lets a plain async closure serve as a [`Loader`].
pub struct LoaderFn<F>(pub F);

#[async_trait]
impl<F, Fut> Loader for LoaderFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<u8>>> + Send + 'static,
{
    async fn load(&self, key: &str) -> Result<Vec<u8>> {
        (self.0)(key.to_string()).await
    }
}
