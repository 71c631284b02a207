#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use async_trait::async_trait;

    use crate::group::loader::Loader;
    use crate::group::manager::CacheManager;
    use crate::peers::client::HttpPeerClient;
    use crate::peers::handlers;
    use crate::peers::pool::HttpPool;
    use crate::peers::protocol::{DEFAULT_BASE_PATH, normalize_base_path};
    use crate::peers::types::{PeerClient, PeerPicker};

    struct EchoLoader;

    #[async_trait]
    impl Loader for EchoLoader {
        async fn load(&self, key: &str) -> Result<Vec<u8>> {
            Ok(format!("value_for_{key}").into_bytes())
        }
    }

    /// Boots a cache node on a loopback port and returns its base URL.
    async fn spawn_node() -> String {
        let manager = Arc::new(CacheManager::new());
        manager.create_group("unit", 1024, Arc::new(EchoLoader));

        let app = handlers::router(manager, DEFAULT_BASE_PATH);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        format!("http://{addr}")
    }

    // ============================================================
    // PROTOCOL TESTS
    // ============================================================

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(normalize_base_path("/_cache/"), "/_cache/");
        assert_eq!(normalize_base_path("_cache"), "/_cache/");
        assert_eq!(normalize_base_path("/_cache"), "/_cache/");
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
    }

    // ============================================================
    // POOL / PICKER TESTS
    // ============================================================

    #[test]
    fn test_pool_never_picks_itself() {
        let pool = HttpPool::new("http://10.0.0.1:8001");
        pool.set_peers(["http://10.0.0.1:8001"]);

        for i in 0..50 {
            assert!(
                pool.pick_peer(&format!("key_{i}")).is_none(),
                "a single-node fleet always handles keys locally"
            );
        }
    }

    #[test]
    fn test_pool_with_no_peers_handles_locally() {
        let pool = HttpPool::new("http://10.0.0.1:8001");
        assert!(pool.pick_peer("anything").is_none());
    }

    #[test]
    fn test_pool_routes_some_keys_to_remote_peers() {
        let pool = HttpPool::new("http://10.0.0.1:8001");
        pool.set_peers([
            "http://10.0.0.1:8001",
            "http://10.0.0.2:8001",
            "http://10.0.0.3:8001",
        ]);

        let remote = (0..300)
            .filter(|i| pool.pick_peer(&format!("key_{i}")).is_some())
            .count();
        // Roughly two thirds of the keyspace belongs to the other nodes.
        assert!(remote > 0, "some keys must route to remote owners");
        assert!(remote < 300, "some keys must stay local");
    }

    #[test]
    fn test_set_peers_replaces_the_fleet() {
        let pool = HttpPool::new("self");
        pool.set_peers(["self", "other"]);
        pool.set_peers(["self"]);

        for i in 0..50 {
            assert!(pool.pick_peer(&format!("key_{i}")).is_none());
        }
    }

    // ============================================================
    // HTTP ROUND-TRIP TESTS (loopback listener)
    // ============================================================

    #[tokio::test]
    async fn test_client_fetches_value_from_peer() {
        let peer_url = spawn_node().await;
        let client = HttpPeerClient::new(&peer_url, DEFAULT_BASE_PATH, reqwest::Client::new());

        let bytes = client.fetch("unit", "Tom").await.expect("fetch hit");
        assert_eq!(bytes.as_ref(), b"value_for_Tom");
    }

    #[tokio::test]
    async fn test_keys_round_trip_through_url_encoding() {
        let peer_url = spawn_node().await;
        let client = HttpPeerClient::new(&peer_url, DEFAULT_BASE_PATH, reqwest::Client::new());

        let key = "a key/with?odd=chars&more";
        let bytes = client.fetch("unit", key).await.expect("fetch hit");
        assert_eq!(bytes.as_ref(), format!("value_for_{key}").as_bytes());
    }

    #[tokio::test]
    async fn test_unknown_group_is_a_client_error() {
        let peer_url = spawn_node().await;
        let client = HttpPeerClient::new(&peer_url, DEFAULT_BASE_PATH, reqwest::Client::new());

        let err = client.fetch("nope", "Tom").await.unwrap_err();
        assert!(err.to_string().contains("404"), "got: {err}");
    }

    #[tokio::test]
    async fn test_pool_end_to_end_against_remote_owner() {
        let peer_url = spawn_node().await;

        // This node is NOT the one serving; every key maps to the remote.
        let pool = HttpPool::new("http://127.0.0.1:1");
        pool.set_peers([peer_url]);

        let client = pool.pick_peer("Tom").expect("remote owner chosen");
        let bytes = client.fetch("unit", "Tom").await.expect("fetch hit");
        assert_eq!(bytes.as_ref(), b"value_for_Tom");
    }
}
