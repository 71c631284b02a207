use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use distributed_cache::error::CacheError;
use distributed_cache::group::coordinator::Group;
use distributed_cache::group::loader::LoaderFn;
use distributed_cache::group::manager::CacheManager;
use distributed_cache::peers::handlers;
use distributed_cache::peers::pool::HttpPool;
use distributed_cache::peers::protocol::{CONTENT_TYPE_OCTET_STREAM, DEFAULT_BASE_PATH};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} --bind <addr:port> [--peer <url>]...", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:8001", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:8001 --peer http://127.0.0.1:8001 --peer http://127.0.0.1:8002",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut peers: Vec<String> = vec![];

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--peer" => {
                peers.push(args[i + 1].trim_end_matches('/').to_string());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");
    let self_url = format!("http://{bind_addr}");

    let max_bytes = std::env::var("CACHE_MAX_BYTES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(1 << 20);

    tracing::info!("Starting cache node {}", self_url);
    if peers.is_empty() {
        peers.push(self_url.clone());
        tracing::info!("No peers given, running standalone");
    } else {
        tracing::info!("Peer set: {:?}", peers);
    }

    // 1. Demo origin: an in-memory table standing in for a slow backend.
    let db: Arc<HashMap<String, String>> = Arc::new(
        [("Tom", "630"), ("Jack", "589"), ("Sam", "567")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    let db_ref = db.clone();
    let loader = LoaderFn(move |key: String| {
        let db = db_ref.clone();
        async move {
            tracing::info!(%key, "origin lookup");
            db.get(&key)
                .map(|value| value.clone().into_bytes())
                .ok_or_else(|| anyhow::anyhow!("{key} does not exist"))
        }
    });

    // 2. Cache namespace + peer routing:
    let manager = Arc::new(CacheManager::new());
    let scores = manager.create_group("scores", max_bytes, Arc::new(loader));

    let pool = Arc::new(HttpPool::new(self_url.clone()));
    pool.set_peers(peers.clone());
    scores.register_peers(pool);

    // 3. HTTP router: the peer endpoint plus a small public read API.
    let app = handlers::router(manager.clone(), DEFAULT_BASE_PATH)
        .route("/api/:key", get(handle_api_get))
        .route("/status", get(handle_status))
        .layer(Extension(scores.clone()))
        .layer(Extension(manager.clone()))
        .layer(Extension(NodeInfo {
            self_url: self_url.clone(),
            peers: peers.clone(),
        }));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Clone)]
struct NodeInfo {
    self_url: String,
    peers: Vec<String>,
}

#[derive(Serialize)]
struct StatusResponse {
    self_url: String,
    peers: Vec<String>,
    groups: Vec<String>,
}

async fn handle_status(
    Extension(node): Extension<NodeInfo>,
    Extension(manager): Extension<Arc<CacheManager>>,
) -> Json<StatusResponse> {
    Json(StatusResponse {
        self_url: node.self_url,
        peers: node.peers,
        groups: manager.group_names(),
    })
}

/// Public read endpoint against the demo group.
async fn handle_api_get(
    Extension(group): Extension<Arc<Group>>,
    Path(key): Path<String>,
) -> Response {
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
