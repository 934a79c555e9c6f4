//! Listener lifecycle: bind, serve until shutdown, drain, close the store.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use todo_config::ServerConfig;
use todo_store::Store;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::app::build_router;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind `config.addr` and serve the API until `shutdown` fires.
///
/// In-flight requests get `config.shutdown_grace_secs` to finish; whatever is
/// still running after that is dropped. The store is closed on the way out.
///
/// # Errors
///
/// Returns `ServerError::Bind` if the address cannot be bound and
/// `ServerError::Serve` if the accept loop fails.
pub async fn serve(
    config: &ServerConfig,
    store: Arc<dyn Store>,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let listener = TcpListener::bind(&config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr.clone(),
            source,
        })?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "listening");

    let result = run(listener, Arc::clone(&store), shutdown, config.shutdown_grace_secs).await;
    store.close().await;
    tracing::info!("server stopped");
    result
}

async fn run(
    listener: TcpListener,
    store: Arc<dyn Store>,
    shutdown: CancellationToken,
    grace_secs: u64,
) -> Result<(), ServerError> {
    let router = build_router(AppState::new(store));
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map_err(ServerError::from),
        () = shutdown.cancelled() => {}
    }

    tracing::info!(grace_secs, "shutdown requested; draining in-flight requests");
    match tokio::time::timeout(Duration::from_secs(grace_secs), &mut server).await {
        Ok(result) => result.map_err(ServerError::from),
        Err(_) => {
            tracing::warn!(grace_secs, "grace period elapsed; dropping remaining connections");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use todo_store::FileStore;

    use super::*;

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let config = ServerConfig {
            addr: "not an address".to_string(),
            ..ServerConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn Store> = Arc::new(FileStore::new(dir.path().join("todos.json")));

        let err = serve(&config, store, CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn stops_when_shutdown_fires() {
        let config = ServerConfig {
            addr: "127.0.0.1:0".to_string(),
            shutdown_grace_secs: 1,
        };
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn Store> = Arc::new(FileStore::new(dir.path().join("todos.json")));
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn({
            let shutdown = shutdown.clone();
            async move { serve(&config, store, shutdown).await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown.cancel();

        handle.await.unwrap().unwrap();
    }
}
