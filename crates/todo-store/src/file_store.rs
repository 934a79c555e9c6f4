//! Call-through store: every operation goes to disk.
//!
//! No in-memory state. Concurrent writers race at the filesystem level; the
//! atomic rename in [`crate::codec::save`] keeps each document whole, but two
//! overlapping load-modify-save cycles lose one of the updates. Fine for the
//! single-shot CLI; long-running servers should use [`crate::ActorStore`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use todo_core::{Item, RequestContext};
use tracing::Instrument;

use crate::Store;
use crate::codec;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Store for FileStore {
    async fn load(&self, ctx: &RequestContext) -> Result<Vec<Item>, StoreError> {
        let path = self.path.clone();
        run_blocking(ctx, move || codec::load(&path))
            .instrument(tracing::debug_span!("file_store_load", trace_id = %ctx.trace_id()))
            .await
    }

    async fn save(&self, ctx: &RequestContext, items: Vec<Item>) -> Result<(), StoreError> {
        let path = self.path.clone();
        run_blocking(ctx, move || codec::save(&path, &items))
            .instrument(tracing::debug_span!("file_store_save", trace_id = %ctx.trace_id()))
            .await
    }
}

/// Run disk I/O on the blocking pool, giving up early if `ctx` is cancelled.
///
/// A write that already started keeps running to completion on its thread.
async fn run_blocking<T, F>(ctx: &RequestContext, op: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    if ctx.is_cancelled() {
        return Err(StoreError::Cancelled);
    }
    let span = tracing::Span::current();
    let handle = tokio::task::spawn_blocking(move || span.in_scope(op));

    tokio::select! {
        biased;
        () = ctx.cancellation().cancelled() => Err(StoreError::Cancelled),
        joined = handle => joined.map_err(|e| StoreError::Worker(e.to_string()))?,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{items_with_ids, temp_data_path};

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let (_dir, path) = temp_data_path();
        let store = FileStore::new(&path);
        let items = store.load(&RequestContext::new()).await.unwrap();
        assert!(items.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let (_dir, path) = temp_data_path();
        let store = FileStore::new(&path);
        let ctx = RequestContext::new();
        let items = items_with_ids(&[1, 2, 3]);

        store.save(&ctx, items.clone()).await.unwrap();
        assert_eq!(store.load(&ctx).await.unwrap(), items);
    }

    #[tokio::test]
    async fn every_load_rereads_disk() {
        let (_dir, path) = temp_data_path();
        let store = FileStore::new(&path);
        let ctx = RequestContext::new();

        store.save(&ctx, items_with_ids(&[1])).await.unwrap();
        codec::save(&path, &items_with_ids(&[1, 2])).unwrap();

        assert_eq!(store.load(&ctx).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn cancelled_context_is_rejected() {
        let (_dir, path) = temp_data_path();
        let store = FileStore::new(&path);
        let ctx = RequestContext::new();
        ctx.cancel();

        assert!(matches!(store.load(&ctx).await, Err(StoreError::Cancelled)));
        assert!(matches!(
            store.save(&ctx, items_with_ids(&[1])).await,
            Err(StoreError::Cancelled)
        ));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn decode_errors_surface() {
        let (_dir, path) = temp_data_path();
        std::fs::write(&path, b"[{]").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(&RequestContext::new()).await,
            Err(StoreError::Decode { .. })
        ));
    }
}
