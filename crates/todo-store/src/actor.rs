//! Single-owner store: one worker task holds the snapshot, callers send it
//! messages.
//!
//! The worker owns the in-memory list and the right to write the data file.
//! Callers reach it through three channels:
//!
//! - `reads`: a request carrying a `oneshot` reply for a copy of the snapshot
//! - `writes`: the caller's new list plus a `oneshot` for the persistence result
//! - `stop`: a `oneshot` the worker acknowledges before exiting
//!
//! Requests are serviced one at a time. A write is persisted on the blocking
//! pool but the worker awaits it before taking the next request, so writes never
//! interleave and a reader never sees a list that is not on disk. The snapshot is
//! replaced only after the write succeeded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use todo_core::{Item, RequestContext};
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use crate::Store;
use crate::codec;
use crate::error::StoreError;

/// Tuning knobs for [`ActorStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorOptions {
    /// Bound on each request channel. Callers wait for room when it is full.
    pub queue_capacity: usize,
    /// How long [`ActorStore::close`] waits for the worker to acknowledge.
    pub close_timeout: Duration,
}

impl Default for ActorOptions {
    fn default() -> Self {
        Self {
            queue_capacity: 64,
            close_timeout: Duration::from_millis(250),
        }
    }
}

struct ReadRequest {
    reply: oneshot::Sender<Vec<Item>>,
}

struct WriteRequest {
    items: Vec<Item>,
    trace_id: String,
    cancel: CancellationToken,
    reply: oneshot::Sender<Result<(), StoreError>>,
}

/// Handle to the store worker. Cheap to share behind an `Arc`.
///
/// Dropping the last handle stops the worker.
#[derive(Debug)]
pub struct ActorStore {
    path: PathBuf,
    reads: mpsc::Sender<ReadRequest>,
    writes: mpsc::Sender<WriteRequest>,
    stop: mpsc::Sender<oneshot::Sender<()>>,
    shutdown: CancellationToken,
    close_timeout: Duration,
}

impl ActorStore {
    /// Start a worker on `path` with default options.
    ///
    /// Must be called inside a Tokio runtime.
    #[must_use]
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        Self::spawn_with(path, ActorOptions::default())
    }

    /// Start a worker on `path`. The snapshot is loaded by the worker itself,
    /// so this returns immediately; the first request waits for the load.
    #[must_use]
    pub fn spawn_with(path: impl Into<PathBuf>, options: ActorOptions) -> Self {
        let path = path.into();
        let capacity = options.queue_capacity.max(1);
        let (reads, read_rx) = mpsc::channel(capacity);
        let (writes, write_rx) = mpsc::channel(capacity);
        let (stop, stop_rx) = mpsc::channel(1);
        let shutdown = CancellationToken::new();

        tokio::spawn(run_worker(
            path.clone(),
            read_rx,
            write_rx,
            stop_rx,
            shutdown.clone(),
        ));

        Self {
            path,
            reads,
            writes,
            stop,
            shutdown,
            close_timeout: options.close_timeout,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn submit<T>(
        &self,
        ctx: &RequestContext,
        channel: &mpsc::Sender<T>,
        request: T,
    ) -> Result<(), StoreError> {
        if ctx.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if self.shutdown.is_cancelled() {
            return Err(StoreError::Closed);
        }
        tokio::select! {
            biased;
            () = ctx.cancellation().cancelled() => Err(StoreError::Cancelled),
            sent = channel.send(request) => sent.map_err(|_| StoreError::Closed),
        }
    }

    async fn await_reply<T>(
        ctx: &RequestContext,
        reply: oneshot::Receiver<T>,
    ) -> Result<T, StoreError> {
        tokio::select! {
            biased;
            () = ctx.cancellation().cancelled() => Err(StoreError::Cancelled),
            received = reply => received.map_err(|_| StoreError::Closed),
        }
    }
}

#[async_trait]
impl Store for ActorStore {
    async fn load(&self, ctx: &RequestContext) -> Result<Vec<Item>, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.submit(ctx, &self.reads, ReadRequest { reply }).await?;
        Self::await_reply(ctx, rx).await
    }

    async fn save(&self, ctx: &RequestContext, items: Vec<Item>) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        let request = WriteRequest {
            items,
            trace_id: ctx.trace_id().to_string(),
            cancel: ctx.cancellation().clone(),
            reply,
        };
        self.submit(ctx, &self.writes, request).await?;
        Self::await_reply(ctx, rx).await?
    }

    /// Ask the worker to stop and wait up to the configured timeout for its
    /// acknowledgement. Later calls to `load`/`save` fail with `Closed`.
    async fn close(&self) {
        if self.shutdown.is_cancelled() {
            return;
        }
        let (done, acked) = oneshot::channel();
        let outcome = tokio::time::timeout(self.close_timeout, async {
            self.stop.send(done).await.ok()?;
            acked.await.ok()
        })
        .await;

        match outcome {
            Ok(Some(())) => tracing::debug!(path = %self.path.display(), "store worker stopped"),
            Ok(None) => tracing::debug!(path = %self.path.display(), "store worker already gone"),
            Err(_) => tracing::warn!(
                path = %self.path.display(),
                timeout_ms = self.close_timeout.as_millis(),
                "store worker did not acknowledge shutdown in time"
            ),
        }
        self.shutdown.cancel();
    }
}

impl Drop for ActorStore {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn run_worker(
    path: PathBuf,
    mut reads: mpsc::Receiver<ReadRequest>,
    mut writes: mpsc::Receiver<WriteRequest>,
    mut stop: mpsc::Receiver<oneshot::Sender<()>>,
    shutdown: CancellationToken,
) {
    let mut snapshot = initial_snapshot(&path).await;
    tracing::debug!(path = %path.display(), count = snapshot.len(), "store worker started");

    loop {
        tokio::select! {
            Some(request) = reads.recv() => {
                let _ = request.reply.send(snapshot.clone());
            }
            Some(request) = writes.recv() => {
                apply_write(&path, &mut snapshot, request).await;
            }
            Some(done) = stop.recv() => {
                let _ = done.send(());
                break;
            }
            () = shutdown.cancelled() => break,
        }
    }
    tracing::debug!(path = %path.display(), "store worker exiting");
}

async fn initial_snapshot(path: &Path) -> Vec<Item> {
    let target = path.to_path_buf();
    let loaded = tokio::task::spawn_blocking(move || codec::load(&target))
        .await
        .map_err(|e| StoreError::Worker(e.to_string()))
        .and_then(|result| result);

    loaded.unwrap_or_else(|error| {
        tracing::warn!(%error, path = %path.display(), "initial load failed; starting with empty list");
        Vec::new()
    })
}

async fn apply_write(path: &Path, snapshot: &mut Vec<Item>, request: WriteRequest) {
    let WriteRequest {
        items,
        trace_id,
        cancel,
        reply,
    } = request;

    if cancel.is_cancelled() || reply.is_closed() {
        tracing::debug!(%trace_id, "discarding write from cancelled caller");
        let _ = reply.send(Err(StoreError::Cancelled));
        return;
    }

    let span = tracing::info_span!("store_write", %trace_id, count = items.len());
    let target = path.to_path_buf();
    let persisted = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        codec::save(&target, &items).map(|()| items)
    })
    .await
    .map_err(|e| StoreError::Worker(e.to_string()))
    .and_then(|result| result);

    let outcome = persisted.map(|items| *snapshot = items);
    let _ = reply.send(outcome);
}
