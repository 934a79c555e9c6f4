//! # todo-store
//!
//! Persistence for the to-do list: a whole-file JSON codec and two `Store`
//! implementations that callers (CLI, HTTP handlers) share.
//!
//! - [`ActorStore`] pins the in-memory snapshot to one worker task. Every load
//!   and save is a message to that worker, so writes are totally ordered and
//!   readers only ever receive copies.
//! - [`FileStore`] calls straight through to the codec on every operation.
//!   Each write is a complete document, but concurrent read-modify-write cycles
//!   can lose updates (last rename wins).

pub mod actor;
pub mod codec;
pub mod error;
pub mod file_store;
mod test_support;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use todo_config::{StoreConfig, StoreKind};
use todo_core::{Item, RequestContext};

pub use actor::{ActorOptions, ActorStore};
pub use error::StoreError;
pub use file_store::FileStore;

/// Load/save contract shared by every store implementation.
///
/// `save` takes the list by value: ownership moves to the store, so the caller
/// cannot mutate what was handed over.
#[async_trait]
pub trait Store: Send + Sync {
    /// Return the current list.
    async fn load(&self, ctx: &RequestContext) -> Result<Vec<Item>, StoreError>;

    /// Replace the stored list, returning once it is on disk (or failed).
    async fn save(&self, ctx: &RequestContext, items: Vec<Item>) -> Result<(), StoreError>;

    /// Release background resources. A no-op for stores without any.
    async fn close(&self) {}
}

/// Open the store selected by `config.kind` on `config.resolved_path()`.
///
/// Must be called inside a Tokio runtime (the actor store spawns its worker).
#[must_use]
pub fn open_store(config: &StoreConfig) -> Arc<dyn Store> {
    let path = config.resolved_path();
    match config.kind {
        StoreKind::Actor => Arc::new(ActorStore::spawn_with(path, ActorOptions::from(config))),
        StoreKind::File => Arc::new(FileStore::new(path)),
    }
}

impl From<&StoreConfig> for ActorOptions {
    fn from(config: &StoreConfig) -> Self {
        Self {
            queue_capacity: config.queue_capacity.max(1),
            close_timeout: Duration::from_millis(config.close_timeout_ms),
        }
    }
}
