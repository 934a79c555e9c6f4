use std::sync::Arc;

use todo_config::TodoConfig;
use todo_core::RequestContext;
use todo_store::{Store, open_store};

/// Everything a command handler needs: config, the opened store, and the
/// request context (trace ID + cancellation) for this invocation.
pub struct AppContext {
    pub config: TodoConfig,
    pub store: Arc<dyn Store>,
    pub request: RequestContext,
}

impl AppContext {
    /// Open the configured store. Must run inside the Tokio runtime.
    pub fn init(config: TodoConfig, request: RequestContext) -> Self {
        let store = open_store(&config.store);
        tracing::debug!(
            path = %config.store.resolved_path().display(),
            kind = ?config.store.kind,
            "store opened"
        );
        Self {
            config,
            store,
            request,
        }
    }
}
