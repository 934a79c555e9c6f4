use anyhow::Context;

use crate::context::AppContext;

/// Run the HTTP API on the shared store until the invocation is cancelled
/// (Ctrl+C / SIGTERM).
pub async fn run(addr: Option<String>, ctx: &AppContext) -> anyhow::Result<()> {
    let mut server = ctx.config.server.clone();
    if let Some(addr) = addr {
        server.addr = addr;
    }

    let shutdown = ctx.request.cancellation().clone();
    todo_api::serve(&server, ctx.store.clone(), shutdown)
        .await
        .context("HTTP server failed")
}
