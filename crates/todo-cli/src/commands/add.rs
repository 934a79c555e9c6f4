use anyhow::Context;
use todo_core::ops;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    description: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut items = ctx.store.load(&ctx.request).await?;
    let item = ops::add(&mut items, description, status)?;
    ctx.store
        .save(&ctx.request, items.clone())
        .await
        .context("failed to save to-do list")?;

    tracing::info!(id = item.id, "to-do added");
    output(&items, flags.format)
}
