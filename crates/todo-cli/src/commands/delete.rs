use anyhow::Context;
use todo_core::ops;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut items = ctx.store.load(&ctx.request).await?;
    ops::delete(&mut items, id)?;
    ctx.store
        .save(&ctx.request, items.clone())
        .await
        .context("failed to save to-do list")?;

    tracing::info!(id, "to-do deleted");
    output(&items, flags.format)
}
