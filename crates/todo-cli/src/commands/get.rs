use todo_core::{CoreError, ops};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let items = ctx.store.load(&ctx.request).await?;
    let item = ops::find_by_id(&items, id).ok_or(CoreError::NotFound { id })?;
    output(item, flags.format)
}
