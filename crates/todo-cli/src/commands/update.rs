use anyhow::Context;
use todo_core::{Item, ops};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut items = ctx.store.load(&ctx.request).await?;
    apply(&mut items, args)?;
    ctx.store
        .save(&ctx.request, items.clone())
        .await
        .context("failed to save to-do list")?;

    tracing::info!(id = args.id, "to-do updated");
    output(&items, flags.format)
}

/// Apply the requested field changes. Both are validated before either is
/// written, so a bad status never leaves a changed description behind.
fn apply(items: &mut [Item], args: &UpdateArgs) -> anyhow::Result<()> {
    if let Some(status) = &args.status {
        todo_core::Status::parse(status)?;
    }
    if let Some(description) = &args.description {
        ops::update_description(items, args.id, description)?;
    }
    if let Some(status) = &args.status {
        ops::update_status(items, args.id, status)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use todo_core::{CoreError, Status};

    use super::*;

    fn items() -> Vec<Item> {
        vec![Item {
            id: 1,
            description: "draft".to_string(),
            status: Status::NotStarted,
            created_at: Utc::now(),
        }]
    }

    fn args(description: Option<&str>, status: Option<&str>) -> UpdateArgs {
        UpdateArgs {
            id: 1,
            description: description.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn updates_both_fields() {
        let mut list = items();
        apply(&mut list, &args(Some(" final "), Some("COMPLETED"))).unwrap();
        assert_eq!(list[0].description, "final");
        assert_eq!(list[0].status, Status::Completed);
    }

    #[test]
    fn bad_status_leaves_description_untouched() {
        let mut list = items();
        let err = apply(&mut list, &args(Some("final"), Some("paused"))).unwrap_err();
        assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::Validation(_))));
        assert_eq!(list[0].description, "draft");
        assert_eq!(list[0].status, Status::NotStarted);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut list = items();
        let update = UpdateArgs {
            id: 9,
            ..args(None, Some("started"))
        };
        let err = apply(&mut list, &update).unwrap_err();
        assert_eq!(err.downcast_ref::<CoreError>(), Some(&CoreError::NotFound { id: 9 }));
    }
}
