use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::run(ctx, flags).await,
        Commands::Get(args) => commands::get::run(args.id, ctx, flags).await,
        Commands::Add(args) => commands::add::run(&args.description, &args.status, ctx, flags).await,
        Commands::Update(args) => commands::update::run(&args, ctx, flags).await,
        Commands::Delete(args) => commands::delete::run(args.id, ctx, flags).await,
        Commands::Serve(args) => commands::serve::run(args.addr, ctx).await,
    }
}
