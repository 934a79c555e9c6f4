use clap::Parser;
use todo_core::RequestContext;
use tracing::Instrument;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod logging;
mod output;
mod signal;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("todo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = bootstrap::load_config(&flags)?;
    logging::init_tracing(&config.log, flags.quiet, flags.verbose)?;
    ui::init(&flags);

    let request = RequestContext::with_trace_id(flags.trace_id.clone().unwrap_or_default());
    signal::cancel_on_shutdown_signal(request.cancellation().clone());

    let span = tracing::info_span!("todo", trace_id = %request.trace_id());
    let ctx = context::AppContext::init(config, request);

    let result = commands::dispatch::dispatch(cli.command, &ctx, &flags)
        .instrument(span)
        .await;
    ctx.store.close().await;
    result
}
