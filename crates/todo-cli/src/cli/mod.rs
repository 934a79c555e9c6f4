use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, LogFormatArg, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `todo` binary.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Manage a to-do list stored as JSON")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data file; a bare file name is placed under out/
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format, overriding `log.format` from config
    #[arg(long, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Trace ID for this invocation (generated when absent)
    #[arg(long, global = true)]
    pub trace_id: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            file: self.file.clone(),
            log_format: self.log_format,
            trace_id: self.trace_id.clone(),
        }
    }
}
