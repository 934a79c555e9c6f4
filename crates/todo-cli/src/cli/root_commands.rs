use clap::{ArgGroup, Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print every to-do.
    List,
    /// Print one to-do by ID.
    Get(GetArgs),
    /// Add a to-do and print the resulting list.
    Add(AddArgs),
    /// Change the description and/or status of a to-do.
    Update(UpdateArgs),
    /// Delete a to-do by ID.
    Delete(DeleteArgs),
    /// Serve the HTTP API until interrupted.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    pub id: u64,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Description of the new to-do.
    pub description: String,

    /// Initial status: "not started", "started" or "completed".
    #[arg(short, long, default_value = "not started")]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
#[command(group(
    ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["description", "status"])
))]
pub struct UpdateArgs {
    pub id: u64,

    /// New description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// New status.
    #[arg(short, long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    pub id: u64,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding `server.addr` from config.
    #[arg(long)]
    pub addr: Option<String>,
}
