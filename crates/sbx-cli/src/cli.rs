use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sbx",
    about = "sbx: edit review engine for performer, scene, studio and tag metadata",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    Create,
    Modify,
    Merge,
    Destroy,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the change set of an edit
    Diff(DiffArgs),
    /// Seed an edit form from an imported draft
    Reconcile(ReconcileArgs),
    /// Aggregate merge sources into a target
    Merge(MergeArgs),
    /// Predict the outcome of a pending vote
    Predict(PredictArgs),
    /// Check whether a pending edit can be resolved early
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    #[arg(short, long, value_enum)]
    pub operation: Operation,
    /// Submitted form (JSON, tagged with its entity type)
    #[arg(long)]
    pub form: Option<PathBuf>,
    /// Current entity snapshot (JSON)
    #[arg(long)]
    pub original: Option<PathBuf>,
    /// Keep the old performer name as a performance alias on scene credits
    #[arg(long)]
    pub set_modify_aliases: bool,
}

#[derive(Args)]
pub struct ReconcileArgs {
    /// Draft record (JSON)
    pub draft: PathBuf,
    /// Entity the draft updates (JSON)
    #[arg(long)]
    pub existing: Option<PathBuf>,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Surviving entity (JSON)
    pub target: PathBuf,
    /// Entities merged into the target (JSON)
    #[arg(short, long = "source", required = true)]
    pub sources: Vec<PathBuf>,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Edit tally (JSON)
    pub tally: PathBuf,
    /// Vote configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Edit tally (JSON)
    pub tally: PathBuf,
    /// Ballots cast so far (JSON array)
    #[arg(long)]
    pub votes: PathBuf,
    /// Vote configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
