use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse and validate a flow document.
    Validate {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Summarize steps and decision points.
    Inspect {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List visible steps and what each is missing.
    Steps {
        path: PathBuf,
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Step that follows the current one.
    Next {
        path: PathBuf,
        #[command(flatten)]
        step: StepArgs,
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Step before the current one.
    Prev {
        path: PathBuf,
        #[command(flatten)]
        step: StepArgs,
        /// Skip hidden steps (needs user data).
        #[arg(long)]
        visible: bool,
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Percentage through the visible steps.
    Progress {
        path: PathBuf,
        #[command(flatten)]
        step: StepArgs,
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Route a user with the given data takes through the flow.
    Walk {
        path: PathBuf,
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Graphviz DOT of the step graph.
    Graph { path: PathBuf },
    /// Resolve a flow version from a flows directory.
    Resolve {
        #[arg(long = "flow-version")]
        version: String,
        #[command(flatten)]
        resolver: ResolverArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
