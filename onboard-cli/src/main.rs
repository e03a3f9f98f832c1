use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod input;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "onboard", version, about = "Onboarding flow validator and simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Validate { path, output } => cmd::validate::validate_cmd(&path, output),
        Command::Inspect { path, output } => cmd::inspect::inspect_cmd(&path, output),
        Command::Steps { path, data, output } => cmd::steps::steps_cmd(&path, &data, output),
        Command::Next {
            path,
            step,
            data,
            policy,
            output,
        } => cmd::navigate::next_cmd(&path, &step, &data, &policy, output),
        Command::Prev {
            path,
            step,
            visible,
            data,
            output,
        } => cmd::navigate::prev_cmd(&path, &step, visible, &data, output),
        Command::Progress {
            path,
            step,
            data,
            output,
        } => cmd::navigate::progress_cmd(&path, &step, &data, output),
        Command::Walk {
            path,
            data,
            policy,
            output,
        } => cmd::walk::walk_cmd(&path, &data, &policy, output),
        Command::Graph { path } => cmd::graph::graph_cmd(&path),
        Command::Resolve {
            version,
            resolver,
            output,
        } => cmd::resolve::resolve_cmd(&version, resolver, output).await,
    }
}
