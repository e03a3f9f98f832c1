use std::path::PathBuf;

use clap::{Args, ValueEnum};
use onboard_core::{AdvancePolicy, MissingTargetPolicy, NavigatorOptions};

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// User data the flow is evaluated against.
#[derive(Debug, Args, Clone)]
pub struct DataArgs {
    /// JSON or YAML object of field values.
    #[arg(long)]
    pub data: Option<PathBuf>,
    /// Field override; VALUE is parsed as JSON when possible, else taken as a string.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Identifies the current step, by id or by route.
#[derive(Debug, Args, Clone)]
pub struct StepArgs {
    #[arg(long, required_unless_present = "route", conflicts_with = "route")]
    pub step: Option<String>,
    #[arg(long)]
    pub route: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PolicyArgs {
    #[arg(long, value_enum, default_value_t = AdvanceArg::SkipHidden)]
    pub advance: AdvanceArg,
    #[arg(long, value_enum, default_value_t = MissingTargetArg::End)]
    pub missing_target: MissingTargetArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdvanceArg {
    SkipHidden,
    Structural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissingTargetArg {
    End,
    FallThrough,
}

impl PolicyArgs {
    pub fn navigator_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            advance: match self.advance {
                AdvanceArg::SkipHidden => AdvancePolicy::SkipHidden,
                AdvanceArg::Structural => AdvancePolicy::Structural,
            },
            missing_target: match self.missing_target {
                MissingTargetArg::End => MissingTargetPolicy::End,
                MissingTargetArg::FallThrough => MissingTargetPolicy::FallThrough,
            },
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ResolverArgs {
    /// Directory laid out as <profile_type>/<version>.{json,yaml,yml}.
    #[arg(long, env = "ONBOARD_FLOWS_DIR")]
    pub flows_dir: PathBuf,
    /// Omit to resolve as a user without a profile yet.
    #[arg(long, env = "ONBOARD_PROFILE_TYPE")]
    pub profile_type: Option<String>,
}
