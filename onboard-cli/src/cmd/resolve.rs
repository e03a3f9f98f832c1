use onboard_resolver::{CacheConfig, FileResolver, FlowCache, FlowState};
use serde::Serialize;
use tracing::debug;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{OutputArgs, ResolverArgs};

#[derive(Serialize)]
struct ResolveResult {
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_type: Option<String>,
    steps: Vec<String>,
    decision_points: usize,
}

pub async fn resolve_cmd(version: &str, resolver: ResolverArgs, output: OutputArgs) -> i32 {
    let profile_type = resolver.profile_type.clone();
    debug!(
        flows_dir = %resolver.flows_dir.display(),
        profile_type = ?profile_type,
        version,
        "resolving flow from directory"
    );
    let cache = FlowCache::new(
        FileResolver::new(resolver.flows_dir, resolver.profile_type),
        CacheConfig::default(),
    );

    match cache.load(version).await {
        FlowState::Ready(flow) => {
            let result = ResolveResult {
                version: flow.version.clone(),
                profile_type,
                steps: flow.steps.iter().map(|s| s.id.clone()).collect(),
                decision_points: flow.decision_points.len(),
            };
            if output.format == OutputFormat::Text && !output.quiet {
                if result.steps.is_empty() {
                    println!("flow {}: no steps", result.version);
                } else {
                    println!("flow {}: {}", result.version, result.steps.join(" -> "));
                }
            } else {
                print_result(output.format, output.quiet, &result);
            }
            exit_codes::SUCCESS
        }
        FlowState::Unavailable { reason } => {
            print_error(output.format, output.quiet, &format!("flow unavailable: {reason}"));
            exit_codes::RUNTIME_ERROR
        }
        FlowState::Loading => {
            print_error(output.format, output.quiet, "flow is still loading");
            exit_codes::RUNTIME_ERROR
        }
    }
}
