use std::path::Path;

use onboard_core::{FlowNavigator, WalkEnd};
use serde::Serialize;

use crate::exit_codes;
use crate::input::{load_user_data, read_flow};
use crate::output::{print_result, OutputFormat};
use crate::{DataArgs, OutputArgs, PolicyArgs};

#[derive(Serialize)]
struct WalkStep {
    id: String,
    route: String,
    progress: u8,
}

#[derive(Serialize)]
struct WalkResult {
    steps: Vec<WalkStep>,
    end: WalkEnd,
}

pub fn walk_cmd(path: &Path, data: &DataArgs, policy: &PolicyArgs, output: OutputArgs) -> i32 {
    let flow = match read_flow(path, &output) {
        Ok(p) => p.flow,
        Err(code) => return code,
    };
    let user_data = match load_user_data(data, &output) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let nav = FlowNavigator::with_options(&flow, policy.navigator_options());
    let walk = nav.walk(&user_data);
    let result = WalkResult {
        steps: walk
            .steps
            .iter()
            .map(|s| WalkStep {
                id: s.id.clone(),
                route: s.route.clone(),
                progress: nav.progress(&s.id, &user_data),
            })
            .collect(),
        end: walk.end,
    };

    if output.format == OutputFormat::Text && !output.quiet {
        for s in &result.steps {
            println!("{:>3}% {} -> {}", s.progress, s.id, s.route);
        }
        match &result.end {
            WalkEnd::Completed => println!("end of flow"),
            WalkEnd::NoVisibleSteps => println!("no visible steps"),
            WalkEnd::Cycle { step_id } => println!("cycle back to {step_id}"),
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }

    match result.end {
        WalkEnd::Cycle { .. } => exit_codes::VALIDATION_FAILED,
        _ => exit_codes::SUCCESS,
    }
}
