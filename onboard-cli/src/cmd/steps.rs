use std::path::Path;

use onboard_core::{missing_fields, FlowNavigator};
use serde::Serialize;

use crate::exit_codes;
use crate::input::{load_user_data, read_flow};
use crate::output::{print_result, OutputFormat};
use crate::{DataArgs, OutputArgs};

#[derive(Serialize)]
struct VisibleStep {
    id: String,
    route: String,
    progress: u8,
    complete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
}

#[derive(Serialize)]
struct StepsResult {
    version: String,
    hidden: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resume_at: Option<String>,
    steps: Vec<VisibleStep>,
}

pub fn steps_cmd(path: &Path, data: &DataArgs, output: OutputArgs) -> i32 {
    let flow = match read_flow(path, &output) {
        Ok(p) => p.flow,
        Err(code) => return code,
    };
    let user_data = match load_user_data(data, &output) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let nav = FlowNavigator::new(&flow);
    let steps: Vec<VisibleStep> = nav
        .visible_steps(&user_data)
        .into_iter()
        .map(|s| {
            let missing: Vec<String> = missing_fields(s, &user_data)
                .into_iter()
                .map(String::from)
                .collect();
            VisibleStep {
                id: s.id.clone(),
                route: s.route.clone(),
                progress: nav.progress(&s.id, &user_data),
                complete: missing.is_empty(),
                missing,
            }
        })
        .collect();
    let hidden = flow
        .steps
        .iter()
        .filter(|s| !nav.is_step_visible(s, &user_data))
        .map(|s| s.id.clone())
        .collect();
    let result = StepsResult {
        version: flow.version.clone(),
        hidden,
        resume_at: nav.resume_step(&user_data).map(|s| s.id.clone()),
        steps,
    };

    if output.format == OutputFormat::Text && !output.quiet {
        for s in &result.steps {
            let mark = if s.complete { "x" } else { " " };
            print!("[{mark}] {:>3}% {} -> {}", s.progress, s.id, s.route);
            if s.missing.is_empty() {
                println!();
            } else {
                println!(" (missing: {})", s.missing.join(", "));
            }
        }
        if !result.hidden.is_empty() {
            println!("hidden: {}", result.hidden.join(", "));
        }
        match &result.resume_at {
            Some(id) => println!("resume at: {id}"),
            None => println!("all visible steps complete"),
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}
