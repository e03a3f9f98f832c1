use std::path::Path;

use onboard_core::Flow;
use serde::Serialize;

use crate::exit_codes;
use crate::input::read_flow;
use crate::output::{print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct StepInfo {
    index: usize,
    id: String,
    name: String,
    route: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shown_when: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    branches: Vec<String>,
}

#[derive(Serialize)]
struct InspectResult {
    version: String,
    steps: Vec<StepInfo>,
}

pub fn inspect_cmd(path: &Path, output: OutputArgs) -> i32 {
    let flow = match read_flow(path, &output) {
        Ok(p) => p.flow,
        Err(code) => return code,
    };

    let result = summarize(&flow);
    if output.format == OutputFormat::Text && !output.quiet {
        println!("flow {} ({} steps)", result.version, result.steps.len());
        for s in &result.steps {
            println!("{:>3}. {} -> {}", s.index, s.id, s.route);
            if let Some(cond) = &s.shown_when {
                println!("     shown when {cond}");
            }
            if !s.required.is_empty() {
                let min = s
                    .min_items
                    .map(|n| format!(" (min {n})"))
                    .unwrap_or_default();
                println!("     requires {}{min}", s.required.join(", "));
            }
            for b in &s.branches {
                println!("     branch {b}");
            }
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}

fn summarize(flow: &Flow) -> InspectResult {
    let steps = flow
        .steps
        .iter()
        .enumerate()
        .map(|(index, s)| StepInfo {
            index,
            id: s.id.clone(),
            name: s.name.clone(),
            route: s.route.clone(),
            required: s.required.clone(),
            min_items: s.min_items,
            shown_when: s.conditional.as_ref().map(|c| {
                let op = if c.show { "==" } else { "!=" };
                format!("{} {op} {}", c.field, c.value)
            }),
            branches: flow
                .decision_point(&s.id)
                .map(|dp| {
                    dp.branches
                        .iter()
                        .map(|b| format!("{}={} -> {}", dp.field, b.value, b.next_step))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    InspectResult {
        version: flow.version.clone(),
        steps,
    }
}
