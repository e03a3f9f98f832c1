use std::path::Path;

use onboard_core::{FlowNavigator, NavigatorOptions, Step};
use serde::Serialize;

use crate::exit_codes;
use crate::input::{current_step_id, load_user_data, read_flow};
use crate::output::{print_result, OutputFormat};
use crate::{DataArgs, OutputArgs, PolicyArgs, StepArgs};

#[derive(Serialize)]
struct NavigationResult {
    from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<String>,
}

#[derive(Serialize)]
struct ProgressResult {
    step: String,
    visible: bool,
    progress: u8,
}

pub fn next_cmd(
    path: &Path,
    step: &StepArgs,
    data: &DataArgs,
    policy: &PolicyArgs,
    output: OutputArgs,
) -> i32 {
    navigate(path, step, data, policy.navigator_options(), output, |nav, current, d| {
        nav.next_step(current, d)
    })
}

pub fn prev_cmd(
    path: &Path,
    step: &StepArgs,
    visible: bool,
    data: &DataArgs,
    output: OutputArgs,
) -> i32 {
    navigate(path, step, data, NavigatorOptions::default(), output, |nav, current, d| {
        if visible {
            nav.previous_visible_step(current, d)
        } else {
            nav.previous_step(current)
        }
    })
}

pub fn progress_cmd(path: &Path, step: &StepArgs, data: &DataArgs, output: OutputArgs) -> i32 {
    let flow = match read_flow(path, &output) {
        Ok(p) => p.flow,
        Err(code) => return code,
    };
    let user_data = match load_user_data(data, &output) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let nav = FlowNavigator::new(&flow);
    let current = match current_step_id(&nav, step, &output) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let result = ProgressResult {
        step: current.to_string(),
        visible: nav
            .step(current)
            .is_some_and(|s| nav.is_step_visible(s, &user_data)),
        progress: nav.progress(current, &user_data),
    };
    if output.format == OutputFormat::Text && !output.quiet {
        println!("{}%", result.progress);
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}

fn navigate<F>(
    path: &Path,
    step: &StepArgs,
    data: &DataArgs,
    options: NavigatorOptions,
    output: OutputArgs,
    pick: F,
) -> i32
where
    F: for<'a> Fn(&FlowNavigator<'a>, &str, &onboard_core::UserData) -> Option<&'a Step>,
{
    let flow = match read_flow(path, &output) {
        Ok(p) => p.flow,
        Err(code) => return code,
    };
    let user_data = match load_user_data(data, &output) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let nav = FlowNavigator::with_options(&flow, options);
    let current = match current_step_id(&nav, step, &output) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let target = pick(&nav, current, &user_data);
    let result = NavigationResult {
        from: current.to_string(),
        step: target.map(|s| s.id.clone()),
        route: target.map(|s| s.route.clone()),
    };

    if output.format == OutputFormat::Text && !output.quiet {
        match target {
            Some(s) => println!("{} -> {}", s.id, s.route),
            None => eprintln!("no step after navigation from {current}"),
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }

    if target.is_some() {
        exit_codes::SUCCESS
    } else {
        exit_codes::NAVIGATION_ENDED
    }
}
