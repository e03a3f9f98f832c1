use std::path::Path;

use onboard_core::{parse_flow_str, FlowFormat, FlowNavigator, ParsedFlow, UserData};

use crate::exit_codes;
use crate::output::print_error;
use crate::{DataArgs, OutputArgs, StepArgs};

/// Reads and parses a flow document, reporting failures as an exit code.
pub fn read_flow(path: &Path, output: &OutputArgs) -> Result<ParsedFlow, i32> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        print_error(
            output.format,
            output.quiet,
            &format!("failed to read {}: {e}", path.display()),
        );
        exit_codes::RUNTIME_ERROR
    })?;

    parse_flow_str(&content, FlowFormat::Auto).map_err(|e| {
        print_error(output.format, output.quiet, &e.to_string());
        exit_codes::VALIDATION_FAILED
    })
}

pub fn load_user_data(data: &DataArgs, output: &OutputArgs) -> Result<UserData, i32> {
    let mut user_data = match &data.data {
        None => UserData::new(),
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("failed to read user data: {e}"),
                );
                exit_codes::RUNTIME_ERROR
            })?;
            parse_user_data(&content).ok_or_else(|| {
                print_error(
                    output.format,
                    output.quiet,
                    "user data file is neither a JSON nor a YAML object",
                );
                exit_codes::VALIDATION_FAILED
            })?
        }
    };
    merge_set_values(&mut user_data, &data.set).map_err(|e| {
        print_error(output.format, output.quiet, &e);
        exit_codes::VALIDATION_FAILED
    })?;
    Ok(user_data)
}

fn parse_user_data(content: &str) -> Option<UserData> {
    serde_json::from_str(content)
        .ok()
        .or_else(|| serde_yaml::from_str(content).ok())
}

/// Applies `KEY=VALUE` overrides. A malformed entry rejects the whole set.
pub fn merge_set_values(user_data: &mut UserData, set: &[String]) -> Result<(), String> {
    for s in set {
        let Some((k, v)) = s.split_once('=').filter(|(k, _)| !k.trim().is_empty()) else {
            return Err(format!("--set expects KEY=VALUE, got '{s}'"));
        };
        let value =
            serde_json::from_str(v).unwrap_or_else(|_| serde_json::Value::String(v.to_string()));
        user_data.insert(k.to_string(), value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_values_need_a_key_and_an_equals_sign() {
        let mut data = UserData::new();
        merge_set_values(&mut data, &["status=independent".into(), "n=3".into()]).unwrap();
        assert_eq!(data["status"], "independent");
        assert_eq!(data["n"], 3);

        let mut data = UserData::new();
        let err = merge_set_values(&mut data, &["a=1".into(), "statusindependent".into()])
            .unwrap_err();
        assert!(err.contains("statusindependent"));

        assert!(merge_set_values(&mut data, &["=x".into()]).is_err());
    }
}

/// Resolves `--step`/`--route` to a step id present in the flow.
pub fn current_step_id<'a>(
    nav: &FlowNavigator<'a>,
    step: &StepArgs,
    output: &OutputArgs,
) -> Result<&'a str, i32> {
    let found = match (&step.step, &step.route) {
        (Some(id), _) => nav.step(id).map(|s| s.id.as_str()),
        (None, Some(route)) => nav.step_id_from_route(route),
        (None, None) => None,
    };
    found.ok_or_else(|| {
        let what = step
            .step
            .as_deref()
            .or(step.route.as_deref())
            .unwrap_or_default();
        print_error(
            output.format,
            output.quiet,
            &format!("no step matches '{what}'"),
        );
        exit_codes::NAVIGATION_ENDED
    })
}
