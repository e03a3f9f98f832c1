use std::collections::HashSet;

use crate::types::DecisionPoint;
use crate::validate::validator::Validator;

pub(crate) fn validate_decision_point(
    v: &mut Validator,
    dp: &DecisionPoint,
    path: &str,
    step_ids: &HashSet<&str>,
) {
    if !step_ids.contains(dp.step_id.as_str()) {
        v.push(
            format!("{path}.stepId"),
            format!("references unknown step '{}'", dp.step_id),
        );
    }

    v.require_non_empty(&format!("{path}.field"), &dp.field);

    if dp.branches.is_empty() {
        v.push(format!("{path}.branches"), "must have at least one entry");
    }

    let mut values = HashSet::<&str>::new();
    for (bidx, branch) in dp.branches.iter().enumerate() {
        let bpath = format!("{path}.branches[{bidx}]");
        if !values.insert(&branch.value) {
            v.push(
                format!("{bpath}.value"),
                "duplicate branch value (only the first match is ever taken)",
            );
        }
        if !step_ids.contains(branch.next_step.as_str()) {
            v.push(
                format!("{bpath}.nextStep"),
                format!("references unknown step '{}'", branch.next_step),
            );
        }
    }
}
