use crate::types::{Step, ValidationKind};
use crate::validate::validator::Validator;

pub(crate) fn validate_step(v: &mut Validator, step: &Step, path: &str) {
    v.require_non_empty(&format!("{path}.route"), &step.route);

    for (ridx, field) in step.required.iter().enumerate() {
        v.require_non_empty(&format!("{path}.required[{ridx}]"), field);
    }

    if step.min_items.is_some() && step.required.is_empty() {
        v.push(
            format!("{path}.minItems"),
            "only applies to steps with at least one required field",
        );
    }

    if let Some(cond) = &step.conditional {
        v.require_non_empty(&format!("{path}.conditional.field"), &cond.field);
    }

    if let Some(validation) = &step.validation {
        let vpath = format!("{path}.validation");
        match (validation.kind, &validation.endpoint) {
            (ValidationKind::Backend, None) => {
                v.push(format!("{vpath}.endpoint"), "is required for backend validation");
            }
            (ValidationKind::Backend, Some(endpoint)) => {
                v.require_non_empty(&format!("{vpath}.endpoint"), endpoint);
            }
            (ValidationKind::Local, _) => {}
        }
    }
}
