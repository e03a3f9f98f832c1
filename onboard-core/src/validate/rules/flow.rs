use std::collections::HashSet;

use crate::types::Flow;
use crate::validate::rules::{decision, step};
use crate::validate::validator::{Validator, ID_RE};

pub(crate) fn validate_flow(v: &mut Validator, flow: &Flow) {
    v.require_non_empty("$.version", &flow.version);

    let mut step_ids = HashSet::<&str>::new();
    for (idx, s) in flow.steps.iter().enumerate() {
        let spath = format!("$.steps[{idx}]");

        if !ID_RE.is_match(&s.id) {
            v.push(format!("{spath}.id"), "must match regex [A-Za-z0-9_\\-]+");
        }
        if !step_ids.insert(&s.id) {
            v.push(format!("{spath}.id"), "must be unique within the flow");
        }

        step::validate_step(v, s, &spath);
    }

    let mut decided = HashSet::<&str>::new();
    for (idx, dp) in flow.decision_points.iter().enumerate() {
        let dpath = format!("$.decisionPoints[{idx}]");
        if !decided.insert(&dp.step_id) {
            v.push(
                format!("{dpath}.stepId"),
                "only one decision point may be attached to a step",
            );
        }
        decision::validate_decision_point(v, dp, &dpath, &step_ids);
    }
}
