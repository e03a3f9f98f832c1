//! Pure navigation over a resolved [`Flow`].
//!
//! The navigator holds no state of its own: the current step id and the user data live with
//! the caller, and every operation is a function of `(flow, step id, user data)`. Lookups on
//! unknown ids degrade to `None`, `-1` or `0` rather than erroring.

mod completion;
mod options;
mod route;
mod walk;

use tracing::{debug, warn};

use crate::types::{field_matches, Flow, Step, UserData};
use route::{last_segment, same_route};

pub use completion::{is_step_complete, missing_fields};
pub use options::{AdvancePolicy, MissingTargetPolicy, NavigatorOptions};
pub use walk::{Walk, WalkEnd};

#[derive(Debug, Clone, Copy)]
pub struct FlowNavigator<'a> {
    flow: &'a Flow,
    options: NavigatorOptions,
}

impl<'a> FlowNavigator<'a> {
    pub fn new(flow: &'a Flow) -> Self {
        Self::with_options(flow, NavigatorOptions::default())
    }

    pub fn with_options(flow: &'a Flow, options: NavigatorOptions) -> Self {
        Self { flow, options }
    }

    pub fn flow(&self) -> &'a Flow {
        self.flow
    }

    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    pub fn step(&self, step_id: &str) -> Option<&'a Step> {
        self.flow.steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_route(&self, step_id: &str) -> Option<&'a str> {
        self.step(step_id).map(|s| s.route.as_str())
    }

    /// Maps a navigation route back to a step id.
    ///
    /// An exact route match wins. Otherwise the last path segment is compared against each
    /// step route's last segment and the first step in list order is returned, so two steps
    /// whose routes end in the same segment cannot be told apart by suffix alone.
    pub fn step_id_from_route(&self, route: &str) -> Option<&'a str> {
        if let Some(s) = self.flow.steps.iter().find(|s| same_route(&s.route, route)) {
            return Some(s.id.as_str());
        }
        let segment = last_segment(route)?;
        self.flow
            .steps
            .iter()
            .find(|s| last_segment(&s.route) == Some(segment))
            .map(|s| s.id.as_str())
    }

    /// Index in the full (unfiltered) step list.
    pub fn position(&self, step_id: &str) -> Option<usize> {
        self.flow.steps.iter().position(|s| s.id == step_id)
    }

    /// Like [`position`](Self::position), with `-1` for an unknown step.
    pub fn step_index(&self, step_id: &str) -> isize {
        self.position(step_id).map_or(-1, |i| i as isize)
    }

    pub fn is_step_visible(&self, step: &Step, data: &UserData) -> bool {
        is_step_visible(step, data)
    }

    pub fn visible_steps(&self, data: &UserData) -> Vec<&'a Step> {
        self.flow
            .steps
            .iter()
            .filter(|s| is_step_visible(s, data))
            .collect()
    }

    /// The step to show after `current_step_id`, or `None` at the end of the flow.
    ///
    /// A decision point attached to the current step takes precedence; its first branch
    /// matching the user's value names the next step. Without a match the flow advances in
    /// list order according to [`AdvancePolicy`].
    pub fn next_step(&self, current_step_id: &str, data: &UserData) -> Option<&'a Step> {
        let idx = self.position(current_step_id)?;

        if let Some(dp) = self.flow.decision_point(current_step_id) {
            let branch = dp
                .branches
                .iter()
                .find(|b| field_matches(data, &dp.field, &b.value));
            if let Some(branch) = branch {
                match self.step(&branch.next_step) {
                    Some(target) => {
                        debug!(
                            from = current_step_id,
                            to = %target.id,
                            field = %dp.field,
                            value = %branch.value,
                            "decision branch taken"
                        );
                        return Some(target);
                    }
                    None => {
                        warn!(
                            from = current_step_id,
                            target = %branch.next_step,
                            policy = ?self.options.missing_target,
                            "decision branch references unknown step"
                        );
                        if self.options.missing_target == MissingTargetPolicy::End {
                            return None;
                        }
                    }
                }
            }
        }

        let mut rest = self.flow.steps[idx + 1..].iter();
        match self.options.advance {
            AdvancePolicy::Structural => rest.next(),
            AdvancePolicy::SkipHidden => rest.find(|s| is_step_visible(s, data)),
        }
    }

    /// The step structurally before `current_step_id`; `None` for the first or an unknown step.
    pub fn previous_step(&self, current_step_id: &str) -> Option<&'a Step> {
        let idx = self.position(current_step_id)?;
        let flow = self.flow;
        idx.checked_sub(1).and_then(|i| flow.steps.get(i))
    }

    /// The nearest visible step before `current_step_id`.
    pub fn previous_visible_step(&self, current_step_id: &str, data: &UserData) -> Option<&'a Step> {
        let idx = self.position(current_step_id)?;
        self.flow.steps[..idx]
            .iter()
            .rev()
            .find(|s| is_step_visible(s, data))
    }

    /// Percentage through the visible steps, `0..=100`.
    ///
    /// `0` when the current step is unknown or hidden, or no step is visible.
    pub fn progress(&self, current_step_id: &str, data: &UserData) -> u8 {
        let visible = self.visible_steps(data);
        let Some(idx) = visible.iter().position(|s| s.id == current_step_id) else {
            return 0;
        };
        ((idx as f64 / visible.len() as f64) * 100.0).round() as u8
    }

    pub fn first_step(&self, data: &UserData) -> Option<&'a Step> {
        self.flow.steps.iter().find(|s| is_step_visible(s, data))
    }

    /// Where a returning user picks up: the first visible step with missing required fields.
    pub fn resume_step(&self, data: &UserData) -> Option<&'a Step> {
        self.flow
            .steps
            .iter()
            .find(|s| is_step_visible(s, data) && !is_step_complete(s, data))
    }

    pub fn is_terminal(&self, current_step_id: &str, data: &UserData) -> bool {
        self.next_step(current_step_id, data).is_none()
    }
}

/// `true` without a conditional; otherwise `show` when the field equals the value, `!show` when not.
pub fn is_step_visible(step: &Step, data: &UserData) -> bool {
    match &step.conditional {
        None => true,
        Some(c) => {
            if field_matches(data, &c.field, &c.value) {
                c.show
            } else {
                !c.show
            }
        }
    }
}
