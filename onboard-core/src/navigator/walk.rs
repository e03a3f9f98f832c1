use std::collections::HashSet;

use crate::navigator::FlowNavigator;
use crate::types::{Step, UserData};

/// The sequence of steps a user with fixed data passes through.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk<'a> {
    pub steps: Vec<&'a Step>,
    pub end: WalkEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WalkEnd {
    /// Reached a step with no next step.
    Completed,
    /// No step is visible for this data.
    NoVisibleSteps,
    /// A decision branch or sequential advance led back to an already visited step.
    Cycle { step_id: String },
}

impl<'a> Walk<'a> {
    pub fn step_ids(&self) -> Vec<&'a str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn routes(&self) -> Vec<&'a str> {
        self.steps.iter().map(|s| s.route.as_str()).collect()
    }
}

impl<'a> FlowNavigator<'a> {
    /// Follows `next_step` from the first visible step until the flow ends or loops.
    pub fn walk(&self, data: &UserData) -> Walk<'a> {
        let Some(first) = self.first_step(data) else {
            return Walk {
                steps: Vec::new(),
                end: WalkEnd::NoVisibleSteps,
            };
        };

        let mut seen = HashSet::new();
        let mut steps = Vec::new();
        let mut current = first;
        loop {
            seen.insert(current.id.as_str());
            steps.push(current);
            match self.next_step(&current.id, data) {
                None => {
                    return Walk {
                        steps,
                        end: WalkEnd::Completed,
                    }
                }
                Some(next) if seen.contains(next.id.as_str()) => {
                    return Walk {
                        steps,
                        end: WalkEnd::Cycle {
                            step_id: next.id.clone(),
                        },
                    }
                }
                Some(next) => current = next,
            }
        }
    }
}
