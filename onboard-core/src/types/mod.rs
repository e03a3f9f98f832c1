mod common;
mod decision;
mod flow;
mod step;

pub use common::{field_matches, UserData};
pub use decision::{Branch, DecisionPoint};
pub use flow::Flow;
pub use step::{Conditional, Step, StepValidation, ValidationKind};
