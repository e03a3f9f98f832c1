#![forbid(unsafe_code)]

pub mod error;
pub mod navigator;
pub mod parser;
mod render;
pub mod types;
pub mod validate;

pub use crate::error::{FlowError, ParseError, ValidationError, Violation};
pub use crate::navigator::{
    is_step_complete, is_step_visible, missing_fields, AdvancePolicy, FlowNavigator,
    MissingTargetPolicy, NavigatorOptions, Walk, WalkEnd,
};
pub use crate::parser::{
    load_flow_str, load_flow_version, parse_flow_str, FlowFormat, ParsedFlow,
};
pub use crate::types::{
    Branch, Conditional, DecisionPoint, Flow, Step, StepValidation, UserData, ValidationKind,
};
pub use crate::validate::{validate_flow, Validate};
