mod rules;
mod validator;

use crate::error::ValidationError;
use crate::types::Flow;
use validator::Validator;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Flow {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_flow(self)
    }
}

pub fn validate_flow(flow: &Flow) -> Result<(), ValidationError> {
    let mut v = Validator::new();
    v.validate_flow(flow);
    v.finish(&flow.version)
}
