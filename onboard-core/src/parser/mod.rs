use crate::error::{FlowError, ParseError};
use crate::types::Flow;
use crate::validate::validate_flow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedFlow {
    pub flow: Flow,
    pub format: FlowFormat,
}

pub fn parse_flow_str(input: &str, format: FlowFormat) -> Result<ParsedFlow, ParseError> {
    match format {
        FlowFormat::Json => Ok(ParsedFlow {
            flow: serde_json::from_str::<Flow>(input)?,
            format,
        }),
        FlowFormat::Yaml => Ok(ParsedFlow {
            flow: serde_yaml::from_str::<Flow>(input)?,
            format,
        }),
        FlowFormat::Auto => parse_flow_auto(input),
    }
}

/// Parses and validates in one go; what resolvers use before handing a flow out.
pub fn load_flow_str(input: &str, format: FlowFormat) -> Result<ParsedFlow, FlowError> {
    let parsed = parse_flow_str(input, format)?;
    validate_flow(&parsed.flow)?;
    Ok(parsed)
}

/// [`load_flow_str`] for a document that must describe `version`.
pub fn load_flow_version(
    input: &str,
    format: FlowFormat,
    version: &str,
) -> Result<ParsedFlow, FlowError> {
    let parsed = load_flow_str(input, format)?;
    if parsed.flow.version != version {
        return Err(FlowError::VersionMismatch {
            expected: version.to_string(),
            found: parsed.flow.version,
        });
    }
    Ok(parsed)
}

fn parse_flow_auto(input: &str) -> Result<ParsedFlow, ParseError> {
    // JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<Flow>(input) {
            Ok(flow) => Ok(ParsedFlow {
                flow,
                format: FlowFormat::Json,
            }),
            // YAML is a superset of JSON, so a lenient YAML parse may still succeed.
            Err(e) => serde_yaml::from_str::<Flow>(input)
                .map(|flow| ParsedFlow {
                    flow,
                    format: FlowFormat::Yaml,
                })
                .map_err(|_| ParseError::Json(e)),
        };
    }

    match serde_yaml::from_str::<Flow>(input) {
        Ok(flow) => Ok(ParsedFlow {
            flow,
            format: FlowFormat::Yaml,
        }),
        Err(e) => {
            if let Ok(flow) = serde_json::from_str::<Flow>(input) {
                return Ok(ParsedFlow {
                    flow,
                    format: FlowFormat::Json,
                });
            }
            Err(ParseError::Yaml(e))
        }
    }
}
