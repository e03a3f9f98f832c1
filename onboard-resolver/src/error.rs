use std::path::PathBuf;

use onboard_core::{ParseError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no flow for version {version}")]
    NotFound { version: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("flow {path} is invalid: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
    #[error("requested flow version {requested} but resolved {resolved}")]
    VersionMismatch { requested: String, resolved: String },
    #[error("{what} {value:?} cannot name a flow file")]
    InvalidName { what: &'static str, value: String },
}

impl ResolveError {
    pub fn not_found(version: impl Into<String>) -> Self {
        Self::NotFound {
            version: version.into(),
        }
    }
}
