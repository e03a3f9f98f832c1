use thiserror::Error;

/// Why a flow document could not be handed to a navigator.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The document is well formed but describes a different flow version than was asked for.
    #[error("expected flow version {expected} but the document declares {found}")]
    VersionMismatch { expected: String, found: String },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("flow document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("flow document is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Every rule a flow broke, in document order.
#[derive(Debug, Error)]
#[error(
    "flow {version} has {} invalid entries, starting with {}",
    .violations.len(),
    first_path(.violations)
)]
pub struct ValidationError {
    pub version: String,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(version: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            version: version.into(),
            violations,
        }
    }

    /// Violations under one step, e.g. `"$.steps[2]"`.
    pub fn under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| {
            v.path == prefix
                || v.path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }
}

fn first_path(violations: &[Violation]) -> &str {
    violations.first().map_or("$", |v| v.path.as_str())
}

/// A broken rule, located by a `$.steps[1].route` style path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
