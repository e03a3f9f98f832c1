use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use onboard_core::{load_flow_version, Flow, FlowError, FlowFormat};
use tracing::{debug, info};

use crate::ResolveError;

/// Source of onboarding flows.
///
/// The current user's profile type is the resolver's business. With no user or profile yet
/// the resolver answers with [`Flow::empty`], never an error.
#[async_trait]
pub trait FlowResolver: Send + Sync {
    async fn resolve(&self, version: &str) -> Result<Flow, ResolveError>;
}

#[async_trait]
impl<R: FlowResolver + ?Sized> FlowResolver for Box<R> {
    async fn resolve(&self, version: &str) -> Result<Flow, ResolveError> {
        (**self).resolve(version).await
    }
}

#[async_trait]
impl<R: FlowResolver + ?Sized> FlowResolver for std::sync::Arc<R> {
    async fn resolve(&self, version: &str) -> Result<Flow, ResolveError> {
        (**self).resolve(version).await
    }
}

/// Flows held in memory, keyed by profile type and version.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    profile_type: Option<String>,
    flows: BTreeMap<(String, String), Flow>,
}

impl StaticResolver {
    pub fn new(profile_type: Option<String>) -> Self {
        Self {
            profile_type,
            flows: BTreeMap::new(),
        }
    }

    pub fn with_flow(mut self, profile_type: impl Into<String>, flow: Flow) -> Self {
        self.insert(profile_type, flow);
        self
    }

    pub fn insert(&mut self, profile_type: impl Into<String>, flow: Flow) {
        self.flows
            .insert((profile_type.into(), flow.version.clone()), flow);
    }

    pub fn set_profile_type(&mut self, profile_type: Option<String>) {
        self.profile_type = profile_type;
    }
}

#[async_trait]
impl FlowResolver for StaticResolver {
    async fn resolve(&self, version: &str) -> Result<Flow, ResolveError> {
        let Some(profile_type) = &self.profile_type else {
            debug!(version, "no profile yet, serving empty flow");
            return Ok(Flow::empty(version));
        };
        self.flows
            .get(&(profile_type.clone(), version.to_string()))
            .cloned()
            .ok_or_else(|| ResolveError::not_found(version))
    }
}

/// Flows stored on disk as `<base_dir>/<profile_type>/<version>.{json,yaml,yml}`.
///
/// Documents are validated before they are handed out.
#[derive(Debug, Clone)]
pub struct FileResolver {
    pub base_dir: PathBuf,
    pub profile_type: Option<String>,
}

const EXTENSIONS: [(&str, FlowFormat); 3] = [
    ("json", FlowFormat::Json),
    ("yaml", FlowFormat::Yaml),
    ("yml", FlowFormat::Yaml),
];

impl FileResolver {
    pub fn new(base_dir: impl Into<PathBuf>, profile_type: Option<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            profile_type,
        }
    }

    fn candidates(
        &self,
        profile_type: &str,
        version: &str,
    ) -> Result<Vec<(PathBuf, FlowFormat)>, ResolveError> {
        file_name_part("profile type", profile_type)?;
        file_name_part("version", version)?;
        Ok(EXTENSIONS
            .iter()
            .map(|(ext, format)| {
                (
                    self.base_dir
                        .join(profile_type)
                        .join(format!("{version}.{ext}")),
                    *format,
                )
            })
            .collect())
    }
}

/// Keeps lookups inside `base_dir`: no separators, no `.`/`..`, no drive prefixes.
fn file_name_part(what: &'static str, value: &str) -> Result<(), ResolveError> {
    let bad = value.is_empty()
        || value == "."
        || value.contains("..")
        || value.contains(['/', '\\', ':', '\0']);
    if bad {
        return Err(ResolveError::InvalidName {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl FlowResolver for FileResolver {
    async fn resolve(&self, version: &str) -> Result<Flow, ResolveError> {
        let Some(profile_type) = &self.profile_type else {
            debug!(version, "no profile yet, serving empty flow");
            return Ok(Flow::empty(version));
        };

        for (path, format) in self.candidates(profile_type, version)? {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(c) => c,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => return Err(ResolveError::Io { path, source }),
            };

            let flow = match load_flow_version(&content, format, version) {
                Ok(parsed) => parsed.flow,
                Err(FlowError::Parse(source)) => return Err(ResolveError::Parse { path, source }),
                Err(FlowError::Validation(source)) => {
                    return Err(ResolveError::Invalid { path, source })
                }
                Err(FlowError::VersionMismatch { expected, found }) => {
                    return Err(ResolveError::VersionMismatch {
                        requested: expected,
                        resolved: found,
                    })
                }
            };

            info!(
                version,
                profile_type = %profile_type,
                path = %path.display(),
                steps = flow.steps.len(),
                "resolved flow"
            );
            return Ok(flow);
        }

        Err(ResolveError::not_found(version))
    }
}

/// Tries each resolver in order, moving on only when one reports `NotFound`.
#[derive(Default)]
pub struct CompositeResolver {
    resolvers: Vec<Box<dyn FlowResolver>>,
}

impl CompositeResolver {
    pub fn new(resolvers: Vec<Box<dyn FlowResolver>>) -> Self {
        Self { resolvers }
    }
}

#[async_trait]
impl FlowResolver for CompositeResolver {
    async fn resolve(&self, version: &str) -> Result<Flow, ResolveError> {
        for r in &self.resolvers {
            match r.resolve(version).await {
                Ok(flow) => return Ok(flow),
                Err(ResolveError::NotFound { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(ResolveError::not_found(version))
    }
}
