use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::{FlowResolver, FlowState};

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Resolved versions kept per session before the least recently used one is evicted.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 16 }
    }
}

/// Per-session flow cache keyed by version.
///
/// At most one resolution per version is in flight; concurrent `load`s share it. Both
/// successes and failures stay cached until [`invalidate`](Self::invalidate). Only resolved
/// versions count towards [`CacheConfig::max_entries`], so eviction never cuts a pending
/// resolution loose.
pub struct FlowCache<R> {
    resolver: R,
    config: CacheConfig,
    state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    resolved: HashMap<String, CacheEntry>,
    inflight: HashMap<String, Arc<OnceCell<FlowState>>>,
}

struct CacheEntry {
    state: FlowState,
    last_accessed: Instant,
}

impl<R> FlowCache<R>
where
    R: FlowResolver,
{
    pub fn new(resolver: R, config: CacheConfig) -> Self {
        Self {
            resolver,
            config,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Current state without triggering a resolution.
    pub fn peek(&self, version: &str) -> FlowState {
        self.lock()
            .resolved
            .get(version)
            .map(|entry| entry.state.clone())
            .unwrap_or(FlowState::Loading)
    }

    /// Resolves `version` once and serves the cached state afterwards.
    ///
    /// Dropping the returned future before it completes discards the result; the next caller
    /// resolves again.
    pub async fn load(&self, version: &str) -> FlowState {
        let cell = {
            let mut s = self.lock();
            if let Some(entry) = s.resolved.get_mut(version) {
                entry.last_accessed = Instant::now();
                return entry.state.clone();
            }
            s.inflight
                .entry(version.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let state = cell.get_or_init(|| self.resolve(version)).await.clone();

        // First waiter back moves the result over; an `invalidate` in the meantime wins.
        let mut s = self.lock();
        let still_pending = s
            .inflight
            .get(version)
            .is_some_and(|pending| Arc::ptr_eq(pending, &cell));
        if still_pending {
            s.inflight.remove(version);
            enforce_capacity(&mut s.resolved, self.config.max_entries);
            s.resolved.insert(
                version.to_string(),
                CacheEntry {
                    state: state.clone(),
                    last_accessed: Instant::now(),
                },
            );
        }
        state
    }

    /// Forgets `version` so the next `load` resolves it again.
    pub fn invalidate(&self, version: &str) -> bool {
        let mut s = self.lock();
        let resolved = s.resolved.remove(version).is_some();
        let pending = s.inflight.remove(version).is_some();
        resolved || pending
    }

    /// Number of resolved versions held.
    pub fn len(&self) -> usize {
        self.lock().resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn resolve(&self, version: &str) -> FlowState {
        debug!(version, "resolving flow");
        match self.resolver.resolve(version).await {
            Ok(flow) => FlowState::Ready(Arc::new(flow)),
            Err(e) => {
                warn!(version, error = %e, "flow unavailable");
                FlowState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn enforce_capacity(resolved: &mut HashMap<String, CacheEntry>, max_entries: usize) {
    while !resolved.is_empty() && resolved.len() >= max_entries {
        let oldest = resolved
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(k, _)| k.clone());
        match oldest {
            Some(k) => {
                debug!(version = %k, "evicting flow");
                resolved.remove(&k);
            }
            None => break,
        }
    }
}
