#![forbid(unsafe_code)]

pub mod cache;
mod error;
mod resolver;
mod state;

pub use cache::{CacheConfig, FlowCache};
pub use error::ResolveError;
pub use resolver::{CompositeResolver, FileResolver, FlowResolver, StaticResolver};
pub use state::FlowState;
