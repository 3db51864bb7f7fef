//! Read-through caching for collection reads.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::{MemoryCacheService, DEFAULT_TTL};
