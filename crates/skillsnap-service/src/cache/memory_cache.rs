//! In-process memory cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use parking_lot::RwLock;
use skillsnap_core::SkillSnapResult;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default TTL for cached collections (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A cached value with its absolute expiration time.
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-wide in-memory cache service.
///
/// One instance is constructed at startup and shared via `Arc`. Entry
/// replacement and removal happen under the write lock, so readers
/// only ever observe a whole value or none. Expired entries are
/// treated as absent and lazily removed on the next read. Two racing
/// misses may both fetch and both store; the last write wins.
pub struct MemoryCacheService {
    /// `None` when caching is disabled.
    entries: Option<RwLock<HashMap<String, CacheEntry>>>,
    default_ttl: Duration,
}

impl MemoryCacheService {
    /// Creates an enabled cache with the default TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates an enabled cache with a custom default TTL.
    #[must_use]
    pub fn with_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Some(RwLock::new(HashMap::new())),
            default_ttl,
        }
    }

    /// Creates a no-op cache: every read misses and sets are dropped.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: None,
            default_ttl: DEFAULT_TTL,
        }
    }

    /// Creates a cache from configuration.
    #[must_use]
    pub fn from_config(config: &skillsnap_config::CacheConfig) -> Self {
        if config.enabled {
            Self::with_ttl(config.ttl())
        } else {
            Self::disabled()
        }
    }
}

impl Default for MemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    async fn get_raw(&self, key: &str) -> SkillSnapResult<Option<String>> {
        let Some(entries) = &self.entries else {
            return Ok(None);
        };

        let now = Instant::now();
        {
            let map = entries.read();
            match map.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    debug!("Cache hit for key '{}'", key);
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => {
                    debug!("Cache miss for key '{}'", key);
                    return Ok(None);
                }
            }
        }

        // Lazily drop the expired entry. Re-check under the write lock in
        // case a writer replaced it in the meantime.
        let mut map = entries.write();
        if map.get(key).is_some_and(|entry| entry.is_expired(now)) {
            map.remove(key);
        }
        debug!("Cache miss (expired) for key '{}'", key);
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SkillSnapResult<()> {
        let Some(entries) = &self.entries else {
            return Ok(());
        };

        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        entries.write().insert(key.to_string(), entry);

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> SkillSnapResult<bool> {
        let Some(entries) = &self.entries else {
            return Ok(false);
        };

        let removed = entries.write().remove(key);
        let existed = removed.is_some_and(|entry| !entry.is_expired(Instant::now()));

        debug!("Invalidated key '{}': {}", key, existed);
        Ok(existed)
    }

    fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }
}

impl std::fmt::Debug for MemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheService")
            .field("enabled", &self.is_enabled())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
