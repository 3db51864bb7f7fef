//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use skillsnap_core::SkillSnapResult;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> SkillSnapResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    ///
    /// Replaces any existing entry for the key atomically.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SkillSnapResult<()>;

    /// Remove a value from the cache. Idempotent.
    ///
    /// Returns `true` if an unexpired entry existed and was removed.
    async fn invalidate(&self, key: &str) -> SkillSnapResult<bool>;

    /// The TTL applied by callers that cache collection reads.
    fn default_ttl(&self) -> Duration;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> SkillSnapResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> SkillSnapResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Get a value or fetch and cache it if not present.
    ///
    /// A hit returns the cached value unchanged. On a miss the factory runs,
    /// its result is stored with the given TTL, and the fresh value is
    /// returned. A factory error propagates to the caller and nothing is
    /// cached.
    async fn get_or_fetch<T, F, Fut>(&self, key: &str, ttl: Duration, factory: F) -> SkillSnapResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = SkillSnapResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            return Ok(cached);
        }

        let value = factory().await?;

        // Cache it (ignore errors as the value is still valid)
        let _ = self.set(key, &value, ttl).await;

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
