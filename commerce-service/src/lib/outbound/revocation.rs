use std::time::Duration;
use std::time::Instant;

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;

use crate::domain::account::errors::AccountError;
use crate::domain::account::ports::TokenRevocationStore;

/// Expires each revoked token after the lifetime it had left at logout.
struct RemainingLifetime;

impl Expiry<String, Duration> for RemainingLifetime {
    fn expire_after_create(&self, _token: &String, ttl: &Duration, _created_at: Instant) -> Option<Duration> {
        Some(*ttl)
    }

    fn expire_after_update(
        &self,
        _token: &String,
        ttl: &Duration,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(*ttl)
    }
}

/// Process-local set of logged-out tokens.
///
/// Never size-bounded: an entry leaves only once the token it revokes would
/// have expired anyway.
#[derive(Clone)]
pub struct InMemoryRevocationCache {
    cache: Cache<String, Duration>,
}

impl InMemoryRevocationCache {
    pub fn new() -> Self {
        let cache = Cache::builder()
            .expire_after(RemainingLifetime)
            .build();

        Self { cache }
    }
}

impl Default for InMemoryRevocationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRevocationStore for InMemoryRevocationCache {
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), AccountError> {
        self.cache.insert(token.to_string(), ttl).await;
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, AccountError> {
        Ok(self.cache.get(token).await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoked_token_is_reported() {
        let cache = InMemoryRevocationCache::new();

        cache
            .revoke("token-a", Duration::from_secs(60))
            .await
            .unwrap();

        assert!(cache.is_revoked("token-a").await.unwrap());
        assert!(!cache.is_revoked("token-b").await.unwrap());
    }

    #[tokio::test]
    async fn test_revocation_expires_with_token() {
        let cache = InMemoryRevocationCache::new();

        cache
            .revoke("short-lived", Duration::from_millis(200))
            .await
            .unwrap();
        cache
            .revoke("long-lived", Duration::from_secs(60))
            .await
            .unwrap();
        assert!(cache.is_revoked("short-lived").await.unwrap());

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(!cache.is_revoked("short-lived").await.unwrap());
        assert!(cache.is_revoked("long-lived").await.unwrap());
    }

    #[tokio::test]
    async fn test_repeated_revocation_refreshes_ttl() {
        let cache = InMemoryRevocationCache::new();

        cache
            .revoke("token", Duration::from_millis(200))
            .await
            .unwrap();
        cache
            .revoke("token", Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(cache.is_revoked("token").await.unwrap());
    }

    #[tokio::test]
    async fn test_every_revocation_survives_a_burst_of_logouts() {
        let cache = InMemoryRevocationCache::new();
        let tokens: Vec<String> = (0..2_000).map(|i| format!("token-{}", i)).collect();

        for token in &tokens {
            cache.revoke(token, Duration::from_secs(3600)).await.unwrap();
        }
        cache.cache.run_pending_tasks().await;

        for token in &tokens {
            assert!(cache.is_revoked(token).await.unwrap(), "{} was dropped", token);
        }
    }
}
