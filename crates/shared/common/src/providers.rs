//! Provider contracts consumed by the application layer.

use async_trait::async_trait;

use crate::error::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing.
///
/// Hashing is salted, so two calls with the same input produce different
/// hashes; only [`HashProvider::compare_hash`] can tell whether they match.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashProvider: Send + Sync {
    /// Hash a plain-text secret
    async fn generate_hash(&self, payload: &str) -> AppResult<String>;

    /// Check a plain-text secret against a stored hash
    async fn compare_hash(&self, payload: &str, hash: &str) -> AppResult<bool>;
}
