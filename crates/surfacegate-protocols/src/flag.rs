//! Feature flag protocol definitions.

use async_trait::async_trait;

use crate::error::FlagError;

/// Read-only lookup of remote feature flags.
///
/// Implementations own any caching and transport; callers treat each
/// lookup as fresh.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Whether the named flag is currently on for this user.
    async fn has_flag(&self, name: &str) -> Result<bool, FlagError>;

    /// Raw JSON metadata attached to the named flag, if any.
    fn feature_meta(&self, name: &str) -> Result<Option<String>, FlagError>;
}
