use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Flat string key/value store owned by the host application.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    /// Creates or overwrites the value in a single atomic write.
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    /// Returns `RepositoryError::NotFound` when the key is absent.
    async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
}
