//! Port for job application persistence.
//!
//! The [`ApplicationStore`] trait is a single logical table keyed by
//! [`ApplicationId`]. Create and update are the same primitive here: both
//! are a put of the whole record. Whether a put creates or replaces depends
//! only on the identifier the caller chose.

use async_trait::async_trait;

use crate::domain::{ApplicationId, JobApplication};

/// Errors raised by application store adapters.
///
/// Adapters collapse every failure into one opaque condition; callers
/// cannot tell transient from permanent failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationStoreError {
    /// The store could not complete the operation.
    #[error("application store unavailable: {message}")]
    Unavailable { message: String },
}

impl ApplicationStoreError {
    /// Build an [`ApplicationStoreError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Port for storing and reading job applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Put a freshly identified record.
    async fn insert(&self, application: &JobApplication) -> Result<(), ApplicationStoreError>;

    /// Return every record. No ordering is guaranteed and the whole table is
    /// materialised.
    async fn scan_all(&self) -> Result<Vec<JobApplication>, ApplicationStoreError>;

    /// Fetch one record by key.
    async fn find_by_key(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<JobApplication>, ApplicationStoreError>;

    /// Remove a record. Removing an absent key succeeds.
    async fn delete_by_key(&self, id: &ApplicationId) -> Result<(), ApplicationStoreError>;

    /// Replace the record at `application.id()` wholesale, creating it if
    /// absent.
    async fn overwrite(&self, application: &JobApplication) -> Result<(), ApplicationStoreError>;
}
