//! In-memory `ApplicationStore` adapter.
//!
//! Holds the table in a `HashMap` behind an async read-write lock. Data lives
//! only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ApplicationStore, ApplicationStoreError};
use crate::domain::{ApplicationId, JobApplication};

/// Process-local application table.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    records: RwLock<HashMap<ApplicationId, JobApplication>>,
}

impl InMemoryApplicationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn put(&self, application: &JobApplication) {
        self.records
            .write()
            .await
            .insert(application.id().clone(), application.clone());
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn insert(&self, application: &JobApplication) -> Result<(), ApplicationStoreError> {
        self.put(application).await;
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<JobApplication>, ApplicationStoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_key(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<JobApplication>, ApplicationStoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn delete_by_key(&self, id: &ApplicationId) -> Result<(), ApplicationStoreError> {
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn overwrite(&self, application: &JobApplication) -> Result<(), ApplicationStoreError> {
        self.put(application).await;
        Ok(())
    }
}
