//! Job application use-cases.
//!
//! The service owns identifier assignment and error collapsing; the store
//! owns nothing but key-value semantics. Concurrent writes to the same key
//! resolve as last write wins; no version check is made.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ApplicationStore, ApplicationStoreError, JobApplicationsCommand, JobApplicationsQuery,
};
use crate::domain::{ApplicationId, Error, JobApplication, JobApplicationDraft};

/// Job application service implementing the driving ports.
#[derive(Clone)]
pub struct JobApplicationService<S> {
    store: Arc<S>,
}

impl<S> JobApplicationService<S> {
    /// Create a new service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> JobApplicationService<S>
where
    S: ApplicationStore,
{
    fn map_store_error(operation: &'static str, err: &ApplicationStoreError) -> Error {
        error!(operation, error = %err, "application store operation failed");
        Error::internal(format!("application store {operation} failed"))
    }
}

#[async_trait]
impl<S> JobApplicationsCommand for JobApplicationService<S>
where
    S: ApplicationStore,
{
    async fn create(&self, draft: JobApplicationDraft) -> Result<JobApplication, Error> {
        let application = JobApplication::new(ApplicationId::generate(), draft);
        self.store
            .insert(&application)
            .await
            .map_err(|err| Self::map_store_error("insert", &err))?;
        info!(id = %application.id(), "job application created");
        Ok(application)
    }

    async fn update(
        &self,
        id: ApplicationId,
        draft: JobApplicationDraft,
    ) -> Result<JobApplication, Error> {
        let application = JobApplication::new(id, draft);
        self.store
            .overwrite(&application)
            .await
            .map_err(|err| Self::map_store_error("overwrite", &err))?;
        info!(id = %application.id(), "job application updated");
        Ok(application)
    }

    async fn delete(&self, id: &ApplicationId) -> Result<(), Error> {
        self.store
            .delete_by_key(id)
            .await
            .map_err(|err| Self::map_store_error("delete", &err))?;
        info!(%id, "job application deleted");
        Ok(())
    }
}

#[async_trait]
impl<S> JobApplicationsQuery for JobApplicationService<S>
where
    S: ApplicationStore,
{
    async fn list(&self) -> Result<Vec<JobApplication>, Error> {
        self.store
            .scan_all()
            .await
            .map_err(|err| Self::map_store_error("scan", &err))
    }

    async fn find(&self, id: &ApplicationId) -> Result<JobApplication, Error> {
        self.store
            .find_by_key(id)
            .await
            .map_err(|err| Self::map_store_error("find", &err))?
            .ok_or_else(|| Error::not_found(format!("application {id} not found")))
    }
}
