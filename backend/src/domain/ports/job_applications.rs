//! Driving ports for job application use-cases.
//!
//! Inbound adapters depend on these traits rather than on the service type so
//! handlers can be exercised with fixtures or mocks.

use async_trait::async_trait;

use crate::domain::{ApplicationId, Error, JobApplication, JobApplicationDraft};

/// Mutating use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobApplicationsCommand: Send + Sync {
    /// Store a new application under a freshly generated identifier.
    async fn create(&self, draft: JobApplicationDraft) -> Result<JobApplication, Error>;

    /// Replace the application at `id` with `draft`.
    async fn update(
        &self,
        id: ApplicationId,
        draft: JobApplicationDraft,
    ) -> Result<JobApplication, Error>;

    /// Remove the application at `id`; absent records are not an error.
    async fn delete(&self, id: &ApplicationId) -> Result<(), Error>;
}

/// Read-only use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobApplicationsQuery: Send + Sync {
    /// Every stored application.
    async fn list(&self) -> Result<Vec<JobApplication>, Error>;

    /// One application, or [`crate::domain::ErrorCode::NotFound`].
    async fn find(&self, id: &ApplicationId) -> Result<JobApplication, Error>;
}

/// Fixture command that accepts every mutation without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureJobApplicationsCommand;

#[async_trait]
impl JobApplicationsCommand for FixtureJobApplicationsCommand {
    async fn create(&self, draft: JobApplicationDraft) -> Result<JobApplication, Error> {
        Ok(JobApplication::new(ApplicationId::generate(), draft))
    }

    async fn update(
        &self,
        id: ApplicationId,
        draft: JobApplicationDraft,
    ) -> Result<JobApplication, Error> {
        Ok(JobApplication::new(id, draft))
    }

    async fn delete(&self, _id: &ApplicationId) -> Result<(), Error> {
        Ok(())
    }
}

/// Fixture query backed by an empty table.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureJobApplicationsQuery;

#[async_trait]
impl JobApplicationsQuery for FixtureJobApplicationsQuery {
    async fn list(&self) -> Result<Vec<JobApplication>, Error> {
        Ok(Vec::new())
    }

    async fn find(&self, id: &ApplicationId) -> Result<JobApplication, Error> {
        Err(Error::not_found(format!("application {id} not found")))
    }
}
