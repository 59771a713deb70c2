//! PostgreSQL-backed `ApplicationStore` implementation using Diesel ORM.
//!
//! Insert and overwrite share one upsert statement, matching the port's
//! put semantics. Every failure is collapsed into
//! [`ApplicationStoreError::Unavailable`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{ApplicationStore, ApplicationStoreError};
use crate::domain::{
    ApplicationId, ApplicationStatus, ApplicationValidationError, JobApplication,
    JobApplicationDraft,
};

use super::models::{JobApplicationRow, JobApplicationWrite};
use super::pool::{DbPool, PoolError};
use super::schema::job_applications;

/// Diesel-backed implementation of the `ApplicationStore` port.
#[derive(Clone)]
pub struct DieselApplicationStore {
    pool: DbPool,
}

impl DieselApplicationStore {
    /// Create a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn put(&self, application: &JobApplication) -> Result<(), ApplicationStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = write_row(application);
        diesel::insert_into(job_applications::table)
            .values(&row)
            .on_conflict(job_applications::id)
            .do_update()
            .set((
                job_applications::company.eq(excluded(job_applications::company)),
                job_applications::role.eq(excluded(job_applications::role)),
                job_applications::status.eq(excluded(job_applications::status)),
                job_applications::link.eq(excluded(job_applications::link)),
                job_applications::date_applied.eq(excluded(job_applications::date_applied)),
                job_applications::notes.eq(excluded(job_applications::notes)),
                job_applications::description.eq(excluded(job_applications::description)),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

fn map_pool_error(error: PoolError) -> ApplicationStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ApplicationStoreError::unavailable(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ApplicationStoreError {
    use diesel::result::Error as DieselError;

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }
    ApplicationStoreError::unavailable("database error")
}

fn write_row(application: &JobApplication) -> JobApplicationWrite<'_> {
    let draft = application.draft();
    JobApplicationWrite {
        id: application.id().as_str(),
        company: draft.company(),
        role: draft.role(),
        status: draft.status().map(ApplicationStatus::as_str),
        link: draft.link(),
        date_applied: draft.date_applied(),
        notes: draft.notes(),
        description: draft.description(),
    }
}

/// Convert a database row into a domain record.
///
/// Rows violating domain invariants cannot be produced by this adapter, so a
/// failure here means the table was edited out of band.
fn row_to_application(row: JobApplicationRow) -> Result<JobApplication, ApplicationValidationError> {
    let status = match row.status.as_deref().map(str::parse::<ApplicationStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(err)) => {
            warn!(id = %row.id, error = %err, "unrecognised status value, leaving unset");
            None
        }
    };
    let id = ApplicationId::new(row.id)?;
    let draft = JobApplicationDraft::new(row.company, row.role)?
        .with_status(status)
        .with_link(row.link)
        .with_date_applied(row.date_applied)
        .with_notes(row.notes)
        .with_description(row.description);
    Ok(JobApplication::new(id, draft))
}

fn convert_row(row: JobApplicationRow) -> Result<JobApplication, ApplicationStoreError> {
    row_to_application(row).map_err(|err| {
        warn!(error = %err, "stored job application violates domain invariants");
        ApplicationStoreError::unavailable(format!("corrupt record: {err}"))
    })
}

#[async_trait]
impl ApplicationStore for DieselApplicationStore {
    async fn insert(&self, application: &JobApplication) -> Result<(), ApplicationStoreError> {
        self.put(application).await
    }

    async fn scan_all(&self) -> Result<Vec<JobApplication>, ApplicationStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<JobApplicationRow> = job_applications::table
            .select(JobApplicationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(convert_row).collect()
    }

    async fn find_by_key(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<JobApplication>, ApplicationStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<JobApplicationRow> = job_applications::table
            .filter(job_applications::id.eq(id.as_str()))
            .select(JobApplicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(convert_row).transpose()
    }

    async fn delete_by_key(&self, id: &ApplicationId) -> Result<(), ApplicationStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(job_applications::table.filter(job_applications::id.eq(id.as_str())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn overwrite(&self, application: &JobApplication) -> Result<(), ApplicationStoreError> {
        self.put(application).await
    }
}
