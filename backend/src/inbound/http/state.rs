//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureJobApplicationsCommand, FixtureJobApplicationsQuery, JobApplicationsCommand,
    JobApplicationsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Mutating job application use-cases.
    pub applications: Arc<dyn JobApplicationsCommand>,
    /// Read-only job application use-cases.
    pub applications_query: Arc<dyn JobApplicationsQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::JobApplicationService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryApplicationStore;
    ///
    /// let service = Arc::new(JobApplicationService::new(Arc::new(
    ///     InMemoryApplicationStore::new(),
    /// )));
    /// let state = HttpState::new(service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(
        applications: Arc<dyn JobApplicationsCommand>,
        applications_query: Arc<dyn JobApplicationsQuery>,
    ) -> Self {
        Self {
            applications,
            applications_query,
        }
    }

    /// Build state from a single value implementing both ports.
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: JobApplicationsCommand + JobApplicationsQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}

impl Default for HttpState {
    /// Fixture-backed state: writes succeed, reads see an empty table.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureJobApplicationsCommand),
            Arc::new(FixtureJobApplicationsQuery),
        )
    }
}
