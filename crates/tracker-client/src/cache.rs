//! In-memory list of applications kept in step with the server.
//!
//! The cache never patches itself locally. Every successful write is followed
//! by a full re-read, so the list always reflects what the server returned.
//! List failures are kept in the snapshot's `error`; write failures are
//! returned to the caller and leave the cache untouched.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::gateway::{ApplicationGateway, GatewayError};
use crate::model::{ApplicationInput, JobApplication};

/// Point-in-time copy of the cache state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSnapshot {
    /// Applications from the latest applied list response.
    pub applications: Vec<JobApplication>,
    /// True while any list request is in flight.
    pub loading: bool,
    /// Message from the latest applied list failure.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct CacheState {
    applications: Vec<JobApplication>,
    in_flight: usize,
    error: Option<String>,
    applied_seq: u64,
}

fn lock(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a list request in flight until dropped, on every exit path.
struct LoadingGuard<'a> {
    state: &'a Mutex<CacheState>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(state: &'a Mutex<CacheState>) -> Self {
        lock(state).in_flight += 1;
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// Cache of the full application list over an [`ApplicationGateway`].
///
/// # Examples
/// ```no_run
/// # async fn demo() -> Result<(), tracker_client::GatewayError> {
/// use tracker_client::{ApplicationInput, ApplicationsCache, HttpApplicationGateway};
/// use url::Url;
///
/// let base = Url::parse("http://127.0.0.1:8080/").expect("valid url");
/// let cache = ApplicationsCache::mount(HttpApplicationGateway::new(base)?).await;
/// cache.create(&ApplicationInput::new("Acme", "Engineer")).await?;
/// assert_eq!(cache.snapshot().applications.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct ApplicationsCache<G> {
    gateway: G,
    state: Mutex<CacheState>,
    issued_seq: AtomicU64,
}

impl<G: ApplicationGateway> ApplicationsCache<G> {
    /// Wrap `gateway` with an empty, idle cache.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: Mutex::new(CacheState::default()),
            issued_seq: AtomicU64::new(0),
        }
    }

    /// Wrap `gateway` and perform the initial list.
    pub async fn mount(gateway: G) -> Self {
        let cache = Self::new(gateway);
        cache.refresh().await;
        cache
    }

    /// The wrapped gateway, for calls the cache does not mediate such as
    /// [`ApplicationGateway::get_one`].
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Copy out the current state.
    #[must_use]
    pub fn snapshot(&self) -> CacheSnapshot {
        let state = lock(&self.state);
        CacheSnapshot {
            applications: state.applications.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
        }
    }

    /// Re-read the full list.
    ///
    /// A response is dropped when a request issued later has already been
    /// applied, so overlapping refreshes settle on the newest read.
    pub async fn refresh(&self) {
        let seq = self.issued_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::acquire(&self.state);
        let result = self.gateway.list().await;

        let mut state = lock(&self.state);
        if seq < state.applied_seq {
            debug!(seq, applied = state.applied_seq, "discarding stale list response");
            return;
        }
        state.applied_seq = seq;
        match result {
            Ok(applications) => {
                state.applications = applications;
                state.error = None;
            }
            Err(err) => {
                warn!(error = %err, "failed to list applications");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Create an application, then re-read the list.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure; the cache is not refreshed in that case.
    pub async fn create(&self, input: &ApplicationInput) -> Result<String, GatewayError> {
        let message = self.gateway.create(input).await?;
        self.refresh().await;
        Ok(message)
    }

    /// Replace the application at `id`, then re-read the list.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure; the cache is not refreshed in that case.
    pub async fn update(&self, id: &str, input: &ApplicationInput) -> Result<String, GatewayError> {
        let message = self.gateway.update(id, input).await?;
        self.refresh().await;
        Ok(message)
    }

    /// Delete the application at `id`, then re-read the list.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure; the cache is not refreshed in that case.
    pub async fn remove(&self, id: &str) -> Result<String, GatewayError> {
        let message = self.gateway.remove(id).await?;
        self.refresh().await;
        Ok(message)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
