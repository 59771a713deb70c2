//! `bb8` pool of `diesel-async` PostgreSQL connections.
//!
//! Connections are opened lazily; building the pool never touches the
//! database.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Pooled connection handed to the store for one operation.
pub(crate) type Connection<'a> = PooledConnection<'a, AsyncPgConnection>;

/// Why the pool could not provide a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available before the timeout.
    #[error("connection checkout failed: {message}")]
    Checkout { message: String },
    /// The pool itself could not be constructed.
    #[error("connection pool could not be built: {message}")]
    Build { message: String },
}

/// Sizing and timeout options for [`DbPool`].
///
/// ```ignore
/// let config = PoolConfig::new("postgres://tracker@localhost/tracker")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Ten connections with a thirty second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the number of open connections; zero is raised to one.
    #[must_use]
    pub fn with_max_size(self, max_size: u32) -> Self {
        Self {
            max_size: max_size.max(1),
            ..self
        }
    }

    /// Bound how long a checkout may wait.
    #[must_use]
    pub fn with_connection_timeout(self, connection_timeout: Duration) -> Self {
        Self {
            connection_timeout,
            ..self
        }
    }
}

/// Shared, cloneable handle to the connection pool.
#[derive(Clone)]
pub struct DbPool(Pool<AsyncPgConnection>);

impl DbPool {
    /// Build a pool from `config`.
    ///
    /// # Errors
    /// [`PoolError::Build`] when `bb8` rejects the configuration.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let PoolConfig {
            database_url,
            max_size,
            connection_timeout,
        } = config;
        Pool::builder()
            .max_size(max_size)
            .connection_timeout(connection_timeout)
            .build(AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url))
            .await
            .map(Self)
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// [`PoolError::Checkout`] when the database is unreachable or the
    /// timeout elapses.
    pub(crate) async fn get(&self) -> Result<Connection<'_>, PoolError> {
        self.0.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_then_overrides() {
        let config = PoolConfig::new("postgres://localhost/tracker");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));

        let config = config
            .with_max_size(3)
            .with_connection_timeout(Duration::from_millis(250));
        assert_eq!(config.database_url, "postgres://localhost/tracker");
        assert_eq!(config.max_size, 3);
        assert_eq!(config.connection_timeout, Duration::from_millis(250));
    }

    #[rstest]
    fn zero_max_size_is_raised_to_one() {
        assert_eq!(PoolConfig::new("postgres://x").with_max_size(0).max_size, 1);
    }

    #[rstest]
    #[case(PoolError::Checkout { message: "timed out".into() }, "timed out")]
    #[case(PoolError::Build { message: "bad url".into() }, "bad url")]
    fn errors_keep_their_cause(#[case] error: PoolError, #[case] cause: &str) {
        assert!(error.to_string().ends_with(cause));
    }
}
