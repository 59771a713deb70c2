//! Reqwest-backed gateway to the tracker API.
//!
//! Each operation is a single round trip with no retry. Any non-2xx status
//! becomes [`GatewayError::Fetch`] carrying the status text; connection
//! failures pass through as [`GatewayError::Transport`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::model::{ApplicationInput, JobApplication};

/// Gateway call that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /applications`
    List,
    /// `POST /applications`
    Create,
    /// `PUT /applications/{id}`
    Update,
    /// `DELETE /applications/{id}`
    Remove,
    /// `GET /applications/{id}`
    GetOne,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "fetching applications",
            Self::Create => "creating application",
            Self::Update => "updating application",
            Self::Remove => "deleting application",
            Self::GetOne => "fetching application",
        })
    }
}

/// Failures raised by [`ApplicationGateway`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    #[error("Error {operation}: {status_text}")]
    Fetch {
        operation: Operation,
        status: u16,
        status_text: String,
    },
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success response carried a body of the wrong shape.
    #[error("Error {operation}: undecodable response: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },
    /// The base URL cannot carry path segments.
    #[error("base URL cannot be a base: {url}")]
    InvalidBaseUrl { url: String },
}

/// The five network calls the client makes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    /// Every stored application.
    async fn list(&self) -> Result<Vec<JobApplication>, GatewayError>;

    /// Create an application; the server assigns its id.
    async fn create(&self, input: &ApplicationInput) -> Result<String, GatewayError>;

    /// Replace the whole application at `id`.
    async fn update(&self, id: &str, input: &ApplicationInput) -> Result<String, GatewayError>;

    /// Delete the application at `id`.
    async fn remove(&self, id: &str) -> Result<String, GatewayError>;

    /// Fetch one application.
    async fn get_one(&self, id: &str) -> Result<JobApplication, GatewayError>;
}

#[derive(Deserialize)]
struct ApplicationsEnvelope {
    applications: Vec<JobApplication>,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: String,
}

/// [`ApplicationGateway`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApplicationGateway {
    client: Client,
    base: Url,
}

impl HttpApplicationGateway {
    /// Build a gateway with no request timeout.
    ///
    /// # Examples
    /// ```
    /// use tracker_client::HttpApplicationGateway;
    /// use url::Url;
    ///
    /// let base = Url::parse("http://127.0.0.1:8080/").expect("valid url");
    /// let gateway = HttpApplicationGateway::new(base);
    /// assert!(gateway.is_ok());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when `base` cannot carry a path or the reqwest client
    /// cannot be constructed.
    pub fn new(base: Url) -> Result<Self, GatewayError> {
        Self::build(base, Client::builder())
    }

    /// Build a gateway that abandons requests after `timeout`.
    ///
    /// # Errors
    ///
    /// Same as [`HttpApplicationGateway::new`].
    pub fn with_timeout(base: Url, timeout: Duration) -> Result<Self, GatewayError> {
        Self::build(base, Client::builder().timeout(timeout))
    }

    fn build(base: Url, builder: reqwest::ClientBuilder) -> Result<Self, GatewayError> {
        if base.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl {
                url: base.to_string(),
            });
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    fn url(&self, id: Option<&str>) -> Result<Url, GatewayError> {
        let mut url = self.base.clone();
        {
            let mut segments =
                url.path_segments_mut()
                    .map_err(|()| GatewayError::InvalidBaseUrl {
                        url: self.base.to_string(),
                    })?;
            segments.pop_if_empty().push("applications");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

async fn read_success<T: DeserializeOwned>(
    operation: Operation,
    response: Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        warn!(%operation, status = status.as_u16(), "tracker API returned failure status");
        return Err(fetch_error(operation, status));
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| GatewayError::Decode {
        operation,
        message: err.to_string(),
    })
}

fn fetch_error(operation: Operation, status: StatusCode) -> GatewayError {
    GatewayError::Fetch {
        operation,
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_owned(),
    }
}

#[async_trait]
impl ApplicationGateway for HttpApplicationGateway {
    async fn list(&self) -> Result<Vec<JobApplication>, GatewayError> {
        let url = self.url(None)?;
        debug!(%url, "listing applications");
        let response = self.client.get(url).send().await?;
        let envelope: ApplicationsEnvelope = read_success(Operation::List, response).await?;
        Ok(envelope.applications)
    }

    async fn create(&self, input: &ApplicationInput) -> Result<String, GatewayError> {
        let url = self.url(None)?;
        debug!(%url, "creating application");
        let response = self.client.post(url).json(input).send().await?;
        let envelope: MessageEnvelope = read_success(Operation::Create, response).await?;
        Ok(envelope.message)
    }

    async fn update(&self, id: &str, input: &ApplicationInput) -> Result<String, GatewayError> {
        let url = self.url(Some(id))?;
        debug!(%url, "updating application");
        let response = self.client.put(url).json(input).send().await?;
        let envelope: MessageEnvelope = read_success(Operation::Update, response).await?;
        Ok(envelope.message)
    }

    async fn remove(&self, id: &str) -> Result<String, GatewayError> {
        let url = self.url(Some(id))?;
        debug!(%url, "deleting application");
        let response = self.client.delete(url).send().await?;
        let envelope: MessageEnvelope = read_success(Operation::Remove, response).await?;
        Ok(envelope.message)
    }

    async fn get_one(&self, id: &str) -> Result<JobApplication, GatewayError> {
        let url = self.url(Some(id))?;
        debug!(%url, "fetching application");
        let response = self.client.get(url).send().await?;
        read_success(Operation::GetOne, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn gateway(base: &str) -> HttpApplicationGateway {
        HttpApplicationGateway::new(Url::parse(base).expect("valid url")).expect("gateway")
    }

    #[rstest]
    #[case::root("http://localhost:8080", None, "http://localhost:8080/applications")]
    #[case::root_slash("http://localhost:8080/", None, "http://localhost:8080/applications")]
    #[case::stage_prefix(
        "https://api.example/dev",
        Some("a1"),
        "https://api.example/dev/applications/a1"
    )]
    #[case::stage_prefix_slash(
        "https://api.example/dev/",
        None,
        "https://api.example/dev/applications"
    )]
    fn builds_urls_under_base(
        #[case] base: &str,
        #[case] id: Option<&str>,
        #[case] expected: &str,
    ) {
        let url = gateway(base).url(id).expect("url");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn encodes_ids_as_one_segment() {
        let url = gateway("http://localhost/").url(Some("a/b c")).expect("url");
        assert_eq!(url.as_str(), "http://localhost/applications/a%2Fb%20c");
    }

    #[rstest]
    fn rejects_bases_without_paths() {
        let base = Url::parse("mailto:someone@example.com").expect("valid url");
        assert!(matches!(
            HttpApplicationGateway::new(base),
            Err(GatewayError::InvalidBaseUrl { .. })
        ));
    }

    #[rstest]
    #[case(StatusCode::BAD_REQUEST, "Bad Request")]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")]
    fn fetch_errors_carry_status_text(#[case] status: StatusCode, #[case] text: &str) {
        let err = fetch_error(Operation::List, status);
        assert_eq!(err.to_string(), format!("Error fetching applications: {text}"));
        assert!(matches!(
            err,
            GatewayError::Fetch { status: code, .. } if code == status.as_u16()
        ));
    }
}
