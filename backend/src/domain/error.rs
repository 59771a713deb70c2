//! Transport-agnostic failures raised by the application service.
//!
//! Inbound adapters decide how each [`ErrorCode`] is presented; the HTTP
//! adapter maps them to status codes and plain-text bodies.

use std::borrow::Cow;

use super::TraceId;

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request was malformed or failed validation.
    InvalidRequest,
    /// No record has the requested id.
    NotFound,
    /// The record store failed.
    InternalError,
}

impl ErrorCode {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Not found",
            Self::InternalError => "Internal error",
        }
    }
}

/// A categorised failure with a caller-facing message.
///
/// The [`TraceId`] in scope at construction is captured so the response can
/// be matched to the log lines of the request that produced it.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("No application with id a1");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "No application with id a1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: Cow<'static, str>,
    trace_id: Option<TraceId>,
}

impl Error {
    /// Build an error of the given category. A blank message is replaced by
    /// a generic one for the category.
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            Cow::Borrowed(code.fallback_message())
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: TraceId::current(),
        }
    }

    /// [`ErrorCode::InvalidRequest`] with `message`.
    pub fn invalid_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// [`ErrorCode::NotFound`] with `message`.
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// [`ErrorCode::InternalError`] with `message`.
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Replace the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }
}
