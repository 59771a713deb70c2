//! Domain primitives, ports, and services.
//!
//! Purpose: Define the job application record, its validation rules, and the
//! use-cases that read and mutate it. Nothing in this module knows about HTTP
//! or SQL; adapters translate at the edges.
//!
//! Public surface:
//! - `Error`, `ErrorCode`: transport agnostic failure and its category.
//! - `JobApplication`, `JobApplicationDraft`, `ApplicationId`,
//!   `ApplicationStatus`: the single stored entity and its parts.
//! - `JobApplicationService`: use-cases implementing the driving ports.

pub mod application_service;
pub mod error;
pub mod job_application;
pub mod ports;
pub mod trace_id;

pub use self::application_service::JobApplicationService;
pub use self::error::{Error, ErrorCode};
pub use self::job_application::{
    ApplicationId, ApplicationStatus, ApplicationValidationError, JobApplication,
    JobApplicationDraft,
};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
