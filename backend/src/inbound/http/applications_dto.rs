//! Job application DTOs and payload parsing.
//!
//! Only the seven record fields are read from a request body; unknown keys
//! and any `id` in the body are dropped during deserialisation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::job_application::parse_optional_date;
use crate::domain::{
    ApplicationId, ApplicationStatus, ApplicationValidationError, Error, JobApplication,
    JobApplicationDraft,
};

/// Message for a request without a body.
pub(super) const NO_BODY: &str = "No body";
/// Message for a body that is not a JSON object of the expected shape.
pub(super) const INVALID_BODY: &str = "Invalid body";
/// Message for an item route reached without an identifier.
pub(super) const NO_ID: &str = "No id provided";

/// Request payload for creating or replacing an application.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationRequest {
    #[schema(example = "Acme")]
    pub company: Option<String>,
    #[schema(example = "Engineer")]
    pub role: Option<String>,
    #[schema(value_type = Option<crate::inbound::http::schemas::ApplicationStatusSchema>)]
    pub status: Option<String>,
    #[schema(example = "https://acme.example/jobs/1")]
    pub link: Option<String>,
    #[schema(format = "date", example = "2024-03-01")]
    pub date_applied: Option<String>,
    pub notes: Option<String>,
    pub description: Option<String>,
}

/// A stored application as returned to clients.
///
/// Unset optional fields are omitted rather than serialised as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationResponse {
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<crate::inbound::http::schemas::ApplicationStatusSchema>)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(format = "date")]
    pub date_applied: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `GET /applications`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ApplicationsEnvelope {
    pub applications: Vec<JobApplicationResponse>,
}

/// Body of every successful mutation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageEnvelope {
    #[schema(example = "Success")]
    pub message: String,
}

impl MessageEnvelope {
    pub(super) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<JobApplication> for JobApplicationResponse {
    fn from(application: JobApplication) -> Self {
        let (id, draft) = application.into_parts();
        let status = draft.status().map(|status| status.as_str().to_owned());
        let date_applied = draft
            .date_applied()
            .map(|date| date.format("%Y-%m-%d").to_string());
        Self {
            id: id.to_string(),
            company: draft.company().to_owned(),
            role: draft.role().to_owned(),
            status,
            link: draft.link().map(str::to_owned),
            date_applied,
            notes: draft.notes().map(str::to_owned),
            description: draft.description().map(str::to_owned),
        }
    }
}

fn parse_status(raw: Option<String>) -> Result<Option<ApplicationStatus>, ApplicationValidationError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

impl TryFrom<JobApplicationRequest> for JobApplicationDraft {
    type Error = ApplicationValidationError;

    fn try_from(payload: JobApplicationRequest) -> Result<Self, Self::Error> {
        let status = parse_status(payload.status)?;
        let date_applied = parse_optional_date(payload.date_applied.as_deref())?;
        Ok(JobApplicationDraft::new(
            payload.company.unwrap_or_default(),
            payload.role.unwrap_or_default(),
        )?
        .with_status(status)
        .with_link(payload.link)
        .with_date_applied(date_applied)
        .with_notes(payload.notes)
        .with_description(payload.description))
    }
}

/// Parse a raw request body into a validated draft.
///
/// # Examples
/// ```ignore
/// let draft = parse_draft(br#"{"company":"Acme","role":"Engineer"}"#)?;
/// assert_eq!(draft.company(), "Acme");
/// ```
pub(super) fn parse_draft(body: &[u8]) -> Result<JobApplicationDraft, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::invalid_request(NO_BODY));
    }
    let payload: JobApplicationRequest =
        serde_json::from_slice(body).map_err(|_| Error::invalid_request(INVALID_BODY))?;
    JobApplicationDraft::try_from(payload).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Parse a path segment into an identifier, rejecting blank values.
pub(super) fn parse_id(raw: String) -> Result<ApplicationId, Error> {
    ApplicationId::new(raw).map_err(|_| Error::invalid_request(NO_ID))
}
