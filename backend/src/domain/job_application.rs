//! Job application record and its validated parts.
//!
//! A [`JobApplication`] is the only stored entity: an [`ApplicationId`]
//! assigned once by the service plus a [`JobApplicationDraft`] supplied by
//! the caller. Updates replace the whole draft; there is no field-level
//! patching.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Validation failures raised while building application records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationValidationError {
    /// Identifier was blank after trimming.
    #[error("application id must not be empty")]
    EmptyId,
    /// Company was absent or blank.
    #[error("company is required")]
    MissingCompany,
    /// Role was absent or blank.
    #[error("role is required")]
    MissingRole,
    /// Status was not one of the known values.
    #[error("status must be one of applied, interview, offer, rejected (got {value})")]
    UnknownStatus { value: String },
    /// Date was not an ISO `YYYY-MM-DD` calendar date.
    #[error("dateApplied must be an ISO date (got {value})")]
    InvalidDate { value: String },
}

/// Opaque primary key of a stored application.
///
/// ## Invariants
/// - Non-empty and free of surrounding whitespace.
///
/// # Examples
/// ```
/// use backend::domain::ApplicationId;
///
/// let id = ApplicationId::new("abc").expect("valid id");
/// assert_eq!(id.as_str(), "abc");
/// assert!(ApplicationId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Validate and wrap a caller-supplied identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApplicationValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() || raw.trim() != raw {
            return Err(ApplicationValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// Mint a fresh identifier for a newly created record.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Where an application currently stands.
///
/// Any status may follow any other; no workflow is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    /// Submitted, awaiting a response.
    #[default]
    Applied,
    /// Interviewing.
    Interview,
    /// Offer received.
    Offer,
    /// Turned down.
    Rejected,
}

impl ApplicationStatus {
    /// Every status in display order.
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interview, Self::Offer, Self::Rejected];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ApplicationValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ApplicationValidationError::UnknownStatus {
                value: value.to_owned(),
            })
    }
}

/// Parse an optional ISO date, treating a blank string as absent.
///
/// HTML date inputs submit `""` when left empty, so blank values are not an
/// error.
///
/// # Examples
/// ```
/// use backend::domain::job_application::parse_optional_date;
///
/// assert!(parse_optional_date(Some("2024-03-01")).expect("valid").is_some());
/// assert!(parse_optional_date(Some("")).expect("blank").is_none());
/// assert!(parse_optional_date(Some("03/01/2024")).is_err());
/// ```
pub fn parse_optional_date(
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ApplicationValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApplicationValidationError::InvalidDate {
                value: raw.to_owned(),
            }),
    }
}

/// Caller-supplied content of an application, without its identifier.
///
/// ## Invariants
/// - `company` and `role` are non-blank.
/// - Free text (`notes`, `description`) is kept verbatim, line breaks
///   included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplicationDraft {
    company: String,
    role: String,
    status: Option<ApplicationStatus>,
    link: Option<String>,
    date_applied: Option<NaiveDate>,
    notes: Option<String>,
    description: Option<String>,
}

impl JobApplicationDraft {
    /// Build a draft from the two required fields.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{ApplicationStatus, JobApplicationDraft};
    ///
    /// let draft = JobApplicationDraft::new("Acme", "Engineer")
    ///     .expect("valid draft")
    ///     .with_status(Some(ApplicationStatus::Interview));
    /// assert_eq!(draft.company(), "Acme");
    /// assert!(JobApplicationDraft::new("", "Engineer").is_err());
    /// ```
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, ApplicationValidationError> {
        let company = company.into();
        let role = role.into();
        if company.trim().is_empty() {
            return Err(ApplicationValidationError::MissingCompany);
        }
        if role.trim().is_empty() {
            return Err(ApplicationValidationError::MissingRole);
        }
        Ok(Self {
            company,
            role,
            status: None,
            link: None,
            date_applied: None,
            notes: None,
            description: None,
        })
    }

    /// Set the status; `None` leaves it unset.
    #[must_use]
    pub fn with_status(mut self, status: Option<ApplicationStatus>) -> Self {
        self.status = status;
        self
    }

    /// Set the job posting link.
    #[must_use]
    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    /// Set the date the application was submitted.
    #[must_use]
    pub fn with_date_applied(mut self, date_applied: Option<NaiveDate>) -> Self {
        self.date_applied = date_applied;
        self
    }

    /// Set free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Set the job description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Company name.
    #[must_use]
    pub fn company(&self) -> &str {
        self.company.as_str()
    }

    /// Role title.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    /// Stored status, if one was supplied.
    #[must_use]
    pub fn status(&self) -> Option<ApplicationStatus> {
        self.status
    }

    /// Posting link exactly as supplied.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Submission date.
    #[must_use]
    pub fn date_applied(&self) -> Option<NaiveDate> {
        self.date_applied
    }

    /// Notes exactly as supplied.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Description exactly as supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A stored job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    id: ApplicationId,
    draft: JobApplicationDraft,
}

impl JobApplication {
    /// Pair an identifier with its content.
    #[must_use]
    pub fn new(id: ApplicationId, draft: JobApplicationDraft) -> Self {
        Self { id, draft }
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    /// Record content.
    #[must_use]
    pub fn draft(&self) -> &JobApplicationDraft {
        &self.draft
    }

    /// Stored status, unset when the caller never supplied one.
    #[must_use]
    pub fn status(&self) -> Option<ApplicationStatus> {
        self.draft.status()
    }

    /// Status used for display and counting; unset means applied.
    #[must_use]
    pub fn effective_status(&self) -> ApplicationStatus {
        self.draft.status().unwrap_or_default()
    }

    /// Split the record back into its identifier and content.
    #[must_use]
    pub fn into_parts(self) -> (ApplicationId, JobApplicationDraft) {
        (self.id, self.draft)
    }
}
