//! Wire records exchanged with the tracker API.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline stage of an application. Any stage may follow any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted; the default when unset.
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
    /// Every status, in pipeline order.
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

/// Raised when parsing a status outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_owned()))
    }
}

/// Fields a caller supplies when creating or replacing an application.
///
/// There is no `id`: the server assigns it on create and takes it from the
/// path on update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    pub company: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApplicationInput {
    /// Start an input from the two required fields.
    ///
    /// # Examples
    /// ```
    /// use tracker_client::{ApplicationInput, ApplicationStatus};
    ///
    /// let input = ApplicationInput::new("Acme", "Engineer")
    ///     .with_status(ApplicationStatus::Interview);
    /// assert_eq!(input.status, Some(ApplicationStatus::Interview));
    /// ```
    #[must_use]
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    /// Set the status.
    #[must_use]
    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the posting link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the application date.
    #[must_use]
    pub fn with_date_applied(mut self, date: NaiveDate) -> Self {
        self.date_applied = Some(date);
        self
    }

    /// Set the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A stored application as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    #[serde(flatten)]
    pub fields: ApplicationInput,
}

impl JobApplication {
    /// Status with the `applied` default filled in.
    #[must_use]
    pub fn effective_status(&self) -> ApplicationStatus {
        self.fields.status.unwrap_or_default()
    }

    /// Copy of the editable fields, for feeding an edit form back into
    /// [`crate::ApplicationGateway::update`].
    #[must_use]
    pub fn to_input(&self) -> ApplicationInput {
        self.fields.clone()
    }
}
