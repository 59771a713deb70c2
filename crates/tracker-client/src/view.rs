//! Helpers for rendering the cached list: link vetting, filtering and
//! per-status counts.

use url::Url;

use crate::model::{ApplicationStatus, JobApplication};

/// Return the link as a URL only when it is absolute `http` or `https`.
///
/// Anything else (relative paths, `javascript:` and other schemes, or text
/// that does not parse) should be shown as plain text, not a hyperlink.
///
/// # Examples
/// ```
/// use tracker_client::view::safe_link;
///
/// assert!(safe_link("https://acme.example/jobs/1").is_some());
/// assert!(safe_link("javascript:alert(1)").is_none());
/// ```
#[must_use]
pub fn safe_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Client-side status filter plus substring search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    status: Option<ApplicationStatus>,
    search: String,
}

impl ApplicationFilter {
    /// A filter that keeps everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only applications whose effective status is `status`.
    #[must_use]
    pub fn with_status(mut self, status: Option<ApplicationStatus>) -> Self {
        self.status = status;
        self
    }

    /// Keep only applications whose company or role contains `search`,
    /// ignoring case. Blank searches match everything.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.trim().to_lowercase();
        self
    }

    /// Whether `application` passes the filter.
    #[must_use]
    pub fn matches(&self, application: &JobApplication) -> bool {
        if self
            .status
            .is_some_and(|status| status != application.effective_status())
        {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let fields = &application.fields;
        fields.company.to_lowercase().contains(&self.search)
            || fields.role.to_lowercase().contains(&self.search)
    }

    /// Borrow the matching applications, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, applications: &'a [JobApplication]) -> Vec<&'a JobApplication> {
        applications
            .iter()
            .filter(|application| self.matches(application))
            .collect()
    }
}

/// Number of applications in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    applied: usize,
    interview: usize,
    offer: usize,
    rejected: usize,
}

impl StatusCounts {
    /// Tally `applications` by effective status.
    ///
    /// # Examples
    /// ```
    /// use tracker_client::view::StatusCounts;
    /// use tracker_client::ApplicationStatus;
    ///
    /// let counts = StatusCounts::tally(&[]);
    /// assert_eq!(counts.get(ApplicationStatus::Offer), 0);
    /// assert_eq!(counts.total(), 0);
    /// ```
    #[must_use]
    pub fn tally(applications: &[JobApplication]) -> Self {
        let mut counts = Self::default();
        for application in applications {
            *counts.slot_mut(application.effective_status()) += 1;
        }
        counts
    }

    /// Count for one status.
    #[must_use]
    pub fn get(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Applied => self.applied,
            ApplicationStatus::Interview => self.interview,
            ApplicationStatus::Offer => self.offer,
            ApplicationStatus::Rejected => self.rejected,
        }
    }

    /// Count across all statuses.
    #[must_use]
    pub fn total(&self) -> usize {
        self.applied + self.interview + self.offer + self.rejected
    }

    fn slot_mut(&mut self, status: ApplicationStatus) -> &mut usize {
        match status {
            ApplicationStatus::Applied => &mut self.applied,
            ApplicationStatus::Interview => &mut self.interview,
            ApplicationStatus::Offer => &mut self.offer,
            ApplicationStatus::Rejected => &mut self.rejected,
        }
    }
}
