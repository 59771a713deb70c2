//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::job_applications;

/// Row struct for reading from the job_applications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = job_applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobApplicationRow {
    pub id: String,
    pub company: String,
    pub role: String,
    pub status: Option<String>,
    pub link: Option<String>,
    pub date_applied: Option<NaiveDate>,
    pub notes: Option<String>,
    pub description: Option<String>,
}

/// Borrowed row used for both inserts and whole-record overwrites.
///
/// `None` fields insert the column default (NULL); the upsert copies every
/// column from the excluded row so omitted fields are cleared, not retained.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = job_applications)]
pub(crate) struct JobApplicationWrite<'a> {
    pub id: &'a str,
    pub company: &'a str,
    pub role: &'a str,
    pub status: Option<&'a str>,
    pub link: Option<&'a str>,
    pub date_applied: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub description: Option<&'a str>,
}
