//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here describe them for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ApplicationStatus`].
///
/// Omitted statuses are treated as `applied`.
#[derive(ToSchema)]
#[schema(as = crate::domain::ApplicationStatus)]
pub enum ApplicationStatusSchema {
    /// Application submitted.
    #[schema(rename = "applied")]
    Applied,
    /// Interviewing.
    #[schema(rename = "interview")]
    Interview,
    /// Offer received.
    #[schema(rename = "offer")]
    Offer,
    /// Turned down.
    #[schema(rename = "rejected")]
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn status_schema_lists_every_variant() {
        let schema_json = serde_json::to_string(&ApplicationStatusSchema::schema())
            .expect("schema serialises to JSON");
        assert_eq!(ApplicationStatusSchema::name(), "crate.domain.ApplicationStatus");
        for status in crate::domain::ApplicationStatus::ALL {
            assert!(
                schema_json.contains(status.as_str()),
                "schema should contain {status}"
            );
        }
    }
}
