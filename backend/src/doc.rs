//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every job application endpoint and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use crate::inbound::http::applications_dto::{
    ApplicationsEnvelope, JobApplicationRequest, JobApplicationResponse, MessageEnvelope,
};
use crate::inbound::http::schemas::ApplicationStatusSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job application tracker API",
        description = "Create, list, update and delete job applications.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::applications::list_applications,
        crate::inbound::http::applications::create_application,
        crate::inbound::http::applications::get_application,
        crate::inbound::http::applications::update_application,
        crate::inbound::http::applications::delete_application,
    ),
    components(schemas(
        ApplicationStatusSchema,
        JobApplicationRequest,
        JobApplicationResponse,
        ApplicationsEnvelope,
        MessageEnvelope
    )),
    tags(
        (name = "applications", description = "Job application records")
    )
)]
pub struct ApiDoc;
