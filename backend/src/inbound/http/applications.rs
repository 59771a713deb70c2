//! Job application HTTP handlers.
//!
//! ```text
//! GET    /applications
//! POST   /applications
//! GET    /applications/{id}
//! PUT    /applications/{id}
//! DELETE /applications/{id}
//! ```
//!
//! Bodies are read as raw bytes so clients that omit a JSON content type are
//! still served. `OPTIONS` on any path answers the CORS preflight.

use actix_web::http::Method;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::applications_dto::{
    ApplicationsEnvelope, JobApplicationResponse, MessageEnvelope, NO_ID, parse_draft, parse_id,
};
use crate::inbound::http::state::HttpState;

const METHOD_NOT_ALLOWED: &str = "Method not allowed";
const NOT_FOUND: &str = "Not found";

/// Register the application routes on an actix service config.
///
/// Methods a resource does not serve answer 405; the collection resource
/// rejects `PUT` and `DELETE` with 400 because they need an identifier.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/applications", "/applications/"])
            .route(web::get().to(list_applications))
            .route(web::post().to(create_application))
            .route(web::put().to(missing_id))
            .route(web::delete().to(missing_id))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/applications/{id}")
            .route(web::get().to(get_application))
            .route(web::put().to(update_application))
            .route(web::delete().to(delete_application))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}

/// List every stored application.
#[utoipa::path(
    get,
    path = "/applications",
    responses(
        (status = 200, description = "All applications", body = ApplicationsEnvelope),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["applications"],
    operation_id = "listApplications"
)]
pub async fn list_applications(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ApplicationsEnvelope>> {
    let applications = state.applications_query.list().await?;
    Ok(web::Json(ApplicationsEnvelope {
        applications: applications
            .into_iter()
            .map(JobApplicationResponse::from)
            .collect(),
    }))
}

/// Create an application under a server-assigned identifier.
#[utoipa::path(
    post,
    path = "/applications",
    request_body = crate::inbound::http::applications_dto::JobApplicationRequest,
    responses(
        (status = 200, description = "Created", body = MessageEnvelope),
        (status = 400, description = "Missing or invalid body", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["applications"],
    operation_id = "createApplication"
)]
pub async fn create_application(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<MessageEnvelope>> {
    let draft = parse_draft(&body)?;
    state.applications.create(draft).await?;
    Ok(web::Json(MessageEnvelope::new("Success")))
}

/// Fetch one application.
#[utoipa::path(
    get,
    path = "/applications/{id}",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "The application", body = JobApplicationResponse),
        (status = 404, description = "No application with this id", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["applications"],
    operation_id = "getApplication"
)]
pub async fn get_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<JobApplicationResponse>> {
    let id = parse_id(path.into_inner())?;
    let application = state.applications_query.find(&id).await?;
    Ok(web::Json(application.into()))
}

/// Replace the whole application at `id`.
///
/// Fields omitted from the body are cleared. An `id` inside the body is
/// ignored in favour of the path.
#[utoipa::path(
    put,
    path = "/applications/{id}",
    params(("id" = String, Path, description = "Application identifier")),
    request_body = crate::inbound::http::applications_dto::JobApplicationRequest,
    responses(
        (status = 200, description = "Updated", body = MessageEnvelope),
        (status = 400, description = "Missing id or invalid body", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["applications"],
    operation_id = "updateApplication"
)]
pub async fn update_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<MessageEnvelope>> {
    let id = parse_id(path.into_inner())?;
    let draft = parse_draft(&body)?;
    let updated = state.applications.update(id, draft).await?;
    Ok(web::Json(MessageEnvelope::new(format!(
        "Updated {} successfully",
        updated.id()
    ))))
}

/// Delete the application at `id`. Deleting an absent id succeeds.
#[utoipa::path(
    delete,
    path = "/applications/{id}",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageEnvelope),
        (status = 400, description = "Missing id", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["applications"],
    operation_id = "deleteApplication"
)]
pub async fn delete_application(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageEnvelope>> {
    let id = parse_id(path.into_inner())?;
    state.applications.delete(&id).await?;
    Ok(web::Json(MessageEnvelope::new(format!(
        "Delete {id} Successfully"
    ))))
}

async fn missing_id() -> ApiResult<HttpResponse> {
    Err(Error::invalid_request(NO_ID))
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type(ContentType::plaintext())
        .body(METHOD_NOT_ALLOWED)
}

/// Fallback for paths no resource matches: preflights succeed, everything
/// else is 404.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::applications::unmatched;
///
/// let app = App::new().default_service(web::to(unmatched));
/// ```
pub async fn unmatched(req: HttpRequest) -> HttpResponse {
    if *req.method() == Method::OPTIONS {
        return preflight().await;
    }
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND)
}

#[cfg(test)]
#[path = "applications_tests.rs"]
mod tests;
