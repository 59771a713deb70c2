//! HTTP inbound adapter exposing the job application endpoints.

pub mod applications;
pub mod applications_dto;
pub mod cors;
pub mod error;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use cors::cors_headers;
use state::HttpState;

/// Assemble the application routes with tracing and the CORS envelope.
///
/// Unmatched paths fall through to [`applications::unmatched`] so they also
/// carry the envelope.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use backend::inbound::http::{build_app, state::HttpState};
///
/// let app = build_app(web::Data::new(HttpState::default()));
/// # let _ = app;
/// ```
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(cors_headers())
        .wrap(Trace)
        .configure(applications::configure)
        .default_service(web::to(applications::unmatched))
}
