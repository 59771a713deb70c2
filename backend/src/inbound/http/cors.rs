//! Permissive cross-origin envelope applied to every response.
//!
//! Browsers served from another origin call the API directly, so each
//! response (errors and preflights included) carries the same three headers.

use actix_web::middleware::DefaultHeaders;

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization,X-Api-Key";
/// Value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// Middleware stamping the CORS headers onto every response.
///
/// `DefaultHeaders` only inserts headers a handler has not already set.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::cors::cors_headers;
///
/// let app = App::new().wrap(cors_headers());
/// ```
#[must_use]
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
        .add(("Access-Control-Allow-Methods", ALLOW_METHODS))
}
