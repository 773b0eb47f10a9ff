//! Catch-all for server errors that did not produce a JSON body.
//!
//! Handler errors already render their own envelope; anything else that ends
//! in a 5xx (framework errors, file service failures) is replaced with the
//! generic JSON error so callers always get a parseable body.

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, Result};
use tracing::error;

use crate::error::{ErrorResponse, UNHANDLED_MESSAGE};

/// Error handler middleware that rewrites non-JSON 5xx responses.
pub fn unhandled_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(render_unhandled)
}

fn render_unhandled<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, res) = res.into_parts();
    error!(
        method = %req.method(),
        path = %req.path(),
        status = res.status().as_u16(),
        "Unhandled server error"
    );

    let res = HttpResponse::InternalServerError().json(ErrorResponse::new(UNHANDLED_MESSAGE));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
