//! OpenAPI documentation configuration.

use actix_web::{HttpResponse, get, web};
use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Report Board Server",
        version = "0.1.0",
        description = "Reports and uploads with ratings and comments"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::reports::list_reports,
        api::reports::rate_report,
        api::reports::comment_report,
        api::uploads::list_uploads,
        api::uploads::rate_upload,
        api::uploads::comment_upload,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            error::ListErrorResponse,
            api::health::HealthResponse,
            // Feedback
            models::Comment,
            models::RateRequest,
            models::RateResponse,
            models::CommentRequest,
            models::CommentsResponse,
            // Reports
            models::ReportView,
            models::ReportListResponse,
            // Uploads
            models::UploadStatus,
            models::UploadView,
            models::UploadListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Reports", description = "Listing, rating and commenting on reports"),
        (name = "Uploads", description = "Listing, rating and commenting on uploads")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn configure_openapi_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/api/reports",
            "/api/reports/rate/{id}",
            "/api/reports/comment/{id}",
            "/api/uploads",
            "/api/uploads/rate/{id}",
            "/api/uploads/comment/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }
}
