//! Report API endpoints.

use actix_web::{HttpResponse, get, post, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{CommentRequest, RateRequest, RecordKind, ReportListResponse, ReportView};

use super::feedback;
use super::payload::FormOrJson;

/// Configure report routes.
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_reports)
        .service(rate_report)
        .service(comment_report);
}

/// List all reports, most recent first.
///
/// GET /api/reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "All reports", body = ReportListResponse),
        (status = 500, description = "Store failure", body = crate::error::ListErrorResponse)
    )
)]
#[get("/reports")]
pub async fn list_reports(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let data = pool
        .list_reports()
        .await?
        .into_iter()
        .map(ReportView::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::listing("Error fetching reports", e))?;

    let message = data.is_empty().then(|| "No reports found".to_string());

    Ok(HttpResponse::Ok().json(ReportListResponse {
        success: true,
        message,
        data,
    }))
}

/// Set the rating of a report.
///
/// POST /api/reports/rate/{id}
#[utoipa::path(
    post,
    path = "/api/reports/rate/{id}",
    tag = "Reports",
    params(
        ("id" = String, Path, description = "Report id")
    ),
    request_body = RateRequest,
    responses(
        (status = 200, description = "Rating stored", body = crate::models::RateResponse),
        (status = 400, description = "Invalid rating", body = crate::error::ErrorResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[post("/reports/rate/{id}")]
pub async fn rate_report(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: FormOrJson<RateRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    feedback::rate(&pool, RecordKind::Report, &id, &body.into_inner().rating).await
}

/// Append a comment to a report.
///
/// POST /api/reports/comment/{id}
#[utoipa::path(
    post,
    path = "/api/reports/comment/{id}",
    tag = "Reports",
    params(
        ("id" = String, Path, description = "Report id")
    ),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Updated comment list", body = crate::models::CommentsResponse),
        (status = 400, description = "Invalid comment", body = crate::error::ErrorResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[post("/reports/comment/{id}")]
pub async fn comment_report(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: FormOrJson<CommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    feedback::comment(&pool, RecordKind::Report, &id, &body.into_inner().comment).await
}
