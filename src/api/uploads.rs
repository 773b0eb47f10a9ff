//! Upload API endpoints.

use actix_web::{HttpResponse, get, post, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CommentRequest, RateRequest, RecordKind, UploadListResponse, UploadView};

use super::feedback;
use super::payload::FormOrJson;

/// Configure upload routes.
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_uploads)
        .service(rate_upload)
        .service(comment_upload);
}

/// List all uploads, most recent first.
///
/// GET /api/uploads
#[utoipa::path(
    get,
    path = "/api/uploads",
    tag = "Uploads",
    responses(
        (status = 200, description = "All uploads", body = UploadListResponse),
        (status = 500, description = "Store failure", body = crate::error::ListErrorResponse)
    )
)]
#[get("/uploads")]
pub async fn list_uploads(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let data: Vec<UploadView> = pool
        .list_uploads()
        .await?
        .into_iter()
        .map(UploadView::from)
        .collect();

    let message = data.is_empty().then(|| "No uploads found".to_string());

    Ok(HttpResponse::Ok().json(UploadListResponse {
        success: true,
        message,
        data,
    }))
}

/// Set the rating of an upload.
///
/// POST /api/uploads/rate/{id}
#[utoipa::path(
    post,
    path = "/api/uploads/rate/{id}",
    tag = "Uploads",
    params(
        ("id" = String, Path, description = "Upload id")
    ),
    request_body = RateRequest,
    responses(
        (status = 200, description = "Rating stored", body = crate::models::RateResponse),
        (status = 400, description = "Invalid rating", body = crate::error::ErrorResponse),
        (status = 404, description = "Upload not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[post("/uploads/rate/{id}")]
pub async fn rate_upload(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: FormOrJson<RateRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    feedback::rate(&pool, RecordKind::Upload, &id, &body.into_inner().rating).await
}

/// Append a comment to an upload.
///
/// POST /api/uploads/comment/{id}
#[utoipa::path(
    post,
    path = "/api/uploads/comment/{id}",
    tag = "Uploads",
    params(
        ("id" = String, Path, description = "Upload id")
    ),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Updated comment list", body = crate::models::CommentsResponse),
        (status = 400, description = "Invalid comment", body = crate::error::ErrorResponse),
        (status = 404, description = "Upload not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
#[post("/uploads/comment/{id}")]
pub async fn comment_upload(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
    body: FormOrJson<CommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    feedback::comment(&pool, RecordKind::Upload, &id, &body.into_inner().comment).await
}
