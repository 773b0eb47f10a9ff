//! Rate and comment logic shared by the report and upload endpoints.

use actix_web::HttpResponse;
use serde_json::Value as JsonValue;
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    Comment, CommentText, CommentsResponse, RateResponse, Rating, RecordKind,
};

const RATE_FAILED: &str = "Failed to update rating";
const COMMENT_FAILED: &str = "Failed to add comment";

/// Overwrite the rating of one record.
pub async fn rate(
    pool: &DbPool,
    kind: RecordKind,
    raw_id: &str,
    payload: &JsonValue,
) -> AppResult<HttpResponse> {
    let rating = match Rating::coerce(payload) {
        Ok(rating) => rating,
        Err(err) => return Err(reject(pool, kind, raw_id, err, RATE_FAILED).await),
    };
    let id = parse_id(kind, raw_id)?;

    let stored = pool
        .set_rating(kind, id, rating)
        .await
        .map_err(|e| AppError::store(RATE_FAILED, e))?
        .ok_or(AppError::NotFound(kind.noun()))?;

    info!(kind = kind.noun(), %id, rating = stored, "Rating updated");

    Ok(HttpResponse::Ok().json(RateResponse {
        success: true,
        rating: stored,
    }))
}

/// Append a comment to one record.
pub async fn comment(
    pool: &DbPool,
    kind: RecordKind,
    raw_id: &str,
    payload: &JsonValue,
) -> AppResult<HttpResponse> {
    let text = match CommentText::parse(payload) {
        Ok(text) => text,
        Err(err) => return Err(reject(pool, kind, raw_id, err, COMMENT_FAILED).await),
    };
    let id = parse_id(kind, raw_id)?;

    let stored = pool
        .append_comment(kind, id, &Comment::new(text))
        .await
        .map_err(|e| AppError::store(COMMENT_FAILED, e))?
        .ok_or(AppError::NotFound(kind.noun()))?;

    let comments =
        Comment::list_from_json(&stored).map_err(|e| AppError::store(COMMENT_FAILED, e))?;

    info!(kind = kind.noun(), %id, count = comments.len(), "Comment added");

    Ok(HttpResponse::Ok().json(CommentsResponse {
        success: true,
        comments,
    }))
}

/// An id that cannot be parsed can never resolve to a record.
fn parse_id(kind: RecordKind, raw_id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw_id).map_err(|_| AppError::NotFound(kind.noun()))
}

/// Turn an invalid payload into its response error.
///
/// Unknown ids win over invalid payloads, so existence is probed (read only)
/// before the validation error is returned.
async fn reject(
    pool: &DbPool,
    kind: RecordKind,
    raw_id: &str,
    invalid: AppError,
    failure: &'static str,
) -> AppError {
    let id = match parse_id(kind, raw_id) {
        Ok(id) => id,
        Err(not_found) => return not_found,
    };

    match pool.record_exists(kind, id).await {
        Ok(true) => invalid,
        Ok(false) => AppError::NotFound(kind.noun()),
        Err(e) => AppError::store(failure, e),
    }
}
