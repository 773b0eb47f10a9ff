//! Rating and comment value types shared by reports and uploads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const INVALID_RATING: &str = "Rating must be a number between 0 and 5";
pub const INVALID_COMMENT: &str = "Comment is required and must be a non-empty string";

/// A rating in `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 5;

    pub fn new(value: i64) -> AppResult<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Rating(value as i32))
        } else {
            Err(AppError::Validation(INVALID_RATING.to_string()))
        }
    }

    /// Coerce a request payload into a rating.
    ///
    /// Integers are taken as-is, finite floats are truncated toward zero and
    /// strings contribute their leading integer (`" 4 stars"` is 4). Arrays
    /// are joined with commas first, so `[3]` is 3 and `["2", 5]` is 2.
    /// Every other shape is rejected.
    pub fn coerce(value: &JsonValue) -> AppResult<Self> {
        let parsed = match value {
            JsonValue::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
            JsonValue::String(s) => leading_integer(s),
            JsonValue::Array(items) => leading_integer(&join_items(items)),
            _ => None,
        };

        parsed
            .ok_or_else(|| AppError::Validation(INVALID_RATING.to_string()))
            .and_then(Self::new)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

/// Comma-joined text of an array; nulls contribute nothing.
fn join_items(items: &[JsonValue]) -> String {
    items
        .iter()
        .map(|item| match item {
            JsonValue::Null => String::new(),
            JsonValue::String(s) => s.clone(),
            JsonValue::Array(inner) => join_items(inner),
            JsonValue::Object(_) => "[object Object]".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse the optional sign and digits at the start of `s`, after leading whitespace.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Comment text, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn parse(value: &JsonValue) -> AppResult<Self> {
        match value {
            JsonValue::String(s) if !s.trim().is_empty() => Ok(CommentText(s.trim().to_string())),
            _ => Err(AppError::Validation(INVALID_COMMENT.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A comment embedded in a report or upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    /// New comment dated now.
    pub fn new(text: CommentText) -> Self {
        Comment {
            text: text.0,
            date: Utc::now(),
        }
    }

    /// Decode a stored comment array.
    pub fn list_from_json(value: &JsonValue) -> Result<Vec<Comment>, serde_json::Error> {
        Vec::<Comment>::deserialize(value)
    }

    /// Stored form of a single comment.
    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({ "text": self.text, "date": self.date })
    }

    /// Encode comments for storage.
    pub fn list_to_json(comments: &[Comment]) -> JsonValue {
        JsonValue::Array(comments.iter().map(Comment::to_json).collect())
    }
}

/// Request body for rating a report or upload.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RateRequest {
    /// Integer 0-5, or anything coercible to one.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub rating: JsonValue,
}

/// Request body for commenting on a report or upload.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CommentRequest {
    #[serde(default)]
    #[schema(value_type = String)]
    pub comment: JsonValue,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RateResponse {
    pub success: bool,
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentsResponse {
    pub success: bool,
    pub comments: Vec<Comment>,
}
