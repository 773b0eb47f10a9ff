//! Upload domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::entity::upload;
use crate::error::{AppError, AppResult};

use super::feedback::{Comment, Rating};

/// Upload processing status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UploadStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

/// An upload handed over by the ingestion side.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUpload {
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub name: String,
    pub contact: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub status: UploadStatus,
    /// Defaults to the insertion time.
    #[serde(default)]
    pub time_elapsed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl NewUpload {
    pub const NAME_MIN_CHARS: usize = 3;
    pub const NAME_MAX_CHARS: usize = 100;
    pub const DESCRIPTION_MAX_CHARS: usize = 500;
    pub const LOCATION_MAX_CHARS: usize = 100;

    /// Check every column constraint before the row is written.
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("imageURL", &self.image_url),
            ("name", &self.name),
            ("contact", &self.contact),
            ("description", &self.description),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(invalid(format!("Upload {} is required", field)));
            }
        }

        let name_len = self.name.chars().count();
        if !(Self::NAME_MIN_CHARS..=Self::NAME_MAX_CHARS).contains(&name_len) {
            return Err(invalid(format!(
                "Upload name must be between {} and {} characters",
                Self::NAME_MIN_CHARS,
                Self::NAME_MAX_CHARS
            )));
        }

        if !is_phone_number(&self.contact) {
            return Err(invalid(
                "Invalid phone number. It should be a 10-digit number.".to_string(),
            ));
        }

        if self.description.chars().count() > Self::DESCRIPTION_MAX_CHARS {
            return Err(invalid(format!(
                "Upload description must be at most {} characters",
                Self::DESCRIPTION_MAX_CHARS
            )));
        }

        if self.location.chars().count() > Self::LOCATION_MAX_CHARS {
            return Err(invalid(format!(
                "Upload location must be at most {} characters",
                Self::LOCATION_MAX_CHARS
            )));
        }

        Rating::new(self.rating as i64)?;

        if self.comments.iter().any(|c| c.text.trim().is_empty()) {
            return Err(invalid(
                "Upload comments must have non-empty text".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(message: String) -> AppError {
    AppError::Validation(message)
}

/// Exactly ten ASCII digits.
pub fn is_phone_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Upload projection returned by `GET /api/uploads`.
///
/// Comments are passed through as stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadView {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub status: String,
    pub time_elapsed: DateTime<Utc>,
    pub rating: i32,
    #[schema(value_type = Vec<Object>)]
    pub comments: JsonValue,
}

impl From<upload::Model> for UploadView {
    fn from(model: upload::Model) -> Self {
        UploadView {
            id: model.id.to_string(),
            name: model.name,
            contact: model.contact,
            description: model.description,
            location: model.location,
            image_url: model.image_url,
            status: model.status,
            time_elapsed: model.time_elapsed,
            rating: model.rating,
            comments: model.comments,
        }
    }
}

/// Response for `GET /api/uploads`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadListResponse {
    pub success: bool,
    /// Present only when the list is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<UploadView>,
}
