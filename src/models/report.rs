//! Report domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::report;
use crate::error::{AppError, AppResult};

use super::feedback::{Comment, Rating};

/// A report to be inserted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub name: String,
    pub contact: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub action_taken: String,
    #[serde(default)]
    pub proof_image: String,
    /// Defaults to the insertion time.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub countdown: i32,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl NewReport {
    /// Check every column constraint before the row is written.
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("name", &self.name),
            ("contact", &self.contact),
            ("description", &self.description),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(AppError::Validation(format!("Report {} is required", field)));
            }
        }

        Rating::new(self.rating as i64)?;

        if self.comments.iter().any(|c| c.text.trim().is_empty()) {
            return Err(AppError::Validation(
                "Report comments must have non-empty text".to_string(),
            ));
        }

        Ok(())
    }
}

/// Report projection returned by `GET /api/reports`.
///
/// Contact, proof image, countdown and timestamps are not exposed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub resolved: bool,
    pub action_taken: String,
    pub rating: i32,
    pub comments: Vec<Comment>,
}

impl TryFrom<report::Model> for ReportView {
    type Error = serde_json::Error;

    fn try_from(model: report::Model) -> Result<Self, Self::Error> {
        let comments = Comment::list_from_json(&model.comments)?;
        Ok(ReportView {
            id: model.id.to_string(),
            name: model.name,
            description: model.description,
            location: model.location,
            resolved: model.resolved,
            action_taken: model.action_taken,
            rating: model.rating,
            comments,
        })
    }
}

/// Response for `GET /api/reports`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportListResponse {
    pub success: bool,
    /// Present only when the list is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<ReportView>,
}
