//! Database queries for uploads.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::upload::{self, ActiveModel, Entity as Upload};
use crate::error::{AppError, AppResult};
use crate::models::{Comment, NewUpload};

use super::DbPool;

impl DbPool {
    /// List every upload, most recent `time_elapsed` first.
    pub async fn list_uploads(&self) -> AppResult<Vec<upload::Model>> {
        Upload::find()
            .order_by_desc(upload::Column::TimeElapsed)
            .all(self.connection())
            .await
            .map_err(|e| AppError::listing("Error fetching uploads", e))
    }

    /// Validate and insert an upload handed over by the ingestion side.
    pub async fn insert_upload(&self, new: NewUpload) -> AppResult<upload::Model> {
        new.validate()?;

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            image_url: Set(new.image_url),
            name: Set(new.name),
            contact: Set(new.contact),
            description: Set(new.description),
            location: Set(new.location),
            status: Set(new.status.as_str().to_string()),
            time_elapsed: Set(new.time_elapsed.unwrap_or(now)),
            rating: Set(new.rating),
            comments: Set(Comment::list_to_json(&new.comments)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::store("Failed to insert upload", e))
    }
}
