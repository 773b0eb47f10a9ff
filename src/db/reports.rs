//! Database queries for reports.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::report::{self, ActiveModel, Entity as Report};
use crate::error::{AppError, AppResult};
use crate::models::{Comment, NewReport};

use super::DbPool;

fn active_model(id: Uuid, new: NewReport, now: DateTime<Utc>) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        name: Set(new.name),
        contact: Set(new.contact),
        description: Set(new.description),
        location: Set(new.location),
        resolved: Set(new.resolved),
        action_taken: Set(new.action_taken),
        proof_image: Set(new.proof_image),
        start_time: Set(new.start_time.unwrap_or(now)),
        countdown: Set(new.countdown),
        rating: Set(new.rating),
        comments: Set(Comment::list_to_json(&new.comments)),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

impl DbPool {
    /// List every report, most recent `start_time` first.
    pub async fn list_reports(&self) -> AppResult<Vec<report::Model>> {
        Report::find()
            .order_by_desc(report::Column::StartTime)
            .all(self.connection())
            .await
            .map_err(|e| AppError::listing("Error fetching reports", e))
    }

    /// Validate and insert a single report.
    pub async fn insert_report(&self, id: Uuid, new: NewReport) -> AppResult<report::Model> {
        new.validate()?;

        active_model(id, new, Utc::now())
            .insert(self.connection())
            .await
            .map_err(|e| AppError::store("Failed to insert report", e))
    }

    /// Count how many of `ids` are already stored.
    pub async fn count_reports_with_ids(&self, ids: &[Uuid]) -> AppResult<u64> {
        Report::find()
            .filter(report::Column::Id.is_in(ids.iter().copied()))
            .count(self.connection())
            .await
            .map_err(|e| AppError::store("Failed to count reports", e))
    }

    /// Validate and insert several reports in one statement.
    ///
    /// Nothing is written unless every report is valid.
    pub async fn insert_reports(&self, reports: Vec<(Uuid, NewReport)>) -> AppResult<u64> {
        if reports.is_empty() {
            return Ok(0);
        }
        for (_, new) in &reports {
            new.validate()?;
        }

        let now = Utc::now();
        let models: Vec<ActiveModel> = reports
            .into_iter()
            .map(|(id, new)| active_model(id, new, now))
            .collect();

        Report::insert_many(models)
            .exec_without_returning(self.connection())
            .await
            .map_err(|e| AppError::store("Failed to insert reports", e))
    }
}
