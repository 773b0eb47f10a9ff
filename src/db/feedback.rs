//! Rating and comment updates shared by reports and uploads.
//!
//! Each update is a single statement so concurrent writers to the same row
//! never lose each other's changes.

use sea_orm::{DbErr, EntityName, EntityTrait, FromQueryResult, PaginatorTrait, Statement, Value};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::entity::{report, upload};
use crate::models::{Comment, Rating, RecordKind};

use super::DbPool;

fn table(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Report => report::Entity.table_name(),
        RecordKind::Upload => upload::Entity.table_name(),
    }
}

#[derive(Debug, FromQueryResult)]
struct RatingRow {
    rating: i32,
}

#[derive(Debug, FromQueryResult)]
struct CommentsRow {
    comments: JsonValue,
}

impl DbPool {
    /// Overwrite the rating. Returns the stored value, or `None` for an unknown id.
    pub async fn set_rating(
        &self,
        kind: RecordKind,
        id: Uuid,
        rating: Rating,
    ) -> Result<Option<i32>, DbErr> {
        let sql = format!(
            "UPDATE {} SET rating = $1 WHERE id = $2 RETURNING rating",
            table(kind)
        );

        let row = RatingRow::find_by_statement(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            &sql,
            [Value::from(rating.value()), Value::from(id)],
        ))
        .one(self.connection())
        .await?;

        Ok(row.map(|r| r.rating))
    }

    /// Append a comment to the end of the stored sequence.
    ///
    /// Returns the full stored sequence, or `None` for an unknown id.
    pub async fn append_comment(
        &self,
        kind: RecordKind,
        id: Uuid,
        comment: &Comment,
    ) -> Result<Option<JsonValue>, DbErr> {
        let sql = format!(
            "UPDATE {} SET comments = comments || jsonb_build_array($1::jsonb) WHERE id = $2 RETURNING comments",
            table(kind)
        );

        let row = CommentsRow::find_by_statement(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            &sql,
            [Value::from(comment.to_json()), Value::from(id)],
        ))
        .one(self.connection())
        .await?;

        Ok(row.map(|r| r.comments))
    }

    /// Read-only existence probe.
    pub async fn record_exists(&self, kind: RecordKind, id: Uuid) -> Result<bool, DbErr> {
        let count = match kind {
            RecordKind::Report => {
                report::Entity::find_by_id(id)
                    .count(self.connection())
                    .await?
            }
            RecordKind::Upload => {
                upload::Entity::find_by_id(id)
                    .count(self.connection())
                    .await?
            }
        };

        Ok(count > 0)
    }
}
