//! Report entity for SeaORM.

use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub description: String,
    pub location: String,
    pub resolved: bool,
    pub action_taken: String,
    pub proof_image: String,
    pub start_time: DateTimeUtc,
    pub countdown: i32,
    pub rating: i32,
    /// Embedded comments as a JSON array of `{text, date}` objects.
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: JsonValue,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
