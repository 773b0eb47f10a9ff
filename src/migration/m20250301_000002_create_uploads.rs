//! Migration: Create uploads table.
//!
//! Uploads are ingested by an external collaborator; the constraints here
//! mirror `NewUpload::validate`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE uploads (
                    id UUID PRIMARY KEY,
                    image_url TEXT NOT NULL CHECK (image_url <> ''),
                    name VARCHAR(100) NOT NULL
                        CHECK (char_length(name) >= 3),
                    contact VARCHAR(10) NOT NULL
                        CHECK (contact ~ '^[0-9]{10}$'),
                    description VARCHAR(500) NOT NULL CHECK (description <> ''),
                    location VARCHAR(100) NOT NULL CHECK (location <> ''),
                    status VARCHAR(20) NOT NULL DEFAULT 'Pending'
                        CHECK (status IN ('Pending', 'In Progress', 'Resolved', 'Closed')),
                    time_elapsed TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    rating INTEGER NOT NULL DEFAULT 0
                        CHECK (rating >= 0 AND rating <= 5),
                    comments JSONB NOT NULL DEFAULT '[]'::jsonb
                        CHECK (jsonb_typeof(comments) = 'array'),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_uploads_time_elapsed ON uploads(time_elapsed DESC);

                CREATE TRIGGER update_uploads_updated_at
                    BEFORE UPDATE ON uploads
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_uploads_updated_at ON uploads;
                DROP TABLE IF EXISTS uploads CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
