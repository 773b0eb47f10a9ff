//! Migration: Create reports table and shared trigger function.
//!
//! Comments are embedded in the row as a JSONB array.
//! Also creates the shared updated_at trigger function.

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
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;

                CREATE TABLE reports (
                    id UUID PRIMARY KEY,
                    name TEXT NOT NULL CHECK (name <> ''),
                    contact TEXT NOT NULL CHECK (contact <> ''),
                    description TEXT NOT NULL CHECK (description <> ''),
                    location TEXT NOT NULL CHECK (location <> ''),
                    resolved BOOLEAN NOT NULL DEFAULT FALSE,
                    action_taken TEXT NOT NULL DEFAULT '',
                    proof_image TEXT NOT NULL DEFAULT '',
                    start_time TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    countdown INTEGER NOT NULL DEFAULT 0,
                    rating INTEGER NOT NULL DEFAULT 0
                        CHECK (rating >= 0 AND rating <= 5),
                    comments JSONB NOT NULL DEFAULT '[]'::jsonb
                        CHECK (jsonb_typeof(comments) = 'array'),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Listing is always most recent first
                CREATE INDEX idx_reports_start_time ON reports(start_time DESC);

                CREATE TRIGGER update_reports_updated_at
                    BEFORE UPDATE ON reports
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
                DROP TRIGGER IF EXISTS update_reports_updated_at ON reports;
                DROP TABLE IF EXISTS reports CASCADE;
                DROP FUNCTION IF EXISTS update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }
}
