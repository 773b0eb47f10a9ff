//! Shared test helpers for integration tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use chrono::{DateTime, Utc};
use report_board_lib::api;
use report_board_lib::config::Config;
use report_board_lib::db::DbPool;
use report_board_lib::middleware::unhandled_errors;
use report_board_lib::models::NewReport;
use std::sync::OnceLock;
use uuid::Uuid;

static MIGRATIONS_RUN: OnceLock<()> = OnceLock::new();

/// Create a fresh DB pool. Migrations run only once.
pub async fn create_test_pool() -> DbPool {
    let mut config = Config::from_env().expect(
        "Failed to load config. Ensure RUST_ENV=development is set \
         and that PostgreSQL is running.",
    );
    config.database.max_connections = 2;
    config.database.min_connections = 1;

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");

    if MIGRATIONS_RUN.get().is_none() {
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");
        let _ = MIGRATIONS_RUN.set(());
    }

    pool
}

/// Create the API app over a real pool.
pub async fn create_test_app(
    pool: DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse<impl actix_web::body::MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .wrap(unhandled_errors())
            .app_data(web::Data::new(pool))
            .app_data(api::payload_config(1_048_576))
            .configure(api::configure_routes),
    )
    .await
}

/// A valid report with a unique name, so parallel tests can find their rows.
pub fn new_report(prefix: &str, start_time: DateTime<Utc>) -> NewReport {
    NewReport {
        name: format!("{}-{}", prefix, Uuid::now_v7().simple()),
        contact: "1234567890".to_string(),
        description: "Streetlight flickering".to_string(),
        location: "Block C".to_string(),
        resolved: false,
        action_taken: "Pending review".to_string(),
        proof_image: String::new(),
        start_time: Some(start_time),
        countdown: 0,
        rating: 0,
        comments: Vec::new(),
    }
}

/// Insert a report and return its id.
pub async fn insert_report(pool: &DbPool, prefix: &str, start_time: DateTime<Utc>) -> Uuid {
    let id = Uuid::now_v7();
    pool.insert_report(id, new_report(prefix, start_time))
        .await
        .expect("Failed to insert report");
    id
}
