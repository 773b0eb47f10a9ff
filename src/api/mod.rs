//! API endpoint modules.

pub mod feedback;
pub mod health;
pub mod openapi;
pub mod payload;
pub mod reports;
pub mod uploads;

use std::path::Path;

use actix_files::Files;
use actix_web::web;

pub use health::configure_health_routes;
pub use openapi::{ApiDoc, configure_openapi_routes};
pub use payload::{FormOrJson, payload_config};
pub use reports::configure_report_routes;
pub use uploads::configure_upload_routes;

/// Register `/health` and everything under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes).service(
        web::scope("/api")
            .configure(configure_report_routes)
            .configure(configure_upload_routes)
            .configure(configure_openapi_routes),
    );
}

/// Serve uploaded images under `/uploads` and the frontend from `static_dir`.
///
/// Must be registered after the API routes since it claims `/`.
pub fn configure_static(cfg: &mut web::ServiceConfig, static_dir: &Path, uploads_dir: &Path) {
    cfg.service(Files::new("/uploads", uploads_dir))
        .service(Files::new("/", static_dir).index_file("index.html"));
}

#[cfg(test)]
pub(crate) mod testing {
    use actix_web::{App, dev::ServiceResponse, test, web};
    use chrono::{DateTime, TimeZone, Utc};
    use sea_orm::{DatabaseConnection, Value};
    use serde_json::json;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    use crate::db::DbPool;
    use crate::entity::{report, upload};
    use crate::middleware::unhandled_errors;

    /// Build the API over a (mock) connection.
    pub async fn create_test_app(
        conn: DatabaseConnection,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .wrap(unhandled_errors())
                .app_data(web::Data::new(DbPool::from_connection(conn)))
                .app_data(super::payload_config(1_048_576))
                .configure(super::configure_routes),
        )
        .await
    }

    /// Row answering a `COUNT(*)` probe.
    pub fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::from(n))])
    }

    /// Every statement the mock connection saw, rendered for substring checks.
    pub fn log_of(conn: DatabaseConnection) -> String {
        format!("{:?}", conn.into_transaction_log())
    }

    pub fn report_model(name: &str, start_time: DateTime<Utc>) -> report::Model {
        report::Model {
            id: Uuid::now_v7(),
            name: name.to_string(),
            contact: "1234567890".to_string(),
            description: "Annual security systems evaluation".to_string(),
            location: "IT Department".to_string(),
            resolved: false,
            action_taken: "Pending review".to_string(),
            proof_image: String::new(),
            start_time,
            countdown: 0,
            rating: 3,
            comments: json!([{ "text": "Firewall updates needed", "date": start_time }]),
            created_at: start_time,
            updated_at: start_time,
        }
    }

    pub fn upload_model(name: &str) -> upload::Model {
        let at = Utc.with_ymd_and_hms(2025, 3, 2, 7, 45, 0).unwrap();
        upload::Model {
            id: Uuid::now_v7(),
            image_url: "/uploads/pothole.jpg".to_string(),
            name: name.to_string(),
            contact: "9876543210".to_string(),
            description: "Pothole near the school gate".to_string(),
            location: "Ward 12".to_string(),
            status: "Pending".to_string(),
            time_elapsed: at,
            rating: 0,
            comments: json!([]),
            created_at: at,
            updated_at: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_static_files_and_uploads_are_served() {
        let static_dir = tempfile::tempdir().unwrap();
        let uploads_dir = tempfile::tempdir().unwrap();
        std::fs::write(static_dir.path().join("index.html"), "<h1>Reports</h1>").unwrap();
        std::fs::write(uploads_dir.path().join("pothole.jpg"), b"jpeg").unwrap();

        let (static_path, uploads_path) =
            (static_dir.path().to_path_buf(), uploads_dir.path().to_path_buf());
        let app = test::init_service(App::new().configure(move |cfg| {
            configure_static(cfg, &static_path, &uploads_path)
        }))
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"<h1>Reports</h1>");

        let req = test::TestRequest::get().uri("/uploads/pothole.jpg").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"jpeg");
    }
}
