//! Listing endpoint tests.

use actix_web::test;
use chrono::{Duration, Utc};
use report_board_lib::error::AppError;
use report_board_lib::models::{NewUpload, UploadStatus};
use serde_json::Value;

use crate::test_helpers::{create_test_app, create_test_pool, insert_report};

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_reports_listed_most_recent_first() {
    let pool = create_test_pool().await;
    let now = Utc::now();
    let older = insert_report(&pool, "older", now - Duration::days(2)).await;
    let newer = insert_report(&pool, "newer", now - Duration::days(1)).await;

    let app = create_test_app(pool).await;
    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let data = body["data"].as_array().expect("data array");
    let position = |id: uuid::Uuid| {
        data.iter()
            .position(|r| r["id"] == id.to_string())
            .expect("inserted report listed")
    };
    assert!(position(newer) < position(older));

    let listed = &data[position(newer)];
    assert!(listed.get("contact").is_none());
    assert_eq!(listed["actionTaken"], "Pending review");
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_inserted_upload_is_listed() {
    let pool = create_test_pool().await;
    let upload = pool
        .insert_upload(NewUpload {
            image_url: "/uploads/drain.jpg".to_string(),
            name: "Ravi Kumar".to_string(),
            contact: "9123456780".to_string(),
            description: "Blocked drain on main road".to_string(),
            location: "Ward 4".to_string(),
            status: UploadStatus::InProgress,
            time_elapsed: None,
            rating: 0,
            comments: Vec::new(),
        })
        .await
        .expect("insert upload");

    let app = create_test_app(pool).await;
    let req = test::TestRequest::get().uri("/api/uploads").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let listed = body["data"]
        .as_array()
        .and_then(|data| data.iter().find(|u| u["id"] == upload.id.to_string()))
        .expect("inserted upload listed");
    assert_eq!(listed["imageURL"], "/uploads/drain.jpg");
    assert_eq!(listed["status"], "In Progress");
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_insert_upload_rejects_bad_contact() {
    let pool = create_test_pool().await;
    let result = pool
        .insert_upload(NewUpload {
            image_url: "/uploads/drain.jpg".to_string(),
            name: "Ravi Kumar".to_string(),
            contact: "91234".to_string(),
            description: "Blocked drain".to_string(),
            location: "Ward 4".to_string(),
            status: UploadStatus::Pending,
            time_elapsed: None,
            rating: 0,
            comments: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}
