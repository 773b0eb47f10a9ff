//! Rate and comment round trips.

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_helpers::{create_test_app, create_test_pool, insert_report};

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_rate_report_is_stored() {
    let pool = create_test_pool().await;
    let id = insert_report(&pool, "rate", Utc::now()).await;
    let app = create_test_app(pool.clone()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/reports/rate/{}", id))
        .set_json(json!({ "rating": "4" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "success": true, "rating": 4 }));

    let stored = pool
        .list_reports()
        .await
        .expect("list reports")
        .into_iter()
        .find(|r| r.id == id)
        .expect("report present");
    assert_eq!(stored.rating, 4);
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_invalid_rating_leaves_record_unchanged() {
    let pool = create_test_pool().await;
    let id = insert_report(&pool, "bad-rate", Utc::now()).await;
    let app = create_test_app(pool.clone()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/reports/rate/{}", id))
        .set_json(json!({ "rating": 9 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = pool
        .list_reports()
        .await
        .expect("list reports")
        .into_iter()
        .find(|r| r.id == id)
        .expect("report present");
    assert_eq!(stored.rating, 0);
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_comments_append_in_order() {
    let pool = create_test_pool().await;
    let id = insert_report(&pool, "comment", Utc::now()).await;
    let app = create_test_app(pool).await;

    for text in ["First look", "  Fixed on Tuesday  "] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/reports/comment/{}", id))
            .set_json(json!({ "comment": text }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/reports/comment/{}", id))
        .set_json(json!({ "comment": "Closed" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let texts: Vec<&str> = body["comments"]
        .as_array()
        .expect("comments array")
        .iter()
        .filter_map(|c| c["text"].as_str())
        .collect();
    assert_eq!(texts, vec!["First look", "Fixed on Tuesday", "Closed"]);
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_feedback_on_unknown_record_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(pool).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/uploads/rate/{}", Uuid::now_v7()))
        .set_json(json!({ "rating": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Upload not found" }));
}
