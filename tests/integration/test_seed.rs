//! Seed loader tests.

use report_board_lib::services::seed::SAMPLE_REPORT_IDS;
use report_board_lib::services::{SeedOutcome, seed_sample_reports};

use crate::test_helpers::create_test_pool;

#[actix_web::test]
#[ignore = "requires a running PostgreSQL database"]
async fn test_seed_twice_leaves_three_samples() {
    let pool = create_test_pool().await;

    let first = seed_sample_reports(&pool).await.expect("first seed run");
    let second = seed_sample_reports(&pool).await.expect("second seed run");

    assert!(matches!(
        first,
        SeedOutcome::Inserted(3) | SeedOutcome::AlreadyPresent
    ));
    assert_eq!(second, SeedOutcome::AlreadyPresent);

    let stored = pool
        .count_reports_with_ids(&SAMPLE_REPORT_IDS)
        .await
        .expect("count samples");
    assert_eq!(stored, 3);

    let reports = pool.list_reports().await.expect("list reports");
    let sample = reports
        .iter()
        .find(|r| r.id == SAMPLE_REPORT_IDS[1])
        .expect("seeded report present");
    assert_eq!(sample.name, "Jane Smith");
    assert_eq!(sample.comments.as_array().map(Vec::len), Some(2));
}
