//! Seed loader for the sample reports.
//!
//! Run once by the entry point after migrations. Re-running is harmless: the
//! samples are only inserted when none of their ids exist yet.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{error, info};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Comment, NewReport};

/// Fixed ids of the three sample reports.
pub const SAMPLE_REPORT_IDS: [Uuid; 3] = [
    Uuid::from_u128(0x67d27cba7f911c24c52b0da7),
    Uuid::from_u128(0x67d27cba7f911c24c52b0da8),
    Uuid::from_u128(0x67d27cba7f911c24c52b0da9),
];

/// What a seed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(u64),
    AlreadyPresent,
}

fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn comments(day: u32, texts: [&str; 2]) -> Vec<Comment> {
    texts
        .into_iter()
        .map(|text| Comment {
            text: text.to_string(),
            date: march(day),
        })
        .collect()
}

/// The sample reports paired with their fixed ids.
pub fn sample_reports() -> Vec<(Uuid, NewReport)> {
    let reports = [
        NewReport {
            name: "John Doe".to_string(),
            contact: "1234567890".to_string(),
            description: "Quarterly sales performance analysis".to_string(),
            location: "Sales Department".to_string(),
            resolved: true,
            action_taken: "Approved by management".to_string(),
            proof_image: String::new(),
            start_time: Some(march(1)),
            countdown: 0,
            rating: 4,
            comments: comments(
                1,
                ["Exceeded targets by 15%", "New client acquisition up 25%"],
            ),
        },
        NewReport {
            name: "Jane Smith".to_string(),
            contact: "9876543210".to_string(),
            description: "Annual security systems evaluation".to_string(),
            location: "IT Department".to_string(),
            resolved: false,
            action_taken: "Pending review".to_string(),
            proof_image: String::new(),
            start_time: Some(march(5)),
            countdown: 0,
            rating: 3,
            comments: comments(
                5,
                ["Firewall updates needed", "Minor vulnerabilities detected"],
            ),
        },
        NewReport {
            name: "Mike Johnson".to_string(),
            contact: "5555555555".to_string(),
            description: "Monthly customer feedback analysis".to_string(),
            location: "Customer Service".to_string(),
            resolved: false,
            action_taken: "Rejected - needs more data".to_string(),
            proof_image: String::new(),
            start_time: Some(march(10)),
            countdown: 0,
            rating: 2,
            comments: comments(
                10,
                ["Response time needs improvement", "80% positive feedback"],
            ),
        },
    ];

    SAMPLE_REPORT_IDS.into_iter().zip(reports).collect()
}

/// Insert the sample reports unless any of them already exists.
pub async fn seed_sample_reports(pool: &DbPool) -> AppResult<SeedOutcome> {
    let existing = pool.count_reports_with_ids(&SAMPLE_REPORT_IDS).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let inserted = pool.insert_reports(sample_reports()).await?;
    Ok(SeedOutcome::Inserted(inserted))
}

/// Run the seed loader and log the outcome. Failures are not fatal.
pub async fn run_seed(pool: &DbPool) {
    match seed_sample_reports(pool).await {
        Ok(SeedOutcome::Inserted(count)) => info!("Sample reports inserted: {}", count),
        Ok(SeedOutcome::AlreadyPresent) => {
            info!("Sample reports already exist, skipping insertion")
        }
        Err(e) => error!("Error inserting sample data: {}", e),
    }
}
