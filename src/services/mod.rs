//! Business logic services.

pub mod seed;

pub use seed::{SeedOutcome, run_seed, seed_sample_reports};
