//! Integration test suite.
//!
//! Exercises the API and seed loader against a real PostgreSQL database.
//! Requires `RUST_ENV=development` and a running database (DATABASE_URL, or the
//! development default).
//!
//! Run with: cargo test --test integration -- --ignored

mod test_helpers;

mod test_feedback;
mod test_listing;
mod test_seed;
