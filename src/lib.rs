//! Report board server library.
//!
//! Reports and uploads with ratings and comments, served over a JSON API
//! backed by PostgreSQL.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
