//! HTTP middleware.

pub mod request_logger;
pub mod unhandled;

pub use request_logger::RequestLogger;
pub use unhandled::unhandled_errors;
