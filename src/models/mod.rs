//! Domain models for the report board.

pub mod feedback;
pub mod report;
pub mod upload;

// Re-export commonly used types
pub use feedback::{
    Comment, CommentRequest, CommentText, CommentsResponse, RateRequest, RateResponse, Rating,
};
pub use report::{NewReport, ReportListResponse, ReportView};
pub use upload::{NewUpload, UploadListResponse, UploadStatus, UploadView};

/// The two record collections that accept ratings and comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Report,
    Upload,
}

impl RecordKind {
    /// Human-readable name used in error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Report => "Report",
            Self::Upload => "Upload",
        }
    }
}
