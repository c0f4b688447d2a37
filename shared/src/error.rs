use crate::mode::DetectionMode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectorError {
    #[error("Nothing to analyze yet")]
    EmptyInput,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Failed to fetch content: {0}")]
    FetchFailed(String),
    #[error("An analysis is already running")]
    AnalysisInProgress,
    #[error("Cannot switch to {0} directly")]
    InvalidTransition(DetectionMode),
}
