pub mod analysis;
pub mod config;
pub mod content;
pub mod error;
pub mod mode;
pub mod result;
pub mod session;
pub mod stages;
pub mod verdict;

pub use analysis::{AnalysisOutcome, run_analysis};
pub use config::{AcceptedType, DetectorConfig};
pub use content::{ContentType, Descriptor, FileRef};
pub use error::DetectorError;
pub use mode::DetectionMode;
pub use result::{Confidence, DetectionResult, ResultMetadata};
pub use session::{AnalysisTicket, Session, SessionController};
pub use stages::{ANALYSIS_STAGES, Stage};
pub use verdict::{FixedScorer, RandomScorer, Scorer};
