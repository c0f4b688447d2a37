use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::content::ContentType;

/// Whole-number percentage attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, From)]
#[display(fmt = "{}%", _0)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub word_count: usize,
    pub analysis_time: String,
    pub model_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub is_ai: bool,
    pub confidence: Confidence,
    pub content_type: ContentType,
    pub indicators: Vec<String>,
    pub reasoning: String,
    pub metadata: ResultMetadata,
    pub timestamp: DateTime<Utc>,
}

impl DetectionResult {
    pub fn verdict_label(&self) -> &'static str {
        if self.is_ai { "AI GENERATED" } else { "HUMAN CREATED" }
    }
}
