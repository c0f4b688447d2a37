use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DetectorConfig;
use crate::content::Descriptor;
use crate::error::DetectorError;
use crate::result::{Confidence, DetectionResult, ResultMetadata};

pub const AI_INDICATORS: [&str; 5] = [
    "repetitive sentence structures",
    "unnatural word patterns",
    "generic phrasing",
    "lack of personal voice",
    "perfect grammar consistency",
];

pub const HUMAN_INDICATORS: [&str; 5] = [
    "natural writing flow",
    "personal anecdotes",
    "varied sentence length",
    "colloquial expressions",
    "minor grammatical inconsistencies",
];

const SHOWN_INDICATORS: usize = 3;

/// Source of the AI-likelihood score in `[0, 1)`. Anything that can score a
/// descriptor (a random draw today, an inference service later) plugs in here.
pub trait Scorer {
    fn score(&mut self, descriptor: &Descriptor) -> Result<f64, DetectorError>;
}

pub struct RandomScorer<R = StdRng> {
    rng: R,
}

impl RandomScorer<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomScorer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomScorer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Scorer for RandomScorer<R> {
    fn score(&mut self, _descriptor: &Descriptor) -> Result<f64, DetectorError> {
        Ok(self.rng.r#gen::<f64>())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScorer(pub f64);

impl Scorer for FixedScorer {
    fn score(&mut self, _descriptor: &Descriptor) -> Result<f64, DetectorError> {
        Ok(self.0)
    }
}

/// Builds the verdict for one score. Pure apart from the timestamp.
pub fn mock_verdict(score: f64, descriptor: &Descriptor, config: &DetectorConfig) -> DetectionResult {
    let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    let is_ai = score > 0.5;
    let likelihood = if is_ai { score } else { 1.0 - score };
    let confidence = Confidence::from((likelihood * 100.0).round() as u8);

    let indicators = if is_ai { &AI_INDICATORS } else { &HUMAN_INDICATORS };
    let reasoning = if is_ai {
        format!(
            "Content shows {} likelihood of AI generation based on pattern analysis, vocabulary consistency, and structural markers.",
            confidence
        )
    } else {
        format!(
            "Content appears {} likely to be human-written based on natural language patterns, personal voice, and authentic inconsistencies.",
            confidence
        )
    };

    DetectionResult {
        is_ai,
        confidence,
        content_type: descriptor.content_type(),
        indicators: indicators
            .iter()
            .take(SHOWN_INDICATORS)
            .map(|s| s.to_string())
            .collect(),
        reasoning,
        metadata: ResultMetadata {
            word_count: descriptor.payload().chars().count(),
            analysis_time: config.analysis_time_label.clone(),
            model_version: config.model_version.clone(),
        },
        timestamp: Utc::now(),
    }
}
