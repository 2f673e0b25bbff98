//! Prediction interpretation
//!
//! Turns a raw `{attack_detected, probability}` pair into the labels and
//! narrative shown to the user. Verdict and confidence are independent and
//! always computed together.

use serde::Serialize;
use uuid::Uuid;

use crate::models::PredictionResult;

/// Probability at or above which confidence is high
pub const HIGH_CONFIDENCE: f64 = 0.7;

/// Probability at or above which confidence is medium
pub const MEDIUM_CONFIDENCE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_CONFIDENCE {
            ConfidenceTier::High
        } else if probability >= MEDIUM_CONFIDENCE {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High confidence",
            ConfidenceTier::Medium => "Medium confidence",
            ConfidenceTier::Low => "Low confidence",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High model confidence in this prediction.",
            ConfidenceTier::Medium => "Medium confidence – results should be interpreted with caution.",
            ConfidenceTier::Low => "Low confidence – the model is uncertain about this prediction.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AttackDetected,
    NoAttack,
}

impl Verdict {
    pub fn from_flag(attack_detected: bool) -> Self {
        if attack_detected {
            Verdict::AttackDetected
        } else {
            Verdict::NoAttack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::AttackDetected => "Attack detected",
            Verdict::NoAttack => "No attack detected",
        }
    }

    pub fn explanation(&self) -> &'static [&'static str] {
        match self {
            Verdict::AttackDetected => &[
                "Suspicious IP reputation",
                "Multiple failed login attempts",
                "Unusual access time or weak encryption",
            ],
            Verdict::NoAttack => &[
                "The session appears typical and shows no strong indicators of intrusion.",
            ],
        }
    }
}

/// `0.85` → `"85.00%"`
pub fn format_percentage(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Presentation-ready prediction, also the JSON API response
#[derive(Debug, Clone, Serialize)]
pub struct PredictionView {
    pub request_id: Uuid,
    pub verdict: Verdict,
    pub verdict_label: &'static str,
    pub explanation: &'static [&'static str],
    pub confidence: ConfidenceTier,
    pub confidence_label: &'static str,
    pub confidence_message: &'static str,
    pub probability: f64,
    pub percentage: String,
    /// Response fields the endpoint left out; non-empty means the verdict is a guess
    pub defaulted_fields: Vec<&'static str>,
}

impl PredictionView {
    pub fn new(request_id: Uuid, result: &PredictionResult) -> Self {
        let verdict = Verdict::from_flag(result.attack_detected);
        let confidence = ConfidenceTier::from_probability(result.probability);

        Self {
            request_id,
            verdict,
            verdict_label: verdict.label(),
            explanation: verdict.explanation(),
            confidence,
            confidence_label: confidence.label(),
            confidence_message: confidence.message(),
            probability: result.probability,
            percentage: format_percentage(result.probability),
            defaulted_fields: result.defaulted.clone(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.defaulted_fields.is_empty()
    }
}
