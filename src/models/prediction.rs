//! Prediction wire types
//!
//! Request: `{"features": [..10 numbers..]}`
//! Response: `{"attack_detected": 0|1, "probability": 0.0-1.0}`, both optional.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub features: &'a FeatureVector,
}

/// The endpoint has been seen to send the flag as an int, a bool or a float.
/// Anything else is accepted and never counts as an attack.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttackFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl AttackFlag {
    /// Only a value equal to 1 counts as an attack
    pub fn is_attack(self) -> bool {
        match self {
            AttackFlag::Bool(b) => b,
            AttackFlag::Int(i) => i == 1,
            AttackFlag::Float(f) => f == 1.0,
            AttackFlag::Other(_) => false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    pub attack_detected: Option<AttackFlag>,
    #[serde(default)]
    pub probability: Option<f64>,
}

/// Prediction after default-filling missing fields
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub attack_detected: bool,
    pub probability: f64,
    /// Response fields that were absent and replaced by 0 / 0.0
    pub defaulted: Vec<&'static str>,
}

impl PredictionResult {
    pub fn is_degraded(&self) -> bool {
        !self.defaulted.is_empty()
    }
}

impl From<RawPrediction> for PredictionResult {
    fn from(raw: RawPrediction) -> Self {
        let mut defaulted = Vec::new();

        let attack_detected = match raw.attack_detected {
            Some(flag) => flag.is_attack(),
            None => {
                defaulted.push("attack_detected");
                false
            }
        };

        let probability = match raw.probability {
            Some(p) => p,
            None => {
                defaulted.push("probability");
                0.0
            }
        };

        Self {
            attack_detected,
            probability,
            defaulted,
        }
    }
}
