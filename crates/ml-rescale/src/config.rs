use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RescaleError;

/// Central configuration for `preprocessing::rescale`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RescaleConfig {
    pub method: RescaleMethod,
    pub empty_policy: EmptyPolicy,
}

/// Supported rescaling methods.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RescaleMethod {
    /// `(x - min) / (max - min)`, mapping values onto `[0, 1]`.
    #[default]
    MinMax,
    /// `(x - mean) / std` with the population standard deviation.
    ZScore,
}

/// What to do when asked to rescale an array with no elements.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Fail with `RescaleError::EmptyInput`.
    #[default]
    Reject,
    /// Return an empty array of the same shape.
    PassThrough,
}

impl FromStr for RescaleMethod {
    type Err = RescaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minmax" | "min_max" | "min-max" | "normalize" => Ok(RescaleMethod::MinMax),
            "zscore" | "z_score" | "z-score" | "standardize" => Ok(RescaleMethod::ZScore),
            _ => Err(RescaleError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for RescaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RescaleMethod::MinMax => write!(f, "min_max"),
            RescaleMethod::ZScore => write!(f, "z_score"),
        }
    }
}

impl RescaleConfig {
    pub fn new(method: RescaleMethod, empty_policy: EmptyPolicy) -> Self {
        Self {
            method,
            empty_policy,
        }
    }

    pub fn min_max() -> Self {
        Self::new(RescaleMethod::MinMax, EmptyPolicy::Reject)
    }

    pub fn z_score() -> Self {
        Self::new(RescaleMethod::ZScore, EmptyPolicy::Reject)
    }

    pub fn with_empty_policy(mut self, empty_policy: EmptyPolicy) -> Self {
        self.empty_policy = empty_policy;
        self
    }
}
