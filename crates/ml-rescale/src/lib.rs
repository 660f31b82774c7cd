//! ml-rescale: array rescaling helpers from the 90-day ML study plan.
//!
//! This crate provides min-max normalization and z-score standardization
//! over `ndarray` arrays of any shape and any numeric element type, plus
//! reusable fitted rescalers (whole-array and per-axis) and the summary
//! statistics they are built from.
//!
//! All functions are pure: inputs are borrowed and a new `f64` array is
//! returned. Progress and degenerate-case notes go through the `log` facade.
pub mod config;
pub mod error;
pub mod math;
pub mod preprocessing;
pub mod stats;

pub use config::{EmptyPolicy, RescaleConfig, RescaleMethod};
pub use error::{RescaleError, Result};
pub use preprocessing::{normalize, rescale, standardize, AxisRescaler, Rescaler};
pub use stats::{summarize, Summary};
