//! Numeric conversion helpers shared by the statistics and rescaling code.
//!
//! Every public entry point accepts arrays of any `ToPrimitive` element type
//! and converts them to `f64` up front through `to_f64_array`, so the maths
//! downstream only ever deals with one float type. `unit_factor` picks the
//! power-of-two scaling that keeps that maths inside the normal `f64` range.
pub mod convert;
pub mod magnitude;

pub use convert::{count_non_finite, to_f64_array};
pub use magnitude::unit_factor;
