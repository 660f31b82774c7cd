use ndarray::{ArrayBase, Data, Dimension};
use ndarray_stats::errors::MinMaxError;
use ndarray_stats::QuantileExt;
use num_traits::ToPrimitive;

use crate::error::{RescaleError, Result};
use crate::math::{count_non_finite, to_f64_array, unit_factor};

/// Whole-array summary statistics.
///
/// All values are computed over every element of the array, regardless of
/// its shape. `std` is the population standard deviation (sum of squared
/// deviations divided by `count`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl Summary {
    /// `max - min`; infinite when the values span more than `f64::MAX`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// True when every element had the same value.
    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }
}

/// Summarize an array of any numeric element type.
///
/// # Errors
///
/// * `EmptyInput` if the array has no elements.
/// * `NotRepresentable` if an element cannot be converted to `f64`.
/// * `NonFinite` if any element is NaN or infinite.
pub fn summarize<A, S, D>(x: &ArrayBase<S, D>) -> Result<Summary>
where
    A: ToPrimitive,
    S: Data<Elem = A>,
    D: Dimension,
{
    let x = to_f64_array(x)?;
    summarize_f64(&x)
}

pub(crate) fn summarize_f64<S, D>(x: &ArrayBase<S, D>) -> Result<Summary>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let m = moments_f64(x)?;
    Ok(Summary {
        count: m.count,
        min: m.min,
        max: m.max,
        mean: m.mean / m.factor,
        std: m.std / m.factor,
    })
}

/// Mean and population std of `x * factor`, where `factor` is the power of
/// two from `unit_factor(min, max)`.
///
/// Deviations and their squares are taken on the scaled values, so they can
/// neither overflow nor underflow for any finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Moments {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub factor: f64,
    pub mean: f64,
    pub std: f64,
}

impl Moments {
    pub(crate) fn from_summary(summary: &Summary) -> Self {
        let factor = unit_factor(summary.min, summary.max);
        Self {
            count: summary.count,
            min: summary.min,
            max: summary.max,
            factor,
            mean: summary.mean * factor,
            std: summary.std * factor,
        }
    }
}

pub(crate) fn moments_f64<S, D>(x: &ArrayBase<S, D>) -> Result<Moments>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if x.is_empty() {
        return Err(RescaleError::EmptyInput);
    }
    let non_finite = count_non_finite(x);
    if non_finite > 0 {
        return Err(RescaleError::NonFinite { count: non_finite });
    }

    let min = *x.min().map_err(|e| minmax_error(e, non_finite))?;
    let max = *x.max().map_err(|e| minmax_error(e, non_finite))?;

    let factor = unit_factor(min, max);
    let mean = running_mean(x, factor);

    let count = x.len();
    let var = x
        .iter()
        .map(|v| {
            let d = v * factor - mean;
            d * d
        })
        .sum::<f64>()
        / count as f64;

    Ok(Moments {
        count,
        min,
        max,
        factor,
        mean,
        std: var.sqrt(),
    })
}

// statrs updates the mean incrementally, so an array of identical values
// gets that exact value back and its deviations are exactly zero.
fn running_mean<S, D>(x: &ArrayBase<S, D>, k: f64) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    use statrs::statistics::Statistics;
    x.iter().map(|v| v * k).mean()
}

fn minmax_error(e: MinMaxError, non_finite: usize) -> RescaleError {
    match e {
        MinMaxError::EmptyInput => RescaleError::EmptyInput,
        MinMaxError::UndefinedOrder => RescaleError::NonFinite {
            count: non_finite.max(1),
        },
    }
}
