//! Min-max normalization and z-score standardization.
//!
//! `normalize` and `standardize` are the one-shot entry points: they compute
//! statistics over *all* elements of an array of any shape and return a new
//! `f64` array of the same shape. `Rescaler` keeps the fitted parameters so
//! the same transform can be applied to other arrays (and undone), and
//! `AxisRescaler` fits one parameter pair per lane along an axis, e.g. one
//! per column of a feature matrix.
//!
//! A zero denominator (all values equal) is not an error: every output
//! element is `0.0` in that case.

use ndarray::{Array, Array1, ArrayBase, Axis, Data, DataMut, Dimension};
use num_traits::ToPrimitive;

use crate::config::{EmptyPolicy, RescaleConfig, RescaleMethod};
use crate::error::{RescaleError, Result};
use crate::math::to_f64_array;
use crate::stats::{moments_f64, Moments, Summary};

/// Rescale every element to `[0, 1]` using the global min and max.
///
/// Returns all zeros when every element is equal, and
/// `RescaleError::EmptyInput` for an array with no elements.
///
/// ```
/// use ndarray::array;
/// use ml_rescale::preprocessing::normalize;
///
/// let y = normalize(&array![[1, 2], [3, 4]]).unwrap();
/// assert_eq!(y[[0, 0]], 0.0);
/// assert_eq!(y[[1, 1]], 1.0);
/// ```
pub fn normalize<A, S, D>(x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
where
    A: ToPrimitive,
    S: Data<Elem = A>,
    D: Dimension,
{
    rescale(x, &RescaleConfig::min_max())
}

/// Rescale to zero mean and unit population standard deviation.
///
/// Returns all zeros when the standard deviation is zero, and
/// `RescaleError::EmptyInput` for an array with no elements.
pub fn standardize<A, S, D>(x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
where
    A: ToPrimitive,
    S: Data<Elem = A>,
    D: Dimension,
{
    rescale(x, &RescaleConfig::z_score())
}

/// Rescale `x` with the method and empty-input policy from `config`.
pub fn rescale<A, S, D>(x: &ArrayBase<S, D>, config: &RescaleConfig) -> Result<Array<f64, D>>
where
    A: ToPrimitive,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut out = to_f64_array(x)?;
    if out.is_empty() && config.empty_policy == EmptyPolicy::PassThrough {
        log::debug!(
            "Empty input of shape {:?}; passing through unchanged",
            out.shape()
        );
        return Ok(out);
    }
    let rescaler = Rescaler::fit_f64(config.method, &out)?;
    rescaler.transform_inplace(&mut out);
    Ok(out)
}

/// Whole-array rescaling parameters.
///
/// Transforms compute `(x - offset) / scale`. For `MinMax` the offset is the
/// minimum and the scale the range; for `ZScore` they are the mean and the
/// population standard deviation.
///
/// The arithmetic runs on values pre-multiplied by a power of two that brings
/// the fitted data to magnitude ~1, so a range wider than `f64::MAX` (where
/// `scale()` reports infinity) still rescales into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rescaler {
    method: RescaleMethod,
    offset: f64,
    scale: f64,
    factor: f64,
    shift: f64,
    divisor: f64,
}

impl Rescaler {
    /// Fit on all elements of `x`.
    pub fn fit<A, S, D>(method: RescaleMethod, x: &ArrayBase<S, D>) -> Result<Self>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let x = to_f64_array(x)?;
        Self::fit_f64(method, &x)
    }

    fn fit_f64<S, D>(method: RescaleMethod, x: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let moments = moments_f64(x)?;
        Ok(Self::from_moments(method, &moments))
    }

    /// Build a rescaler from precomputed statistics.
    pub fn from_summary(method: RescaleMethod, summary: &Summary) -> Self {
        Self::from_moments(method, &Moments::from_summary(summary))
    }

    fn from_moments(method: RescaleMethod, m: &Moments) -> Self {
        let factor = m.factor;
        let (offset, scale, shift, divisor) = match method {
            RescaleMethod::MinMax => (
                m.min,
                m.max - m.min,
                m.min * factor,
                m.max * factor - m.min * factor,
            ),
            RescaleMethod::ZScore => (m.mean / factor, m.std / factor, m.mean, m.std),
        };
        if divisor == 0.0 {
            log::debug!(
                "Zero {} denominator over {} values; rescaled output will be all zeros",
                method,
                m.count
            );
        } else {
            log::trace!("Fitted {} rescaler: offset={}, scale={}", method, offset, scale);
        }
        Self {
            method,
            offset,
            scale,
            factor,
            shift,
            divisor,
        }
    }

    pub fn method(&self) -> RescaleMethod {
        self.method
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// True when the fitted data had no spread; transforms then emit zeros.
    pub fn is_degenerate(&self) -> bool {
        self.divisor == 0.0
    }

    /// Apply the fitted transform to a new array of the same shape as `x`.
    ///
    /// `x` does not have to be the array the rescaler was fitted on, so
    /// values outside the fitted range map outside `[0, 1]` (min-max).
    pub fn transform<A, S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut out = to_f64_array(x)?;
        self.transform_inplace(&mut out);
        Ok(out)
    }

    /// Apply the fitted transform in place.
    pub fn transform_inplace<S, D>(&self, x: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        if self.is_degenerate() {
            x.fill(0.0);
        } else {
            let (factor, shift, divisor) = (self.factor, self.shift, self.divisor);
            x.mapv_inplace(|v| (v * factor - shift) / divisor);
        }
    }

    /// Map rescaled values back to the original units: `x * scale + offset`.
    pub fn inverse_transform<A, S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut out = to_f64_array(x)?;
        self.inverse_transform_inplace(&mut out);
        Ok(out)
    }

    fn inverse_transform_inplace<S, D>(&self, x: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        let (factor, shift, divisor) = (self.factor, self.shift, self.divisor);
        x.mapv_inplace(|v| (v * divisor + shift) / factor);
    }
}

/// Per-lane rescaling parameters along one axis.
///
/// Fitting a 2-D array along `Axis(0)` gives one parameter pair per column
/// (each column is a lane running down axis 0); along `Axis(1)`, one per row.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRescaler {
    method: RescaleMethod,
    axis: Axis,
    // Shape of the fitted array with `axis` removed, in row-major lane order.
    lane_shape: Vec<usize>,
    lanes: Vec<Rescaler>,
}

impl AxisRescaler {
    pub fn fit<A, S, D>(method: RescaleMethod, x: &ArrayBase<S, D>, axis: Axis) -> Result<Self>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        check_axis(axis, x.ndim())?;
        let x = to_f64_array(x)?;
        if x.is_empty() {
            return Err(RescaleError::EmptyInput);
        }

        let lane_shape = lane_shape(x.shape(), axis);
        let mut lanes = Vec::with_capacity(lane_shape.iter().product());
        for lane in x.lanes(axis) {
            let moments = moments_f64(&lane)?;
            lanes.push(Rescaler::from_moments(method, &moments));
        }

        let degenerate = lanes.iter().filter(|r| r.is_degenerate()).count();
        log::debug!(
            "Fitted {} rescaler along axis {}: {} lanes ({} degenerate)",
            method,
            axis.index(),
            lanes.len(),
            degenerate
        );

        Ok(Self {
            method,
            axis,
            lane_shape,
            lanes,
        })
    }

    pub fn method(&self) -> RescaleMethod {
        self.method
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Fitted offset of every lane (minimum or mean).
    pub fn offsets(&self) -> Array1<f64> {
        self.lanes.iter().map(Rescaler::offset).collect()
    }

    /// Fitted scale of every lane (range or standard deviation).
    pub fn scales(&self) -> Array1<f64> {
        self.lanes.iter().map(Rescaler::scale).collect()
    }

    /// Rescale each lane of `x` with its own fitted parameters.
    ///
    /// Apart from `axis`, `x` must have the same shape as the array used for
    /// fitting; the length along `axis` may differ.
    pub fn transform<A, S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut out = self.prepare(x)?;
        for (r, mut lane) in self.lanes.iter().zip(out.lanes_mut(self.axis)) {
            r.transform_inplace(&mut lane);
        }
        Ok(out)
    }

    pub fn inverse_transform<A, S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut out = self.prepare(x)?;
        for (r, mut lane) in self.lanes.iter().zip(out.lanes_mut(self.axis)) {
            r.inverse_transform_inplace(&mut lane);
        }
        Ok(out)
    }

    fn prepare<A, S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
    where
        A: ToPrimitive,
        S: Data<Elem = A>,
        D: Dimension,
    {
        check_axis(self.axis, x.ndim())?;
        let found = lane_shape(x.shape(), self.axis);
        if found != self.lane_shape {
            return Err(RescaleError::ShapeMismatch {
                expected: self.lane_shape.clone(),
                found,
            });
        }
        to_f64_array(x)
    }
}

fn check_axis(axis: Axis, ndim: usize) -> Result<()> {
    if axis.index() >= ndim {
        return Err(RescaleError::AxisOutOfBounds {
            axis: axis.index(),
            ndim,
        });
    }
    Ok(())
}

/// `shape` with the `axis` dimension removed.
fn lane_shape(shape: &[usize], axis: Axis) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != axis.index())
        .map(|(_, n)| *n)
        .collect()
}
