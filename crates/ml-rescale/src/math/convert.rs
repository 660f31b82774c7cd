use ndarray::{Array, ArrayBase, Data, Dimension};
use num_traits::ToPrimitive;

use crate::error::{RescaleError, Result};

/// Convert every element of `x` to `f64`, keeping the shape.
///
/// Elements are visited in logical (row-major) order; the first element
/// without an `f64` representation aborts the conversion and its flat
/// position is reported in `RescaleError::NotRepresentable`.
pub fn to_f64_array<A, S, D>(x: &ArrayBase<S, D>) -> Result<Array<f64, D>>
where
    A: ToPrimitive,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut out = Array::<f64, D>::zeros(x.raw_dim());
    for (index, (dst, src)) in out.iter_mut().zip(x.iter()).enumerate() {
        *dst = src
            .to_f64()
            .ok_or(RescaleError::NotRepresentable { index })?;
    }
    log::trace!("Converted array of shape {:?} to f64", x.shape());
    Ok(out)
}

/// Number of NaN or infinite values in `x`.
pub fn count_non_finite<S, D>(x: &ArrayBase<S, D>) -> usize
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.iter().filter(|v| !v.is_finite()).count()
}
