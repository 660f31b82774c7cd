/// Power of two that brings the larger of `|min|` and `|max|` close to 1.
///
/// Multiplying finite values by a power of two is exact unless the result
/// leaves the normal range, so statistics computed on `x * factor` and
/// scaled back agree with the unscaled ones while differences and squares
/// can neither overflow nor underflow. Returns `1.0` when both bounds are 0.
pub fn unit_factor(min: f64, max: f64) -> f64 {
    let magnitude = min.abs().max(max.abs());
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 1.0;
    }
    // Keep the factor itself a normal number in both directions.
    let exponent = (magnitude.log2().floor() as i32).clamp(-1022, 1022);
    2f64.powi(-exponent)
}
