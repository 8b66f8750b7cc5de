//! "Nice" axis bounds shared by every chart with a linear axis.

use crate::error::{ChartError, Result};
use crate::models::Vector;

/// Bound used when the maximum is zero, negative or not a number.
pub const MIN_BOUND: f64 = 10.0;

/// Number of equal steps between zero and the bound (11 ticks including both ends).
pub const TICKS: usize = 10;

/// Round the maximum up to the next multiple of its own leading-digit step.
///
/// With `k` the digit count of `floor(max)` and `d` its leading digit the bound is
/// `(d + 1) * 10^(k - 1)`: `73 → 80`, `999 → 1000`, `100 → 200`, `0.5 → 1`.
pub fn nice_upper_bound(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NAN, f64::max);
    if !(max > 0.0) || !max.is_finite() {
        return MIN_BOUND;
    }
    let whole = max.floor();
    if whole >= u64::MAX as f64 {
        let step = 10f64.powi(whole.log10().floor() as i32);
        return ((whole / step).floor().min(9.0) + 1.0) * step;
    }
    // digit count and leading digit from the decimal text, exact at powers of ten
    let text = (whole as u64).to_string();
    let leading = f64::from(text.as_bytes()[0] - b'0');
    let step = 10f64.powi(text.len() as i32 - 1);
    (leading + 1.0) * step
}

/// Caption values `bound * i / 10` for `i = 0..=10`.
pub fn tick_values(bound: f64) -> [f64; TICKS + 1] {
    std::array::from_fn(|i| bound * i as f64 / TICKS as f64)
}

/// Reject vectors whose axis would be degenerate (empty or all zero).
pub fn ensure_axis(vector: &Vector<f64>) -> Result<f64> {
    if vector.is_empty() || vector.max() <= 0.0 {
        return Err(ChartError::DegenerateAxis(vector.heading().to_string()));
    }
    Ok(nice_upper_bound(vector.data()))
}
