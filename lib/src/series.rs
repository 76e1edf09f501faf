//! Evaluation of the truncated trigonometric series
//!
//! ```text
//! S(x) = (a[0] + a[m]·cos(m·x)) / 2 + Σ_{k=1}^{m-1} (a[k]·cos(k·x) + b[k]·sin(k·x)),   m = N/2
//! ```

use crate::coefficients::FourierCoefficients;
use crate::complex::from_real;
use crate::sampler::{grid_position, SamplePoints};

/// Evaluate the series at `x`
pub fn evaluate_series(coeffs: &FourierCoefficients, x: f64) -> f64 {
    let a = coeffs.a();
    let b = coeffs.b();
    let m = a.len() - 1;

    let mut sum = (a[0] + a[m] * (m as f64 * x).cos()) / 2.0;
    for k in 1..m {
        let kx = k as f64 * x;
        sum += a[k] * kx.cos() + b[k] * kx.sin();
    }
    sum
}

/// Evaluate the series at `count` evenly spaced points over `[-π, π)`.
/// `count` is independent of the transform length, so the series can be
/// oversampled for smooth display. Cost is O(degree · count).
pub fn generate_interpolated_points(coeffs: &FourierCoefficients, count: usize) -> SamplePoints {
    let x: Vec<f64> = (0..count).map(|j| grid_position(j, count)).collect();
    let y = x
        .iter()
        .map(|&xj| from_real(evaluate_series(coeffs, xj)))
        .collect();
    SamplePoints { x, y }
}
