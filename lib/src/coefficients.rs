//! Real Fourier series coefficients from the spectrum of a real signal
//!
//! The signal is assumed to be sampled on the grid `x[j] = -π + 2πj/N`. Since
//! the transform indexes from `j = 0`, sample `j` sits at transform angle
//! `x[j] + π`; the `(-1)^k` factor moves each harmonic back onto the `x` axis
//! so the series approximates `f(x)` directly.
//!
//! With the `e^{-2πik/N}` twiddle convention:
//!
//! ```text
//! a[0]   = (2/N)·Re X[0]
//! a[k]   = (-1)^k·(2/N)·Re X[k]          1 <= k < N/2
//! b[k]   = -(-1)^k·(2/N)·Im X[k]         1 <= k < N/2
//! a[N/2] = (-1)^(N/2)·(2/N)·Re X[N/2]
//! b[0]   = 0
//! ```
//!
//! `a[0]` and `a[N/2]` enter the series halved, see [`crate::series`].

use crate::spectrum::Spectrum;
use crate::{Error, Result};

/// Cosine (`a`) and sine (`b`) coefficients of a truncated trigonometric series
/// of degree `N/2`. `a` holds `N/2 + 1` values, `b` holds `N/2` with `b[0] = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierCoefficients {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl FourierCoefficients {
    /// Build coefficients directly, e.g. for a hand-written series.
    pub fn new(a: Vec<f64>, mut b: Vec<f64>) -> Result<Self> {
        if b.is_empty() || a.len() != b.len() + 1 {
            return Err(Error::Configuration(format!(
                "Expected a.len() == b.len() + 1 with b non-empty, got a: {}, b: {}",
                a.len(),
                b.len()
            )));
        }
        b[0] = 0.0;
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Highest harmonic, `N/2`
    pub fn degree(&self) -> usize {
        self.b.len()
    }

    /// Length of the transform these coefficients came from
    pub fn transform_size(&self) -> usize {
        2 * self.degree()
    }

    /// Amplitude `sqrt(a[k]² + b[k]²)` of harmonic `k`, or `None` past the degree
    pub fn amplitude(&self, k: usize) -> Option<f64> {
        let a = *self.a.get(k)?;
        let b = self.b.get(k).copied().unwrap_or(0.0);
        Some(a.hypot(b))
    }
}

/// Derive series coefficients from `spectrum`.
///
/// The spectrum must come from a real-valued signal sampled on the
/// `[-π, π)` grid produced by [`crate::sampler`]. A signal sampled from 0
/// instead would come back with the sign of every odd harmonic flipped.
/// Only meaningful for even lengths; the imaginary parts of the DC and Nyquist
/// bins are ignored.
///
/// Spectra shorter than 2 bins give a degree-1 series holding only the mean
/// (zero for an empty spectrum), so the result always has `a.len() == b.len() + 1`.
pub fn extract_coefficients(spectrum: &Spectrum) -> FourierCoefficients {
    let n = spectrum.len();
    let degree = (n / 2).max(1);
    let mut a = vec![0.0; degree + 1];
    let mut b = vec![0.0; degree];

    if n == 0 {
        return FourierCoefficients { a, b };
    }

    let scale = 2.0 / n as f64;
    let bins = spectrum.bins();

    a[0] = scale * bins[0].re;
    for k in 1..degree {
        let shift = alternating_sign(k);
        a[k] = shift * scale * bins[k].re;
        b[k] = -shift * scale * bins[k].im;
    }
    if let Some(nyquist) = bins.get(degree) {
        a[degree] = alternating_sign(degree) * scale * nyquist.re;
    }

    FourierCoefficients { a, b }
}

/// `(-1)^k`
fn alternating_sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{from_real, Complex64};
    use crate::fft::FftEngine;
    use crate::sampler::generate_points;
    use crate::series::evaluate_series;

    fn approx(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    fn coefficients_of(expr: &str, size: usize) -> FourierCoefficients {
        let engine = FftEngine::new(size).unwrap();
        let points = generate_points(expr, size).unwrap();
        extract_coefficients(&engine.forward_transform(&points.y).unwrap())
    }

    #[test]
    fn test_shapes() {
        let coeffs = extract_coefficients(&Spectrum::from(vec![from_real(0.0); 16]));
        assert_eq!(coeffs.a().len(), 9);
        assert_eq!(coeffs.b().len(), 8);
        assert_eq!(coeffs.degree(), 8);
        assert_eq!(coeffs.transform_size(), 16);
    }

    #[test]
    fn test_short_spectra_give_constant_series() {
        let empty = extract_coefficients(&Spectrum::from(Vec::<Complex64>::new()));
        assert_eq!(empty.a(), &[0.0, 0.0]);
        assert_eq!(empty.b(), &[0.0]);
        assert_eq!(evaluate_series(&empty, 1.0), 0.0);

        let single = extract_coefficients(&Spectrum::from(vec![from_real(3.0)]));
        assert_eq!(single.a().len(), single.b().len() + 1);
        assert_eq!(single.degree(), 1);
        for x in [-3.0f64, 0.0, 2.5] {
            assert!(approx(evaluate_series(&single, x), 3.0, 1e-12));
        }
    }

    #[test]
    fn test_four_bin_scenario() {
        let spectrum = Spectrum::from(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, 0.0),
        ]);
        let coeffs = extract_coefficients(&spectrum);

        assert!(approx(coeffs.a()[0], 0.5, 1e-12));
        assert!(approx(coeffs.a()[1], 0.0, 1e-12));
        assert!(approx(coeffs.b()[1], 0.5, 1e-12));
        assert!(approx(coeffs.a()[2], -0.5, 1e-12));
        assert_eq!(coeffs.b()[0], 0.0);
    }

    #[test]
    fn test_pure_harmonics() {
        let coeffs = coefficients_of("3 + cos(x) - 2sin(3x)", 16);

        // a[0] is twice the mean
        assert!(approx(coeffs.a()[0], 6.0, 1e-12));
        assert!(approx(coeffs.a()[1], 1.0, 1e-12));
        assert!(approx(coeffs.b()[3], -2.0, 1e-12));

        for k in 1..8 {
            if k != 1 {
                assert!(approx(coeffs.a()[k], 0.0, 1e-12), "a[{}] = {}", k, coeffs.a()[k]);
            }
            if k != 3 {
                assert!(approx(coeffs.b()[k], 0.0, 1e-12), "b[{}] = {}", k, coeffs.b()[k]);
            }
        }
        assert!(approx(coeffs.a()[8], 0.0, 1e-12));
    }

    #[test]
    fn test_sawtooth_approaches_known_series() {
        // x on (-π, π) has b[k] = 2(-1)^(k+1)/k
        let coeffs = coefficients_of("x", 512);
        assert!(approx(coeffs.b()[1], 2.0, 1e-2));
        assert!(approx(coeffs.b()[2], -1.0, 1e-2));
        assert!(approx(coeffs.b()[3], 2.0 / 3.0, 1e-2));
    }

    #[test]
    fn test_amplitude() {
        let coeffs = FourierCoefficients::new(vec![2.0, 3.0, 0.0], vec![7.0, 4.0]).unwrap();
        assert_eq!(coeffs.b()[0], 0.0);
        assert_eq!(coeffs.amplitude(0), Some(2.0));
        assert_eq!(coeffs.amplitude(1), Some(5.0));
        assert_eq!(coeffs.amplitude(2), Some(0.0));
        assert_eq!(coeffs.amplitude(3), None);
    }

    #[test]
    fn test_manual_shape_validation() {
        assert!(FourierCoefficients::new(vec![1.0, 2.0], vec![0.0, 0.0]).is_err());
        assert!(FourierCoefficients::new(vec![1.0], vec![]).is_err());
    }
}
