//! Radix-2 decimation-in-time FFT
//!
//! The engine owns a bit-reversal permutation and a twiddle-factor table built
//! once for its transform length. Both tables are immutable after construction
//! and every transform works in its own freshly allocated buffer, so one engine
//! can be shared across threads without locking.

use crate::complex::{add, multiply, subtract, Complex64};
use crate::spectrum::Spectrum;
use crate::{Error, Result};
use std::f64::consts::PI;

/// Check that `size` is a usable transform length: a power of 2, at least 2
pub fn validate_size(size: usize) -> Result<()> {
    if size < 2 || !size.is_power_of_two() {
        return Err(Error::Configuration(format!(
            "Transform size must be a power of 2 and at least 2, got {}",
            size
        )));
    }
    Ok(())
}

/// Forward FFT for one fixed power-of-two length
#[derive(Debug, Clone)]
pub struct FftEngine {
    size: usize,
    /// `bit_reversal[i]` is `i` with its log2(size) bits reversed
    bit_reversal: Vec<usize>,
    /// `twiddles[k] = e^{-2πik/size}` for `k` in `[0, size/2)`
    twiddles: Vec<Complex64>,
}

impl FftEngine {
    /// Create an engine for transforms of length `size`
    pub fn new(size: usize) -> Result<Self> {
        validate_size(size)?;

        let bit_reversal = bit_reversal_table(size);
        let twiddles = twiddle_table(size);

        log::debug!(
            "Built FFT tables for size {}: {} stages, {} twiddles",
            size,
            size.trailing_zeros(),
            twiddles.len()
        );

        Ok(Self {
            size,
            bit_reversal,
            twiddles,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of butterfly stages, log2(size)
    pub fn stages(&self) -> u32 {
        self.size.trailing_zeros()
    }

    pub fn bit_reversal_table(&self) -> &[usize] {
        &self.bit_reversal
    }

    pub fn twiddle_table(&self) -> &[Complex64] {
        &self.twiddles
    }

    /// Compute the DFT of `signal`, which must hold exactly `size` values.
    pub fn forward_transform(&self, signal: &[Complex64]) -> Result<Spectrum> {
        if signal.len() != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                actual: signal.len(),
            });
        }

        let n = self.size;
        let half_n = n / 2;

        let mut work: Vec<Complex64> = self.bit_reversal.iter().map(|&i| signal[i]).collect();

        // Each stage reads only what the previous stage fully wrote
        let mut span = 2;
        while span <= n {
            let half = span / 2;
            let stride = n / span;

            for group in (0..n).step_by(span) {
                for k in 0..half {
                    let even_index = group + k;
                    let odd_index = even_index + half;

                    let twiddle = self.twiddles[(k * stride) % half_n];
                    let even = work[even_index];
                    let product = multiply(twiddle, work[odd_index]);

                    work[even_index] = add(even, product);
                    work[odd_index] = subtract(even, product);
                }
            }

            span <<= 1;
        }

        Ok(Spectrum::from(work))
    }
}

impl TryFrom<i64> for FftEngine {
    type Error = Error;

    fn try_from(size: i64) -> Result<Self> {
        let size = usize::try_from(size).map_err(|_| {
            Error::Configuration(format!(
                "Transform size must be a positive power of 2, got {}",
                size
            ))
        })?;
        Self::new(size)
    }
}

/// Bit-reversal permutation for a power-of-two `size`
fn bit_reversal_table(size: usize) -> Vec<usize> {
    let bits = size.trailing_zeros();
    (0..size).map(|i| reverse_bits(i, bits)).collect()
}

fn reverse_bits(mut value: usize, bits: u32) -> usize {
    let mut reversed = 0;
    for _ in 0..bits {
        reversed = (reversed << 1) | (value & 1);
        value >>= 1;
    }
    reversed
}

/// `W[k] = cos(2πk/N) - i·sin(2πk/N)` for `k` in `[0, N/2)`
fn twiddle_table(size: usize) -> Vec<Complex64> {
    (0..size / 2)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / size as f64;
            Complex64::new(angle.cos(), -angle.sin())
        })
        .collect()
}
