//! Frequency-domain output of the forward transform

use crate::complex::{magnitude, phase, Complex64};

/// Transform output in natural bin order: bin 0 is DC, bins above N/2 are
/// the negative frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex64>,
}

impl Spectrum {
    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn get(&self, bin: usize) -> Option<Complex64> {
        self.bins.get(bin).copied()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|&c| magnitude(c)).collect()
    }

    pub fn phases(&self) -> Vec<f64> {
        self.bins.iter().map(|&c| phase(c)).collect()
    }

    /// Check `X[N-k] == conj(X[k])` for `1 <= k < N` within `tolerance`,
    /// which holds for the spectrum of any real-valued signal.
    pub fn is_conjugate_symmetric(&self, tolerance: f64) -> bool {
        let n = self.bins.len();
        (1..n).all(|k| {
            let diff = self.bins[n - k] - self.bins[k].conj();
            diff.re.abs() <= tolerance && diff.im.abs() <= tolerance
        })
    }

    pub fn into_bins(self) -> Vec<Complex64> {
        self.bins
    }
}

impl From<Vec<Complex64>> for Spectrum {
    fn from(bins: Vec<Complex64>) -> Self {
        Self { bins }
    }
}

impl std::ops::Index<usize> for Spectrum {
    type Output = Complex64;

    fn index(&self, bin: usize) -> &Complex64 {
        &self.bins[bin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let spectrum = Spectrum::from(vec![
            Complex64::new(3.0, 4.0),
            Complex64::new(0.0, -2.0),
        ]);
        assert_eq!(spectrum.len(), 2);
        assert_eq!(spectrum.magnitudes(), vec![5.0, 2.0]);
        assert_eq!(spectrum[1], Complex64::new(0.0, -2.0));
        assert_eq!(spectrum.get(2), None);
    }

    #[test]
    fn test_conjugate_symmetry() {
        let symmetric = Spectrum::from(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(2.0, -1.0),
        ]);
        assert!(symmetric.is_conjugate_symmetric(1e-12));

        let skewed = Spectrum::from(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(2.0, 1.0),
        ]);
        assert!(!skewed.is_conjugate_symmetric(1e-12));
    }
}
