//! Engine configuration

use crate::fft::validate_size;
use crate::{Error, Result};

/// Largest transform length a configuration accepts. The engine itself takes
/// any power of two; this keeps interactive sessions responsive.
pub const MAX_SIZE: usize = 1 << 16;

/// Largest number of points evaluated for a reconstruction plot
pub const MAX_PLOT_POINTS: usize = 1 << 20;

/// Transform length and reconstruction resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierConfig {
    /// Transform length N, power of 2
    pub size: usize,
    /// Number of points the reconstructed series is evaluated at
    pub plot_points: usize,
}

impl Default for FourierConfig {
    fn default() -> Self {
        Self {
            size: 16,
            plot_points: 256,
        }
    }
}

impl FourierConfig {
    /// Create a new configuration with validation
    pub fn new(size: usize, plot_points: usize) -> Result<Self> {
        validate_size(size)?;

        if size > MAX_SIZE {
            return Err(Error::Configuration(format!(
                "Transform size must be at most {}, got {}",
                MAX_SIZE, size
            )));
        }

        if plot_points == 0 || plot_points > MAX_PLOT_POINTS {
            return Err(Error::Configuration(format!(
                "Plot points must be between 1 and {}, got {}",
                MAX_PLOT_POINTS, plot_points
            )));
        }

        Ok(Self { size, plot_points })
    }

    /// Copy with a different transform length
    pub fn with_size(&self, size: usize) -> Result<Self> {
        Self::new(size, self.plot_points)
    }

    /// Copy with a different plot resolution
    pub fn with_plot_points(&self, plot_points: usize) -> Result<Self> {
        Self::new(self.size, plot_points)
    }

    /// Highest harmonic in the series, N/2
    pub fn degree(&self) -> usize {
        self.size / 2
    }
}
