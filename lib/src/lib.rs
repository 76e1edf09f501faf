//! Fourier Library
//!
//! Samples a real periodic function given as a text expression, computes its
//! discrete Fourier transform with a radix-2 FFT, derives the real cosine/sine
//! series coefficients and reconstructs the function from them.

pub mod analysis;
pub mod coefficients;
pub mod complex;
pub mod config;
pub mod error;
pub mod expression;
pub mod fft;
pub mod processor;
pub mod sampler;
pub mod series;
pub mod spectrum;
pub mod utils;

pub use analysis::{compute_function, FourierAnalysis};
pub use coefficients::{extract_coefficients, FourierCoefficients};
pub use config::FourierConfig;
pub use error::{Error, ParseError};
pub use expression::{evaluate, Expression};
pub use fft::FftEngine;
pub use num_complex::Complex64;
pub use processor::FourierProcessor;
pub use sampler::{generate_points, SamplePoints, Sampler};
pub use series::{evaluate_series, generate_interpolated_points};
pub use spectrum::Spectrum;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Sets up logging; the level is taken from `RUST_LOG`.
pub fn init() {
    #[cfg(feature = "env_logger")]
    {
        // Tests may call this more than once
        let _ = env_logger::try_init();
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
