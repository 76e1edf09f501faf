//! One-shot pipeline: sample, transform, extract

use crate::coefficients::{extract_coefficients, FourierCoefficients};
use crate::fft::FftEngine;
use crate::sampler::{SamplePoints, Sampler};
use crate::series::{evaluate_series, generate_interpolated_points};
use crate::spectrum::Spectrum;
use crate::Result;

/// Everything derived from one function expression at one transform length
#[derive(Debug, Clone, PartialEq)]
pub struct FourierAnalysis {
    pub points: SamplePoints,
    pub spectrum: Spectrum,
    pub coefficients: FourierCoefficients,
}

impl FourierAnalysis {
    /// Reconstruct the series at `count` points over `[-π, π)`
    pub fn interpolate(&self, count: usize) -> SamplePoints {
        generate_interpolated_points(&self.coefficients, count)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_series(&self.coefficients, x)
    }

    /// Largest deviation between the series and the samples it came from
    pub fn max_sample_error(&self) -> f64 {
        self.points
            .x
            .iter()
            .zip(&self.points.y)
            .map(|(&x, y)| (self.evaluate(x) - y.re).abs())
            .fold(0.0, f64::max)
    }
}

/// Sample `expr` at the engine's length, transform it and extract the series.
pub fn compute_function(engine: &FftEngine, expr: &str) -> Result<FourierAnalysis> {
    let sampler = Sampler::new(expr)?;
    analyze_with(engine, &sampler)
}

/// Run the pipeline with an already parsed sampler
pub fn analyze_with(engine: &FftEngine, sampler: &Sampler) -> Result<FourierAnalysis> {
    let points = sampler.generate_points(engine.size());
    let spectrum = engine.forward_transform(&points.y)?;
    let coefficients = extract_coefficients(&spectrum);

    log::debug!(
        "Analyzed '{}' at size {}: a[0] = {:.6}",
        sampler.expression().source(),
        engine.size(),
        coefficients.a()[0]
    );

    Ok(FourierAnalysis {
        points,
        spectrum,
        coefficients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParseError};
    use std::f64::consts::PI;

    #[test]
    fn test_compute_function() {
        let engine = FftEngine::new(8).unwrap();
        let analysis = compute_function(&engine, "pi*(pi-x)").unwrap();

        assert_eq!(analysis.points.len(), 8);
        assert_eq!(analysis.spectrum.len(), 8);
        assert_eq!(analysis.coefficients.degree(), 4);
        assert!(analysis.spectrum.is_conjugate_symmetric(1e-9));

        // Mean of π(π - x) over the grid is π² + π²/8
        let mean: f64 = analysis.points.real_values().iter().sum::<f64>() / 8.0;
        assert!((analysis.coefficients.a()[0] / 2.0 - mean).abs() < 1e-12);
        assert!((mean - (PI * PI + PI * PI / 8.0)).abs() < 1e-12);

        assert!(analysis.max_sample_error() < 1e-9);
    }

    #[test]
    fn test_interpolate() {
        let engine = FftEngine::new(32).unwrap();
        let analysis = compute_function(&engine, "sin(x) + cos(3x)").unwrap();
        let dense = analysis.interpolate(500);
        assert_eq!(dense.len(), 500);
        for (x, y) in dense.x.iter().zip(&dense.y) {
            assert!((y.re - (x.sin() + (3.0 * x).cos())).abs() < 1e-10);
        }
    }

    #[test]
    fn test_parse_error_propagates() {
        let engine = FftEngine::new(8).unwrap();
        assert!(matches!(
            compute_function(&engine, "sin(x"),
            Err(Error::Parse(ParseError::UnbalancedBracket { .. }))
        ));
    }

    #[test]
    fn test_non_finite_values_propagate() {
        // 1/x is infinite at the grid point x = 0
        let engine = FftEngine::new(8).unwrap();
        let analysis = compute_function(&engine, "1/x").unwrap();
        assert!(analysis.points.y[4].re.is_infinite());
        assert!(!analysis.spectrum[0].re.is_finite());
        assert!(!analysis.coefficients.a()[0].is_finite());
    }
}
