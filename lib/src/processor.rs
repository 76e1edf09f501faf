//! Main Fourier processor implementation
//!
//! Provides the FourierProcessor struct that keeps the current configuration,
//! function expression and latest analysis together for interactive use.

use crate::analysis::{analyze_with, FourierAnalysis};
use crate::config::FourierConfig;
use crate::fft::FftEngine;
use crate::sampler::{SamplePoints, Sampler};
use crate::{Error, Result};

/// Stateful driver for the sample → transform → extract pipeline
pub struct FourierProcessor {
    config: FourierConfig,
    engine: FftEngine,
    sampler: Option<Sampler>,
    analysis: Option<FourierAnalysis>,
}

impl FourierProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(FourierConfig::default())
    }

    /// Create a new processor with custom configuration
    pub fn with_config(config: FourierConfig) -> Result<Self> {
        let engine = FftEngine::new(config.size)?;
        Ok(Self {
            config,
            engine,
            sampler: None,
            analysis: None,
        })
    }

    pub fn config(&self) -> &FourierConfig {
        &self.config
    }

    pub fn engine(&self) -> &FftEngine {
        &self.engine
    }

    /// Replace the configuration. The engine tables are rebuilt only when the
    /// transform length changes; an existing analysis is recomputed.
    pub fn set_config(&mut self, config: FourierConfig) -> Result<()> {
        if config.size != self.engine.size() {
            self.engine = FftEngine::new(config.size)?;
            log::info!("Transform size changed to {}", config.size);
        }
        self.config = config;

        if self.sampler.is_some() {
            self.analyze()?;
        }
        Ok(())
    }

    /// Parse a new function expression and analyze it. On a parse error the
    /// previous expression and analysis are kept.
    pub fn set_expression(&mut self, expr: &str) -> Result<&FourierAnalysis> {
        let sampler = Sampler::new(expr)?;
        log::info!("Function set to '{}'", expr);
        self.sampler = Some(sampler);
        self.analyze()
    }

    /// Re-run the pipeline for the current expression
    pub fn analyze(&mut self) -> Result<&FourierAnalysis> {
        let sampler = self
            .sampler
            .as_ref()
            .ok_or_else(|| Error::Configuration("No function set".to_string()))?;

        let analysis = analyze_with(&self.engine, sampler)?;
        log::info!(
            "Analysis complete: {} samples, degree {} series",
            analysis.points.len(),
            analysis.coefficients.degree()
        );

        Ok(&*self.analysis.insert(analysis))
    }

    pub fn expression(&self) -> Option<&str> {
        self.sampler.as_ref().map(|s| s.expression().source())
    }

    pub fn analysis(&self) -> Option<&FourierAnalysis> {
        self.analysis.as_ref()
    }

    pub fn has_analysis(&self) -> bool {
        self.analysis.is_some()
    }

    /// Reconstructed series at the configured plot resolution
    pub fn interpolate(&self) -> Option<SamplePoints> {
        self.interpolate_with(self.config.plot_points)
    }

    pub fn interpolate_with(&self, count: usize) -> Option<SamplePoints> {
        self.analysis.as_ref().map(|a| a.interpolate(count))
    }

    /// The function itself sampled at the configured plot resolution
    pub fn function_points(&self) -> Option<SamplePoints> {
        self.function_points_with(self.config.plot_points)
    }

    pub fn function_points_with(&self, count: usize) -> Option<SamplePoints> {
        self.sampler.as_ref().map(|s| s.generate_points(count))
    }

    /// Evaluate the current series at `x`
    pub fn evaluate_series(&self, x: f64) -> Option<f64> {
        self.analysis.as_ref().map(|a| a.evaluate(x))
    }

    /// Evaluate the current function at `x`
    pub fn evaluate_function(&self, x: f64) -> Option<f64> {
        self.sampler.as_ref().map(|s| s.expression().eval(x))
    }
}
