//! Evenly spaced sampling of a function over one period
//!
//! Samples sit at `x[j] = -π + 2πj/count` for `j` in `[0, count)`, so the
//! grid covers `[-π, π)` and never repeats the endpoint.

use crate::complex::{from_real, Complex64};
use crate::expression::Expression;
use crate::Result;
use std::f64::consts::PI;

/// Sample positions and the sampled values embedded in the complex plane
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoints {
    pub x: Vec<f64>,
    pub y: Vec<Complex64>,
}

impl SamplePoints {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Real parts of the sampled values
    pub fn real_values(&self) -> Vec<f64> {
        self.y.iter().map(|c| c.re).collect()
    }
}

/// Position of sample `index` on a grid of `count` points over `[-π, π)`
pub fn grid_position(index: usize, count: usize) -> f64 {
    -PI + 2.0 * PI * index as f64 / count as f64
}

/// Samples a parsed expression on the standard grid
#[derive(Debug, Clone)]
pub struct Sampler {
    expression: Expression,
}

impl Sampler {
    /// Parse `expr` once for all subsequent sampling
    pub fn new(expr: &str) -> Result<Self> {
        Ok(Self {
            expression: Expression::parse(expr)?,
        })
    }

    pub fn from_expression(expression: Expression) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Sample `count` points. `count` is independent of any transform length,
    /// so the same sampler serves both the transform input and dense plots.
    pub fn generate_points(&self, count: usize) -> SamplePoints {
        let x: Vec<f64> = (0..count).map(|j| grid_position(j, count)).collect();
        let y = x
            .iter()
            .map(|&xj| from_real(self.expression.eval(xj)))
            .collect();
        SamplePoints { x, y }
    }
}

/// Parse `expr` and sample it at `count` points
pub fn generate_points(expr: &str, count: usize) -> Result<SamplePoints> {
    Ok(Sampler::new(expr)?.generate_points(count))
}
