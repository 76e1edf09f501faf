//! Evaluator for the function mini-language
//!
//! The grammar is fixed: numeric literals, `pi`, the variable `x`, unary minus,
//! binary `+ - * / ^`, parentheses, absolute-value bars `|…|` and a closed set
//! of named functions. Input is tokenized and parsed into a tree once, then the
//! tree is walked for every value of `x`.

pub mod functions;
pub mod lexer;
pub mod parser;

pub use functions::Function;

use crate::error::ParseError;
use parser::Node;

/// A parsed function of `x`
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Tokenize and parse `source`
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(source)?;
        let root = parser::parse(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Evaluate at `x`. Non-finite results are returned as-is.
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// The text this expression was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Parse `expr` and evaluate it once at `x`
pub fn evaluate(expr: &str, x: f64) -> Result<f64, ParseError> {
    Ok(Expression::parse(expr)?.eval(x))
}
