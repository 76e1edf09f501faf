//! Named unary functions accepted by the expression grammar

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Sqrt,
    /// Natural logarithm
    Ln,
    /// Base-10 logarithm
    Log,
    Abs,
    Sign,
    Floor,
    Ceil,
}

impl Function {
    pub fn all() -> &'static [Function] {
        &[
            Function::Sin,
            Function::Cos,
            Function::Tan,
            Function::Asin,
            Function::Acos,
            Function::Atan,
            Function::Sinh,
            Function::Cosh,
            Function::Tanh,
            Function::Exp,
            Function::Sqrt,
            Function::Ln,
            Function::Log,
            Function::Abs,
            Function::Sign,
            Function::Floor,
            Function::Ceil,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Abs => "abs",
            Function::Sign => "sign",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
        }
    }

    /// Look up a function by its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Function::Sin => value.sin(),
            Function::Cos => value.cos(),
            Function::Tan => value.tan(),
            Function::Asin => value.asin(),
            Function::Acos => value.acos(),
            Function::Atan => value.atan(),
            Function::Sinh => value.sinh(),
            Function::Cosh => value.cosh(),
            Function::Tanh => value.tanh(),
            Function::Exp => value.exp(),
            Function::Sqrt => value.sqrt(),
            Function::Ln => value.ln(),
            Function::Log => value.log10(),
            Function::Abs => value.abs(),
            // signum() maps 0.0 to 1.0, which would bias square waves
            Function::Sign => {
                if value == 0.0 {
                    0.0
                } else {
                    value.signum()
                }
            }
            Function::Floor => value.floor(),
            Function::Ceil => value.ceil(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_round_trips() {
        for &func in Function::all() {
            assert_eq!(Function::from_name(func.name()), Some(func));
        }
        assert_eq!(Function::from_name("cot"), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Function::Sign.apply(0.0), 0.0);
        assert_eq!(Function::Sign.apply(-3.0), -1.0);
        assert!((Function::Log.apply(1000.0) - 3.0).abs() < 1e-12);
        assert!(Function::Sqrt.apply(-1.0).is_nan());
    }
}
