//! Recursive-descent parser producing an expression tree
//!
//! Precedence, lowest to highest:
//! `+ -`, `* /`, unary minus, `^` (right associative), then operands
//! (numbers, `x`, `pi`, function calls, `( )` and `| |` groups).

use super::functions::Function;
use super::lexer::{Token, TokenKind};
use crate::error::ParseError;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable,
    Pi,
    Negate(Box<Node>),
    Abs(Box<Node>),
    Call {
        function: Function,
        arg: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
}

impl Node {
    /// Evaluate the tree with `x` bound to the given value
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Number(value) => *value,
            Node::Variable => x,
            Node::Pi => PI,
            Node::Negate(inner) => -inner.eval(x),
            Node::Abs(inner) => inner.eval(x).abs(),
            Node::Call { function, arg } => function.apply(arg.eval(x)),
            Node::Binary { op, lhs, rhs } => {
                let (l, r) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Sub => l - r,
                    BinaryOp::Mul => l * r,
                    BinaryOp::Div => l / r,
                    BinaryOp::Pow => l.powf(r),
                }
            }
        }
    }
}

/// Deepest nesting accepted, counting both bracket/sign nesting while parsing
/// and the height of the resulting tree. Evaluation recurses once per level.
pub const MAX_DEPTH: usize = 200;

/// Parse a complete token stream; trailing tokens are an error.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let root = parser.expression()?;

    match parser.peek() {
        None => Ok(root.node),
        Some(token) => Err(unexpected(token)),
    }
}

/// A parsed subtree with its height
struct Parsed {
    node: Node,
    height: usize,
}

impl Parsed {
    fn leaf(node: Node) -> Self {
        Self { node, height: 1 }
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Position reported when a limit is hit
    fn current_pos(&self) -> usize {
        self.peek().or(self.tokens.last()).map_or(0, |t| t.pos)
    }

    fn expression(&mut self) -> Result<Parsed, ParseError> {
        let mut lhs = self.term()?;
        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let mut lhs = self.unary()?;
        while let Some(op) = self.peek().and_then(|t| match t.kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }) {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    // Every recursive path (groups, signs, exponents) passes through here
    fn unary(&mut self) -> Result<Parsed, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep {
                pos: self.current_pos(),
            });
        }
        self.depth += 1;
        let result = self.signed();
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> Result<Parsed, ParseError> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Minus) => {
                self.pos += 1;
                let inner = self.unary()?;
                self.wrap(inner, |node| Node::Negate(Box::new(node)))
            }
            Some(TokenKind::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Parsed, ParseError> {
        let base = self.operand()?;
        if matches!(self.peek().map(|t| t.kind), Some(TokenKind::Caret)) {
            self.pos += 1;
            // Exponent may carry its own sign: 2^-x
            let exponent = self.unary()?;
            return self.binary(BinaryOp::Pow, base, exponent);
        }
        Ok(base)
    }

    fn operand(&mut self) -> Result<Parsed, ParseError> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd {
            expected: "an operand",
        })?;

        match token.kind {
            TokenKind::Number(value) => Ok(Parsed::leaf(Node::Number(value))),
            TokenKind::Variable => Ok(Parsed::leaf(Node::Variable)),
            TokenKind::Pi => Ok(Parsed::leaf(Node::Pi)),
            TokenKind::LParen => {
                let inner = self.expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::BarOpen => {
                let inner = self.expression()?;
                self.expect(TokenKind::BarClose, "'|'")?;
                self.wrap(inner, |node| Node::Abs(Box::new(node)))
            }
            TokenKind::Function(function) => {
                // The argument must be a bracketed group
                match self.peek() {
                    Some(t) if matches!(t.kind, TokenKind::LParen | TokenKind::BarOpen) => {
                        let arg = self.operand()?;
                        self.wrap(arg, |node| Node::Call {
                            function,
                            arg: Box::new(node),
                        })
                    }
                    Some(t) => Err(unexpected(t)),
                    None => Err(ParseError::UnexpectedEnd {
                        expected: "'(' after function name",
                    }),
                }
            }
            _ => Err(unexpected(token)),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(token)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    fn wrap(
        &self,
        inner: Parsed,
        build: impl FnOnce(Node) -> Node,
    ) -> Result<Parsed, ParseError> {
        self.limit_height(inner.height + 1)?;
        Ok(Parsed {
            node: build(inner.node),
            height: inner.height + 1,
        })
    }

    fn binary(&self, op: BinaryOp, lhs: Parsed, rhs: Parsed) -> Result<Parsed, ParseError> {
        let height = lhs.height.max(rhs.height) + 1;
        self.limit_height(height)?;
        Ok(Parsed {
            node: binary(op, lhs.node, rhs.node),
            height,
        })
    }

    fn limit_height(&self, height: usize) -> Result<(), ParseError> {
        if height > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                pos: self.current_pos(),
            });
        }
        Ok(())
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        pos: token.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::lexer::tokenize;

    fn tree(source: &str) -> Node {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    fn parse_err(source: &str) -> ParseError {
        parse(&tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn test_precedence() {
        // 1 + 2*3 parses as 1 + (2*3)
        assert_eq!(
            tree("1+2*3"),
            binary(
                BinaryOp::Add,
                Node::Number(1.0),
                binary(BinaryOp::Mul, Node::Number(2.0), Node::Number(3.0)),
            )
        );
        // unary minus binds looser than ^
        assert_eq!(
            tree("-x^2"),
            Node::Negate(Box::new(binary(
                BinaryOp::Pow,
                Node::Variable,
                Node::Number(2.0)
            )))
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(tree("2^3^2").eval(0.0), 512.0);
        assert_eq!(tree("2^-1").eval(0.0), 0.5);
    }

    #[test]
    fn test_left_associative_operators() {
        assert_eq!(tree("8-3-2").eval(0.0), 3.0);
        assert_eq!(tree("8/4/2").eval(0.0), 1.0);
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(
            tree("sin(x)"),
            Node::Call {
                function: Function::Sin,
                arg: Box::new(Node::Variable),
            }
        );
        assert_eq!(tree("sqrt|x|").eval(-4.0), 2.0);
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(
            parse_err("2+"),
            ParseError::UnexpectedEnd {
                expected: "an operand"
            }
        );
        assert_eq!(
            parse_err("()"),
            ParseError::UnexpectedToken {
                found: "')'".to_string(),
                pos: 1
            }
        );
        assert_eq!(
            parse_err("2 3"),
            ParseError::UnexpectedToken {
                found: "number 3".to_string(),
                pos: 2
            }
        );
        assert_eq!(
            parse_err("sin x"),
            ParseError::UnexpectedToken {
                found: "'x'".to_string(),
                pos: 4
            }
        );
        assert_eq!(
            parse_err("cos"),
            ParseError::UnexpectedEnd {
                expected: "'(' after function name"
            }
        );
        assert_eq!(parse(&[]), Err(ParseError::Empty));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |n: usize| format!("{}x{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(tree(&nested(MAX_DEPTH - 1)).eval(2.0), 2.0);
        assert!(matches!(
            parse_err(&nested(MAX_DEPTH + 1)),
            ParseError::TooDeep { .. }
        ));

        // Far past the limit must still fail cleanly rather than exhaust the stack
        let too_deep = [
            nested(100_000),
            format!("{}x", "-".repeat(100_000)),
            format!("{}x{}", "|".repeat(50_000), "|".repeat(50_000)),
            format!("{}x{}", "sin(".repeat(50_000), ")".repeat(50_000)),
            vec!["2"; 50_000].join("^"),
        ];
        for source in &too_deep {
            assert!(matches!(parse_err(source), ParseError::TooDeep { .. }));
        }
    }

    #[test]
    fn test_long_operator_chains_are_bounded() {
        let chain = |n: usize| vec!["1"; n].join("+");
        assert_eq!(tree(&chain(MAX_DEPTH)).eval(0.0), MAX_DEPTH as f64);
        assert!(matches!(
            parse_err(&chain(100_000)),
            ParseError::TooDeep { .. }
        ));

        // Balanced groups keep the tree shallow
        let grouped = vec![format!("({})", chain(100)); 100].join("+");
        assert_eq!(tree(&grouped).eval(0.0), 10_000.0);
    }
}
