//! Tokenizer for the function mini-language
//!
//! Implicit multiplication is resolved here: whenever a token that can end an
//! operand is directly followed by one that can start an operand, a `*` token
//! is emitted between them (`2(x)`, `pi|x|`, `sin(x)cos(x)`, `2x`).

use super::functions::Function;
use crate::error::ParseError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Variable,
    Pi,
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    BarOpen,
    BarClose,
}

impl TokenKind {
    /// Whether this token can be the last token of an operand
    fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::Variable
                | TokenKind::Pi
                | TokenKind::RParen
                | TokenKind::BarClose
        )
    }

    /// Whether this token can be the first token of an operand
    fn starts_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::Variable
                | TokenKind::Pi
                | TokenKind::Function(_)
                | TokenKind::LParen
                | TokenKind::BarOpen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "number {}", value),
            TokenKind::Variable => write!(f, "'x'"),
            TokenKind::Pi => write!(f, "'pi'"),
            TokenKind::Function(func) => write!(f, "function '{}'", func.name()),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Caret => write!(f, "'^'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::BarOpen | TokenKind::BarClose => write!(f, "'|'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the source string
    pub pos: usize,
}

/// Open bracket kinds tracked while tokenizing
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bracket {
    Paren,
    Bar,
}

/// Split `source` into tokens, inserting implicit multiplication.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens: Vec<Token> = Vec::new();
    let mut open: Vec<(Bracket, usize)> = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];

        if ch.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let start = pos;
        let kind = if ch.is_ascii_digit() || ch == b'.' {
            pos = scan_number(bytes, pos);
            let text = &source[start..pos];
            let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                text: text.to_string(),
                pos: start,
            })?;
            TokenKind::Number(value)
        } else if ch.is_ascii_alphabetic() {
            while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                pos += 1;
            }
            identifier(&source[start..pos], start)?
        } else {
            pos += 1;
            match ch {
                b'+' => TokenKind::Plus,
                b'-' => TokenKind::Minus,
                b'*' => TokenKind::Star,
                b'/' => TokenKind::Slash,
                b'^' => TokenKind::Caret,
                b'(' => {
                    open.push((Bracket::Paren, start));
                    TokenKind::LParen
                }
                b')' => match open.pop() {
                    Some((Bracket::Paren, _)) => TokenKind::RParen,
                    _ => {
                        return Err(ParseError::UnbalancedBracket {
                            bracket: ')',
                            pos: start,
                        })
                    }
                },
                b'|' => {
                    // A bar closes the innermost open bar only once an operand
                    // is complete; otherwise it opens a new one.
                    let inside_bar = matches!(open.last(), Some((Bracket::Bar, _)));
                    let after_operand = tokens.last().is_some_and(|t| t.kind.ends_operand());
                    if inside_bar && after_operand {
                        open.pop();
                        TokenKind::BarClose
                    } else {
                        open.push((Bracket::Bar, start));
                        TokenKind::BarOpen
                    }
                }
                _ => {
                    let ch = source[start..].chars().next().unwrap_or('?');
                    return Err(ParseError::UnexpectedChar { ch, pos: start });
                }
            }
        };

        if let Some(prev) = tokens.last() {
            let both_numbers =
                matches!(prev.kind, TokenKind::Number(_)) && matches!(kind, TokenKind::Number(_));
            if prev.kind.ends_operand() && kind.starts_operand() && !both_numbers {
                tokens.push(Token {
                    kind: TokenKind::Star,
                    pos: start,
                });
            }
        }
        tokens.push(Token { kind, pos: start });
    }

    if let Some(&(bracket, pos)) = open.last() {
        let bracket = match bracket {
            Bracket::Paren => '(',
            Bracket::Bar => '|',
        };
        return Err(ParseError::UnbalancedBracket { bracket, pos });
    }

    Ok(tokens)
}

/// Scan a decimal literal with an optional exponent, returning the end offset.
/// The exponent is only taken when digits follow, so `2exp(x)` stays `2 * exp(x)`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                exp += 1;
            }
            pos = exp;
        }
    }

    pos
}

fn identifier(name: &str, pos: usize) -> Result<TokenKind, ParseError> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "x" => Ok(TokenKind::Variable),
        "pi" => Ok(TokenKind::Pi),
        _ => Function::from_name(&lower)
            .map(TokenKind::Function)
            .ok_or_else(|| ParseError::UnknownIdentifier {
                name: name.to_string(),
                pos,
            }),
    }
}
