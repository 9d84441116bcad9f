use std::f64::consts::{E, PI};
use std::fmt;

use thiserror::Error;

use super::{Expr, Func};

/// Errors that can occur when parsing an [`Expr`] from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A valid token in a position where it is not allowed.
    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    /// The input ended in the middle of an expression.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A name followed by `(` that is not a known function.
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    /// An identifier that is not `x`, `pi`, `e`, or a function call.
    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },

    /// A numeric literal that does not parse as `f64`.
    #[error("invalid number '{text}'")]
    InvalidNumber { text: String },
}

pub(super) fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser { tokens, next: 0 };
    let expr = parser.sum()?;
    match parser.peek() {
        None => Ok(expr),
        Some((token, pos)) => Err(ParseError::UnexpectedToken {
            found: token.to_string(),
            pos: *pos,
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Open,
    Close,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::Ident(name) => write!(f, "'{name}'"),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Caret => f.write_str("'^'"),
            Token::Open => f.write_str("'('"),
            Token::Close => f.write_str("')'"),
        }
    }
}

/// Splits `text` into tokens paired with their starting byte offsets.
fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let end = number_end(text, pos);
            let literal = &text[pos..end];
            let value = literal
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber {
                    text: literal.to_string(),
                })?;
            tokens.push((Token::Number(value), pos));
            while chars.next_if(|&(i, _)| i < end).is_some() {}
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let mut name = String::new();
            while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphanumeric() || c == '_')
            {
                name.push(c);
            }
            tokens.push((Token::Ident(name), pos));
            continue;
        }

        chars.next();
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if chars.next_if(|&(_, c)| c == '*').is_some() => Token::Caret,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::Open,
            ')' => Token::Close,
            _ => return Err(ParseError::UnexpectedChar { ch, pos }),
        };
        tokens.push((token, pos));
    }

    Ok(tokens)
}

/// Returns the byte offset just past a numeric literal starting at `start`.
///
/// Accepts digits with an optional fraction and an optional exponent. An `e`
/// not followed by digits is left for the identifier rules, so `2e` lexes as
/// `2` then `e`.
fn number_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits(start);
    if end < bytes.len() && bytes[end] == b'.' {
        end = digits(end + 1);
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut i = end + 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exponent_end = digits(i);
        if exponent_end > i {
            end = exponent_end;
        }
    }
    end
}

/// Recursive-descent parser over a token stream.
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := unary (('*' | '/') unary)*
/// unary   := ('-' | '+') unary | power
/// power   := atom ('^' unary)?
/// atom    := number | 'x' | 'pi' | 'e' | name '(' sum ')' | '(' sum ')'
/// ```
struct Parser {
    tokens: Vec<(Token, usize)>,
    next: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.next)
    }

    fn advance(&mut self) -> Result<(Token, usize), ParseError> {
        let item = self
            .tokens
            .get(self.next)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.next += 1;
        Ok(item)
    }

    /// Consumes the next token if it equals `token`.
    fn eat(&mut self, token: &Token) -> bool {
        if self.peek().is_some_and(|(next, _)| next == token) {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        match self.advance()? {
            (Token::Close, _) => Ok(()),
            (token, pos) => Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                pos,
            }),
        }
    }

    fn sum(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.product()?;
        loop {
            if self.eat(&Token::Plus) {
                lhs = lhs + self.product()?;
            } else if self.eat(&Token::Minus) {
                lhs = lhs - self.product()?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn product(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            if self.eat(&Token::Star) {
                lhs = lhs * self.unary()?;
            } else if self.eat(&Token::Slash) {
                lhs = lhs / self.unary()?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            return Ok(-self.unary()?);
        }
        if self.eat(&Token::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.atom()?;
        if self.eat(&Token::Caret) {
            // The exponent is parsed at unary level so `2^-x` and `2^x^2` work.
            let exponent = self.unary()?;
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        match self.advance()? {
            (Token::Number(value), _) => Ok(Expr::Const(value)),
            (Token::Open, _) => {
                let inner = self.sum()?;
                self.expect_close()?;
                Ok(inner)
            }
            (Token::Ident(name), _) if self.eat(&Token::Open) => {
                let func =
                    Func::from_name(&name).ok_or(ParseError::UnknownFunction { name })?;
                let arg = self.sum()?;
                self.expect_close()?;
                Ok(arg.apply(func))
            }
            (Token::Ident(name), _) => match name.as_str() {
                "x" => Ok(Expr::Var),
                "pi" => Ok(Expr::Const(PI)),
                "e" => Ok(Expr::Const(E)),
                _ => Err(ParseError::UnknownIdentifier { name }),
            },
            (token, pos) => Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                pos,
            }),
        }
    }
}
