//! Curve functions: a small arithmetic expression language over `t`.
//!
//! Parametric curves are edited as text (`"200+100*sin(t)"`). [`Expr`] parses
//! that text once with a recursive-descent parser and evaluates the tree for
//! every sample. The grammar accepts the `Math.` prefix and a trailing `;` so
//! strings written for the JavaScript demo keep working. Sources longer
//! than [`MAX_EXPR_LEN`] or nested deeper than [`MAX_EXPR_DEPTH`] are
//! rejected, which bounds the recursion of parsing, evaluation and drop.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary (('^' | '**') unary)?
//! primary := number | 't' | constant | function '(' expr ')' | '(' expr ')'
//! ```

#[cfg(test)]
#[path = "expr_test.rs"]
mod expr_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_EXPR_DEPTH, MAX_EXPR_LEN};

/// Parse failures, with byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExprError {
    #[error("unexpected character {ch:?} at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected token at {0}")]
    UnexpectedToken(usize),
    #[error("unknown identifier {0:?}")]
    UnknownIdentifier(String),
    #[error("unknown function {0:?}")]
    UnknownFunction(String),
    #[error("unexpected input at {0}")]
    TrailingInput(usize),
    #[error("expression is {0} bytes long, at most {max} allowed", max = MAX_EXPR_LEN)]
    TooLong(usize),
    #[error("expression nests deeper than {0} levels")]
    TooDeep(usize),
}

/// A parsed function of `t`, keeping its source text for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Expr {
    source: String,
    root: Node,
}

impl Expr {
    /// Parse `source` into an evaluable expression.
    ///
    /// # Errors
    ///
    /// Returns an [`ExprError`] describing the first problem found.
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        if source.len() > MAX_EXPR_LEN {
            return Err(ExprError::TooLong(source.len()));
        }
        let tokens = tokenize(source)?;
        let mut parser = Parser { tokens: &tokens, pos: 0, depth: 0 };
        let root = parser.expr()?;
        while parser.eat(&Tok::Semi) {}
        if let Some((_, at)) = parser.peek() {
            return Err(ExprError::TrailingInput(at));
        }
        Ok(Self { source: source.to_string(), root })
    }

    /// The text this expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at parameter `t`. Domain errors yield NaN, as in `f64` math.
    #[must_use]
    pub fn eval(&self, t: f64) -> f64 {
        self.root.eval(t)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for Expr {
    type Error = ExprError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Expr> for String {
    fn from(expr: Expr) -> Self {
        expr.source
    }
}

// =============================================================
// Syntax tree
// =============================================================

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Num(f64),
    T,
    Neg(Box<Node>),
    Bin(BinOp, Box<Node>, Box<Node>),
    Call(Func, Box<Node>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Abs,
    Exp,
    Ln,
    Floor,
    Ceil,
}

impl Func {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            "exp" => Self::Exp,
            // `log` is the natural logarithm, matching JavaScript's `Math.log`.
            "ln" | "log" => Self::Ln,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            _ => return None,
        })
    }

    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
            Self::Exp => x.exp(),
            Self::Ln => x.ln(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
        }
    }
}

impl Node {
    fn eval(&self, t: f64) -> f64 {
        match self {
            Self::Num(v) => *v,
            Self::T => t,
            Self::Neg(inner) => -inner.eval(t),
            Self::Bin(op, lhs, rhs) => {
                let (a, b) = (lhs.eval(t), rhs.eval(t));
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Pow => a.powf(b),
                }
            }
            Self::Call(func, arg) => func.apply(arg.eval(t)),
        }
    }
}

// =============================================================
// Tokenizer
// =============================================================

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Semi,
}

fn tokenize(src: &str) -> Result<Vec<(Tok, usize)>, ExprError> {
    let mut out = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let mut text = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if c.is_ascii_digit() || c == '.' {
                    text.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            let value = text.parse::<f64>().map_err(|_| ExprError::InvalidNumber(text.clone()))?;
            out.push((Tok::Num(value), pos));
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let mut text = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                    text.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            let name = text.strip_prefix("Math.").unwrap_or(&text).to_string();
            out.push((Tok::Ident(name), pos));
            continue;
        }

        chars.next();
        let tok = match ch {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => {
                if chars.peek().is_some_and(|&(_, c)| c == '*') {
                    chars.next();
                    Tok::Caret
                } else {
                    Tok::Star
                }
            }
            '/' => Tok::Slash,
            '^' => Tok::Caret,
            '(' => Tok::LParen,
            ')' => Tok::RParen,
            ';' => Tok::Semi,
            _ => return Err(ExprError::UnexpectedChar { ch, pos }),
        };
        out.push((tok, pos));
    }

    Ok(out)
}

// =============================================================
// Parser
// =============================================================

struct Parser<'a> {
    tokens: &'a [(Tok, usize)],
    pos: usize,
    /// Active `unary` frames. Every recursive path (parentheses, call
    /// arguments, sign runs, power chains) passes through `unary`.
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<(&Tok, usize)> {
        self.tokens.get(self.pos).map(|(tok, at)| (tok, *at))
    }

    fn eat(&mut self, tok: &Tok) -> bool {
        if self.peek().is_some_and(|(t, _)| t == tok) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn consume(&mut self, tok: &Tok) -> Result<(), ExprError> {
        match self.peek() {
            Some((t, _)) if t == tok => {
                self.pos += 1;
                Ok(())
            }
            Some((_, at)) => Err(ExprError::UnexpectedToken(at)),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Node, ExprError> {
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(&Tok::Plus) {
                BinOp::Add
            } else if self.eat(&Tok::Minus) {
                BinOp::Sub
            } else {
                return Ok(lhs);
            };
            let rhs = self.term()?;
            lhs = Node::Bin(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Node, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(&Tok::Star) {
                BinOp::Mul
            } else if self.eat(&Tok::Slash) {
                BinOp::Div
            } else {
                return Ok(lhs);
            };
            let rhs = self.unary()?;
            lhs = Node::Bin(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Node, ExprError> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(ExprError::TooDeep(MAX_EXPR_DEPTH));
        }
        self.depth += 1;
        let node = self.signed();
        self.depth -= 1;
        node
    }

    fn signed(&mut self) -> Result<Node, ExprError> {
        if self.eat(&Tok::Minus) {
            return Ok(Node::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&Tok::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ExprError> {
        let base = self.primary()?;
        if self.eat(&Tok::Caret) {
            let exponent = self.unary()?;
            return Ok(Node::Bin(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ExprError> {
        let Some((tok, at)) = self.peek() else {
            return Err(ExprError::UnexpectedEnd);
        };
        let tok = tok.clone();
        self.pos += 1;

        match tok {
            Tok::Num(v) => Ok(Node::Num(v)),
            Tok::LParen => {
                let inner = self.expr()?;
                self.consume(&Tok::RParen)?;
                Ok(inner)
            }
            Tok::Ident(name) => {
                if self.peek().is_some_and(|(t, _)| *t == Tok::LParen) {
                    let func = Func::from_name(&name).ok_or(ExprError::UnknownFunction(name))?;
                    self.consume(&Tok::LParen)?;
                    let arg = self.expr()?;
                    self.consume(&Tok::RParen)?;
                    return Ok(Node::Call(func, Box::new(arg)));
                }
                match name.as_str() {
                    "t" => Ok(Node::T),
                    "pi" | "PI" => Ok(Node::Num(std::f64::consts::PI)),
                    "e" | "E" => Ok(Node::Num(std::f64::consts::E)),
                    _ => Err(ExprError::UnknownIdentifier(name)),
                }
            }
            _ => Err(ExprError::UnexpectedToken(at)),
        }
    }
}
