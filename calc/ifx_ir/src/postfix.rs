//! Postfix token sequences.
//!
//! A [`Postfix`] is what the converter hands to the evaluator: operands and
//! operators in evaluation order, with every operator after its operands.
//! Parentheses are not representable here — the converter consumes them as
//! boundary markers, so malformed sequences containing grouping symbols
//! cannot be constructed at all.

use std::fmt;

use crate::BinaryOp;

/// A single postfix token: a digit operand or a binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    /// A digit value 0-9 (the only operand form the calculator supports).
    Operand(u8),
    /// One of `+ - * /`.
    Op(BinaryOp),
}

impl PostfixToken {
    /// Parse a digit character into an operand token.
    ///
    /// Returns `None` for anything that is not an ASCII digit.
    pub fn from_digit_char(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        u8::try_from(digit).ok().map(PostfixToken::Operand)
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Operand(digit) => write!(f, "{digit}"),
            PostfixToken::Op(op) => write!(f, "{op}"),
        }
    }
}

/// An ordered postfix token sequence.
///
/// `Display` renders the compact single-character form, e.g. `3+4*2`
/// converts to `342*+`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    /// Wrap an already-ordered token sequence.
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Postfix { tokens }
    }

    /// The tokens in evaluation order.
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    /// True if the sequence holds no tokens (empty input expression).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl FromIterator<PostfixToken> for Postfix {
    fn from_iter<I: IntoIterator<Item = PostfixToken>>(iter: I) -> Self {
        Postfix {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
