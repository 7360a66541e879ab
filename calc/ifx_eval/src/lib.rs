//! Stack evaluation of postfix token sequences.
//!
//! Operands push their value; each operator pops its right operand, then its
//! left, applies, and pushes the result. After the last token the top of the
//! stack is the answer.
//!
//! The evaluator is deliberately permissive about stack shape: it does not
//! verify that exactly one value remains at the end, and an operator that
//! finds too few operands surfaces the container's own underflow error as a
//! malformed expression. The one structural guarantee comes for free from
//! the input type — a [`Postfix`] cannot contain parentheses.

use ifx_containers::{EmptyContainerError, Stack};
use ifx_ir::{BinaryOp, Postfix, PostfixToken};
use thiserror::Error;
use tracing::trace;

/// Error raised while evaluating a postfix sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right-hand operand of `/` was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operator popped an empty value stack: the expression had too many
    /// operators for its operands (e.g. `1+`). Also raised for an empty
    /// postfix sequence, which leaves nothing to return.
    #[error("malformed expression: {0}")]
    MalformedExpression(#[from] EmptyContainerError),
}

/// Evaluate a postfix token sequence to an integer.
///
/// Division truncates toward zero, matching integer division semantics.
pub fn evaluate(postfix: &Postfix) -> Result<i64, EvalError> {
    let mut values: Stack<i64> = Stack::new();

    for token in postfix {
        match *token {
            PostfixToken::Operand(digit) => values.push(i64::from(digit)),
            PostfixToken::Op(op) => {
                // The right operand was pushed last, so it pops first.
                let right = values.pop()?;
                let left = values.pop()?;
                let result = apply(op, left, right)?;
                trace!(%op, left, right, result, "applied operator");
                values.push(result);
            }
        }
    }

    Ok(values.pop()?)
}

/// Apply one binary operator to already-popped operands.
fn apply(op: BinaryOp, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
    }
}

#[cfg(test)]
mod tests;
