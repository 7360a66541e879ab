//! The shunting-yard conversion pass.

use ifx_containers::{Queue, Stack};
use ifx_ir::{BinaryOp, Postfix, PostfixToken};
use tracing::{debug, trace};

use crate::ConvertError;

/// An entry on the converter's operator stack.
///
/// `(` shares the stack with real operators but never enters a precedence
/// comparison; it only marks where a `)` must stop popping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpEntry {
    Op(BinaryOp),
    OpenParen,
}

/// Convert an infix expression to a postfix token sequence.
///
/// Whitespace is skipped. Digits go straight to the output; operators are
/// held on a stack until an operator of lower precedence (or a parenthesis
/// boundary, or end of input) releases them. Errors abort at the point of
/// detection:
///
/// - [`ConvertError::InvalidCharacter`] for any unrecognized symbol,
/// - [`ConvertError::MismatchedParentheses`] for an unmatched `(` or `)`.
pub fn convert_to_postfix(expression: &str) -> Result<Postfix, ConvertError> {
    let mut operators: Stack<OpEntry> = Stack::new();
    let mut output: Queue<PostfixToken> = Queue::new();

    debug!(expression, "converting infix to postfix");

    for c in expression.chars() {
        if c.is_whitespace() {
            continue;
        }

        if let Some(operand) = PostfixToken::from_digit_char(c) {
            trace!(%operand, "operand to output");
            output.enqueue(operand);
        } else if let Some(op) = BinaryOp::from_char(c) {
            // Pop while the top is a real operator binding at least as
            // tightly as the new one. Equal precedence pops first, which
            // keeps evaluation left-to-right.
            while let Some(OpEntry::Op(top)) = operators.peek().ok().copied() {
                if top.precedence() < op.precedence() {
                    break;
                }
                operators.pop()?;
                trace!(released = %top, incoming = %op, "operator released");
                output.enqueue(PostfixToken::Op(top));
            }
            operators.push(OpEntry::Op(op));
        } else if c == '(' {
            operators.push(OpEntry::OpenParen);
        } else if c == ')' {
            // Release operators until the matching '(' appears; running out
            // of stack first means the ')' has no partner.
            loop {
                match operators.pop() {
                    Ok(OpEntry::Op(op)) => output.enqueue(PostfixToken::Op(op)),
                    Ok(OpEntry::OpenParen) => break,
                    Err(_) => return Err(ConvertError::MismatchedParentheses),
                }
            }
        } else {
            return Err(ConvertError::InvalidCharacter(c));
        }
    }

    // Drain the remaining operators. A leftover '(' was never closed.
    while !operators.is_empty() {
        match operators.pop()? {
            OpEntry::Op(op) => output.enqueue(PostfixToken::Op(op)),
            OpEntry::OpenParen => return Err(ConvertError::MismatchedParentheses),
        }
    }

    let mut tokens = Vec::with_capacity(output.len());
    while let Ok(token) = output.dequeue() {
        tokens.push(token);
    }

    let postfix = Postfix::new(tokens);
    debug!(%postfix, "conversion complete");
    Ok(postfix)
}
