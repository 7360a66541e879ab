//! Shared expression types for the infix calculator.
//!
//! This crate is the dependency root of the pipeline: the converter produces
//! a [`Postfix`] sequence and the evaluator consumes one. Keeping the types
//! here lets both stages agree on the vocabulary without depending on each
//! other.
//!
//! Operands are single digits. This is a deliberate limitation of the
//! calculator's design, not an extension point: there are no multi-character
//! tokens anywhere in the pipeline.

mod op;
mod postfix;

pub use op::BinaryOp;
pub use postfix::{Postfix, PostfixToken};
