//! Infix-to-postfix conversion (shunting-yard, single-digit variant).
//!
//! Consumes raw expression text and produces a [`Postfix`](ifx_ir::Postfix)
//! token sequence. Operators are reordered by precedence using an operator
//! stack; finished tokens accumulate in an output queue and come back out in
//! dequeue order.
//!
//! The tie-break is deliberate: an operator of *equal* precedence on the
//! stack pops before the new one is pushed, which makes all four operators
//! left-associative (`8-3-2` evaluates as `(8-3)-2`).

mod convert;
mod error;

pub use convert::convert_to_postfix;
pub use error::ConvertError;
