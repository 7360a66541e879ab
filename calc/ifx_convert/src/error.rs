//! Conversion error types.

use ifx_containers::EmptyContainerError;
use thiserror::Error;

/// Error raised while converting infix text to postfix.
///
/// The first error aborts the conversion; there is no recovery or
/// resynchronization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A `)` with no matching `(`, or a `(` still open at end of input.
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    /// A character that is not a digit, an operator, a parenthesis, or
    /// whitespace. Multi-digit numbers land here too: the second digit of
    /// `12` is a valid token, but `1.5`'s dot or a letter is not.
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),

    /// Internal container underflow. Unreachable for the conversion
    /// algorithm itself (every pop is guarded), but kept in the error
    /// surface so `?` propagation stays uniform.
    #[error(transparent)]
    Container(#[from] EmptyContainerError),
}
