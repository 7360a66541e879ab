//! The infix calculator pipeline.
//!
//! Glues the two stages together: raw text goes through the converter
//! ([`convert_to_postfix`]) and the resulting postfix sequence through the
//! evaluator ([`evaluate`]). Each [`calculate`] call is self-contained —
//! fresh containers, no state carried between calls — so the same input
//! always produces the same result.

use thiserror::Error;
use tracing::debug;

// Re-export the pipeline vocabulary at the crate root so callers only need
// one dependency.
pub use ifx_convert::{convert_to_postfix, ConvertError};
pub use ifx_eval::{evaluate, EvalError};
pub use ifx_ir::{BinaryOp, Postfix, PostfixToken};

/// Error from either stage of the pipeline, propagated unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Evaluate an infix expression to an integer.
///
/// ```
/// assert_eq!(ifxc::calculate("3+4*2"), Ok(11));
/// assert_eq!(ifxc::calculate("(3+4)*2"), Ok(14));
/// ```
pub fn calculate(expression: &str) -> Result<i64, CalcError> {
    let postfix = convert_to_postfix(expression)?;
    debug!(%postfix, "evaluating postfix form");
    let result = evaluate(&postfix)?;
    Ok(result)
}

/// Initialize tracing from the environment (for the CLI binary).
///
/// Enable with `RUST_LOG=ifx_convert=trace` or `RUST_LOG=debug`. Does
/// nothing unless `RUST_LOG` is set, and is safe to call more than once.
pub fn init_tracing() {
    use std::sync::Once;

    static TRACING_INIT: Once = Once::new();

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
