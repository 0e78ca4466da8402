//! Public error type for the API.
//!
//! Internal layer errors convert into this stable type at the API boundary.
//! An elapsed evaluation budget is *not* an error anywhere in this crate;
//! it surfaces as [`Outcome::Undecided`](crate::evaluator::Outcome).

use crate::analyzer::TypeError;
use crate::evaluator::EvalError;
use ecow::EcoString;
use thiserror::Error;

/// Public error type for all engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression does not type-check against the engine environment.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// Evaluation hit a hard runtime failure.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The expression has a free variable the engine environment does not
    /// bind, so evaluation never started.
    #[error("expression has free variable '{name}' not bound by the engine environment")]
    OpenExpression { name: EcoString },
}
