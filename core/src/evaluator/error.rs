//! Runtime evaluation errors.
//!
//! Divergence is not represented here: a computation whose logical content
//! is false simply never completes, and only the caller's budget can stop
//! it. The variants below are hard failures. `UnboundVariable` is the one
//! error a well-formed program can still hit (the environment is only known
//! at evaluation time); the shape mismatches indicate an expression that was
//! evaluated without checking, or a broken invariant.

use ecow::EcoString;
use thiserror::Error;

/// A hard evaluation failure. Never raised for divergence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable had no binding in the evaluation environment.
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: EcoString },

    /// A projection reached a value that is not a pair.
    #[error("projection applied to non-pair value {found}")]
    NotAPair { found: String },

    /// An application reached a value that is not a function.
    #[error("application of non-function value {found}")]
    NotAClosure { found: String },

    /// A recursion input evaluated to something other than a natural.
    #[error("recursion on non-numeric value {found}")]
    NotANumber { found: String },
}
