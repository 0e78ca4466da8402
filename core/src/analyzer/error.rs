//! Checking errors.
//!
//! Every variant names the offending construct; none of these can occur
//! during evaluation of an expression that checked cleanly, with the one
//! documented exception of variables resolved only at runtime.

use crate::ast::Kind;
use crate::types::{Property, Type};
use ecow::EcoString;
use thiserror::Error;

/// An expression failed to type-check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A variable name had no entry in the checking context.
    #[error("unbound variable '{name}'")]
    UnboundVariable { name: EcoString },

    /// A variable's declared context type disagrees with the category its
    /// occurrence is tagged with.
    #[error("variable '{name}' has type {declared} but is used as {used}")]
    KindMismatch {
        name: EcoString,
        declared: Type,
        used: Kind,
    },

    /// Occurrences of one lambda parameter carry different categories.
    #[error("parameter '{name}' is used both as {first} and as {second}")]
    MixedKinds {
        name: EcoString,
        first: Kind,
        second: Kind,
    },

    /// An operand's type lacks the structural property its operator needs.
    #[error("operator '{op}' needs a {property} operand, got {ty}")]
    MissingProperty {
        op: &'static str,
        property: Property,
        ty: Type,
    },

    /// Two types that had to agree did not.
    #[error("{context}: expected {expected}, found {found}")]
    Mismatch {
        expected: Type,
        found: Type,
        context: &'static str,
    },

    /// A projection was applied to something that is not a pair.
    #[error("projection applied to non-pair type {found}")]
    NotAPair { found: Type },

    /// The left side of an application is not a function.
    #[error("application of non-function type {found}")]
    NotALambda { found: Type },
}
