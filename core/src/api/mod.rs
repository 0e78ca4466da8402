//! The embedding surface.
//!
//! Hosts build expressions with the [`Expr`](crate::ast::Expr)
//! constructors, then use an [`Engine`] to check and evaluate them against
//! a named environment. Internal errors are converted to the public
//! [`Error`] at this boundary.

mod engine;
mod error;
mod options;

pub use engine::{Engine, EngineBuilder};
pub use error::Error;
pub use options::EngineOptions;
