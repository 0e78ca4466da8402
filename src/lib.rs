//! Dovetail — a tiny typed language where truth is termination
//!
//! # Overview
//!
//! Dovetail is an expression language of logic values, natural numbers,
//! pairs, restricted lambdas, and primitive recursion, with one unusual
//! rule: a closed logic expression is "true" if its evaluation terminates
//! and "false or undefined" if it never does. Divergence is not a failure
//! mode, it is the meaning of falsity.
//!
//! That rule shapes the whole evaluator:
//!
//! - `exists n. p(n)` is a fair, unbounded, concurrent search over the
//!   naturals that terminates exactly when some witness makes `p` hold
//! - `the n. p(n)` is the same search, returning the witness it found
//! - `a | b` races its operands and cancels the loser
//! - pairs suspend their sides; projection forces only the side it needs
//! - application substitutes the argument expression unevaluated, so an
//!   unused diverging argument is harmless (call by name)
//!
//! # Quick Start
//!
//! ```ignore
//! use dovetail::{Engine, Expr, Outcome, Value};
//! use std::time::Duration;
//!
//! let engine = Engine::builder().variable("k", Value::Nat(4)).build();
//!
//! // the n. n == k
//! let expr = Expr::the("n", Expr::equal(Expr::nat_var("n"), Expr::nat_var("k")));
//! engine.check(&expr)?;
//!
//! // The caller owns the budget: an undecided outcome is how a false or
//! // undefined expression reads from the outside.
//! match engine.evaluate_within(Duration::from_millis(250), &expr).await? {
//!     Outcome::Resolved(value) => assert_eq!(value, Value::Nat(4)),
//!     Outcome::Undecided => unreachable!("a witness exists"),
//! }
//! ```
//!
//! The full module surface lives in [`dovetail_core`] and is re-exported
//! here.

pub use dovetail_core::{analyzer, api, ast, evaluator, types, values};

pub use dovetail_core::api::{Engine, EngineBuilder, EngineOptions, Error};
pub use dovetail_core::ast::Expr;
pub use dovetail_core::evaluator::{EvalOptions, Outcome};
pub use dovetail_core::types::Type;
pub use dovetail_core::values::{Env, Value};
