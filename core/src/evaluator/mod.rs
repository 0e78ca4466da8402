//! The fair concurrent evaluator.
//!
//! The evaluator maps a closed, checked expression to an eventual
//! [`Value`]. Truth is termination: a logic expression that holds
//! completes with [`Value::True`], and one that does not hold **never
//! completes**. Divergence is the designed representation of falsity, not
//! an error, so nothing here converts it into one.
//!
//! ## Design principles
//!
//! - **Divergence is containment-checked**: a sub-expression that was
//!   proven unnecessary (an unprojected pair side, an unused call-by-name
//!   argument) is never evaluated at all.
//! - **Cancellation is structural**: every concurrent construct owns the
//!   branches it forks. Dropping the future returned by [`eval`] drops the
//!   whole tree of branches and aborts every task the quantifier searches
//!   spawned, transitively. There is no detached work to leak.
//! - **Fairness**: the quantifier search advances one candidate per tick
//!   while earlier candidates keep running, so every natural is eventually
//!   attempted and any true witness is found in finite time.
//!
//! ## Budgets
//!
//! Callers decide how long "never" is allowed to take. [`eval_within`]
//! wraps evaluation in a deadline and reports an elapsed budget as
//! [`Outcome::Undecided`], distinct from every hard error: an undecided
//! computation means "false or undefined", exactly as the language defines
//! it.
//!
//! ## Example
//!
//! ```ignore
//! use dovetail_core::{ast::Expr, evaluator, values::Env};
//! use std::time::Duration;
//!
//! let four = Expr::the("n", Expr::equal(Expr::nat_var("n"), Expr::num(4)));
//! let outcome = evaluator::eval_within(Duration::from_millis(250), &four, &Env::new()).await?;
//! ```

mod error;
mod eval;
mod search;


pub use error::EvalError;

use crate::ast::Expr;
use crate::values::{Env, Value};
use std::sync::Arc;
use std::time::Duration;

/// Evaluation options.
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// Pause between dovetailing rounds of a quantifier search. Each tick
    /// without a completed candidate admits the next natural into the
    /// search.
    ///
    /// Default: 1ms
    pub tick: Duration,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(1),
        }
    }
}

/// The result of evaluating under a budget.
///
/// `Undecided` is not an error: it is the operational reading of "false or
/// undefined" for a computation that out-lived its budget.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Evaluation completed with a value.
    Resolved(Value),
    /// The budget elapsed first; the computation was cancelled.
    Undecided,
}

/// Evaluate a closed expression with default options.
///
/// The returned future completes when the expression does — possibly never.
/// Dropping it cancels every branch and background task the evaluation
/// spawned. The behavior on an expression with free variables not covered
/// by `env` is an [`EvalError::UnboundVariable`] at the moment the variable
/// is reached.
pub async fn eval(expr: &Arc<Expr>, env: &Env) -> Result<Value, EvalError> {
    eval_with_options(expr, env, &EvalOptions::default()).await
}

/// Evaluate a closed expression with explicit options.
pub async fn eval_with_options(
    expr: &Arc<Expr>,
    env: &Env,
    options: &EvalOptions,
) -> Result<Value, EvalError> {
    eval::Machine::new(env.clone(), options.clone())
        .run(Arc::clone(expr))
        .await
}

/// Evaluate under a wall-clock budget.
///
/// An elapsed budget yields [`Outcome::Undecided`] and tears down the
/// computation; hard errors pass through unchanged.
pub async fn eval_within(
    budget: Duration,
    expr: &Arc<Expr>,
    env: &Env,
) -> Result<Outcome, EvalError> {
    eval_within_options(budget, expr, env, &EvalOptions::default()).await
}

/// [`eval_within`] with explicit options.
pub async fn eval_within_options(
    budget: Duration,
    expr: &Arc<Expr>,
    env: &Env,
    options: &EvalOptions,
) -> Result<Outcome, EvalError> {
    match tokio::time::timeout(budget, eval_with_options(expr, env, options)).await {
        Ok(Ok(value)) => Ok(Outcome::Resolved(value)),
        Ok(Err(error)) => Err(error),
        Err(_elapsed) => Ok(Outcome::Undecided),
    }
}
