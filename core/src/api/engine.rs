//! The embedding engine.
//!
//! An [`Engine`] ties together a global environment (variable name to
//! value) and default evaluation options, and runs the check-then-evaluate
//! pipeline over programmatically built expressions.

use super::{EngineOptions, Error};
use crate::analyzer::{self, Context};
use crate::ast::{Expr, free_variables};
use crate::evaluator::{self, Outcome};
use crate::types::Type;
use crate::values::{Env, Value};
use ecow::EcoString;
use std::sync::Arc;
use std::time::Duration;

/// A checking-and-evaluation engine over a fixed environment.
///
/// # Example
///
/// ```ignore
/// use dovetail_core::api::Engine;
/// use dovetail_core::ast::Expr;
/// use dovetail_core::values::Value;
/// use std::time::Duration;
///
/// let engine = Engine::builder().variable("k", Value::Nat(4)).build();
///
/// // the n. n == k
/// let expr = Expr::the("n", Expr::equal(Expr::nat_var("n"), Expr::nat_var("k")));
/// engine.check(&expr)?;
///
/// let outcome = engine.evaluate_within(Duration::from_millis(250), &expr).await?;
/// ```
pub struct Engine {
    environment: Env,
    options: EngineOptions,
}

impl Engine {
    /// An engine with an empty environment and default options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            environment: Env::new(),
            options,
        }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The engine's global environment.
    pub fn environment(&self) -> &Env {
        &self.environment
    }

    /// The engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Type-check `expr` against the engine environment.
    ///
    /// The checking context is derived from the environment values, so a
    /// variable is checked at the type of whatever value it is bound to.
    pub fn check(&self, expr: &Expr) -> Result<Type, Error> {
        let context: Context = self
            .environment
            .bindings()
            .map(|(name, value)| (name.clone(), value.ty()))
            .collect();
        analyzer::check(expr, &context).map_err(Error::from)
    }

    /// Evaluate `expr` in the engine environment.
    ///
    /// The returned future may never complete; dropping it cancels the
    /// whole computation. Expressions with free variables outside the
    /// environment are rejected before evaluation starts.
    pub async fn evaluate(&self, expr: &Arc<Expr>) -> Result<Value, Error> {
        self.ensure_covered(expr)?;
        evaluator::eval_with_options(expr, &self.environment, &self.options.default_eval_options)
            .await
            .map_err(Error::from)
    }

    /// Evaluate `expr` under a wall-clock budget.
    ///
    /// An elapsed budget is reported as [`Outcome::Undecided`], never as an
    /// error: it is the operational reading of "false or undefined".
    pub async fn evaluate_within(
        &self,
        budget: Duration,
        expr: &Arc<Expr>,
    ) -> Result<Outcome, Error> {
        self.ensure_covered(expr)?;
        evaluator::eval_within_options(
            budget,
            expr,
            &self.environment,
            &self.options.default_eval_options,
        )
        .await
        .map_err(Error::from)
    }

    /// Reject expressions the environment leaves open.
    fn ensure_covered(&self, expr: &Expr) -> Result<(), Error> {
        for name in free_variables(expr) {
            if self.environment.lookup(&name).is_none() {
                return Err(Error::OpenExpression { name });
            }
        }
        Ok(())
    }
}

/// Builder for [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    bindings: Vec<(EcoString, Value)>,
    options: EngineOptions,
}

impl EngineBuilder {
    /// Bind a global variable.
    pub fn variable(mut self, name: impl Into<EcoString>, value: Value) -> Self {
        self.bindings.push((name.into(), value));
        self
    }

    /// Replace the engine options.
    pub fn options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            environment: self.bindings.into_iter().collect(),
            options: self.options,
        }
    }
}
