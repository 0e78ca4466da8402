//! Node-by-node evaluation semantics.

use super::{EvalError, EvalOptions, search};
use crate::ast::{ArithOp, Expr, Relation, substitute};
use crate::values::{Env, Thunk, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// The boxed future shape evaluation recurses through. `Send + 'static` so
/// that branches can be handed to spawned tasks.
pub(crate) type EvalFuture = Pin<Box<dyn Future<Output = Result<Value, EvalError>> + Send>>;

/// One evaluation branch: an immutable environment snapshot plus the shared
/// options. Forking a concurrent branch clones the whole machine; nothing
/// in it is ever mutated afterwards.
#[derive(Clone)]
pub(crate) struct Machine {
    pub(crate) env: Env,
    pub(crate) options: Arc<EvalOptions>,
}

impl Machine {
    pub(crate) fn new(env: Env, options: EvalOptions) -> Self {
        Self {
            env,
            options: Arc::new(options),
        }
    }

    /// Evaluate an expression to a value. Boxed because evaluation is
    /// recursive and branches must be nameable for spawning.
    pub(crate) fn run(self, expr: Arc<Expr>) -> EvalFuture {
        Box::pin(self.eval_expr(expr))
    }

    async fn eval_expr(self, expr: Arc<Expr>) -> Result<Value, EvalError> {
        match &*expr {
            Expr::Truth => Ok(Value::True),

            // Falsity is silence: the node never completes, and only
            // cancellation from above can stop it.
            Expr::Falsity => diverge().await,

            Expr::And { left, right } => {
                // Both sides must complete; a hard error on either side
                // surfaces at once and cancels its sibling.
                tokio::try_join!(
                    self.clone().run(Arc::clone(left)),
                    self.clone().run(Arc::clone(right)),
                )?;
                Ok(Value::True)
            }

            // A race: the first side to complete wins and the loser is
            // dropped, which tears down everything it spawned.
            Expr::Or { left, right } => {
                tokio::select! {
                    result = self.clone().run(Arc::clone(left)) => result,
                    result = self.clone().run(Arc::clone(right)) => result,
                }
            }

            Expr::Num(n) => Ok(Value::Nat(*n)),

            Expr::Arith { op, left, right } => {
                let (left, right) = tokio::try_join!(
                    self.clone().run(Arc::clone(left)),
                    self.clone().run(Arc::clone(right)),
                )?;
                let (left, right) = (expect_nat(left)?, expect_nat(right)?);
                Ok(Value::Nat(match op {
                    ArithOp::Add => left.wrapping_add(right),
                    ArithOp::Mul => left.wrapping_mul(right),
                }))
            }

            Expr::Compare { op, left, right } => {
                let (left, right) = tokio::try_join!(
                    self.clone().run(Arc::clone(left)),
                    self.clone().run(Arc::clone(right)),
                )?;
                let (left, right) = (expect_nat(left)?, expect_nat(right)?);
                let holds = match op {
                    Relation::Gt => left > right,
                    Relation::Lt => left < right,
                    Relation::Eq => left == right,
                    Relation::Neq => left != right,
                    Relation::Gte => left >= right,
                    Relation::Lte => left <= right,
                };
                // A relation that does not hold is never observed.
                if holds { Ok(Value::True) } else { diverge().await }
            }

            Expr::Var { name, .. } => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() }),

            Expr::Exists { var, body } => {
                search::search(self, var.clone(), Arc::clone(body))
                    .await
                    .map(|_witness| Value::True)
            }

            Expr::The { var, body } => {
                search::search(self, var.clone(), Arc::clone(body))
                    .await
                    .map(Value::Nat)
            }

            // A pair completes immediately; its sides stay suspended until a
            // projection asks for one of them.
            Expr::Pair { left, right } => Ok(Value::Pair(
                Thunk::new(Arc::clone(left), self.env.clone()),
                Thunk::new(Arc::clone(right), self.env.clone()),
            )),

            Expr::First(pair) => match self.clone().run(Arc::clone(pair)).await? {
                Value::Pair(left, _) => self.force(left).await,
                other => Err(EvalError::NotAPair {
                    found: other.to_string(),
                }),
            },

            Expr::Second(pair) => match self.clone().run(Arc::clone(pair)).await? {
                Value::Pair(_, right) => self.force(right).await,
                other => Err(EvalError::NotAPair {
                    found: other.to_string(),
                }),
            },

            // No reduction under a binder.
            Expr::Lambda { param, body } => Ok(Value::Closure {
                param: param.clone(),
                body: Arc::clone(body),
            }),

            // Call by name: the argument expression is substituted into the
            // body unevaluated, so an unused diverging argument is harmless.
            Expr::Apply { func, arg } => match self.clone().run(Arc::clone(func)).await? {
                Value::Closure { param, body } => {
                    let body = substitute(&body, &param, arg);
                    self.run(body).await
                }
                other => Err(EvalError::NotAClosure {
                    found: other.to_string(),
                }),
            },

            // Call-by-name unfolding: the accumulator variable receives the
            // unfolded recursor as an expression, so a step that never uses
            // it never forces the recursion below it.
            Expr::Rec {
                input,
                base,
                num_var,
                acc_var,
                step,
            } => {
                let n = match self.clone().run(Arc::clone(input)).await? {
                    Value::Nat(n) => n,
                    other => {
                        return Err(EvalError::NotANumber {
                            found: other.to_string(),
                        });
                    }
                };
                if n == 0 {
                    self.run(Arc::clone(base)).await
                } else {
                    let pred = Expr::num(n - 1);
                    let unfolding = Arc::new(Expr::Rec {
                        input: pred.clone(),
                        base: Arc::clone(base),
                        num_var: num_var.clone(),
                        acc_var: acc_var.clone(),
                        step: Arc::clone(step),
                    });
                    let stepped = substitute(&substitute(step, num_var, &pred), acc_var, &unfolding);
                    self.run(stepped).await
                }
            }
        }
    }

    /// Force one side of a pair in the environment it was captured with.
    pub(crate) async fn force(&self, thunk: Thunk) -> Result<Value, EvalError> {
        Machine {
            env: thunk.env,
            options: Arc::clone(&self.options),
        }
        .run(thunk.expr)
        .await
    }
}

/// A computation that never completes: the runtime representation of a
/// false or undefined observation. Suspends without waking and is stopped
/// only by cancellation from above.
pub(crate) fn diverge<T>() -> impl Future<Output = T> {
    std::future::pending()
}

fn expect_nat(value: Value) -> Result<u64, EvalError> {
    match value {
        Value::Nat(n) => Ok(n),
        other => Err(EvalError::NotANumber {
            found: other.to_string(),
        }),
    }
}
