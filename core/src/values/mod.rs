//! Runtime values and evaluation environments.
//!
//! A completed evaluation yields a [`Value`]. There is no false value
//! anywhere in the model: an expression whose logical content is false never
//! completes, so `True` is the only logic value a caller can observe.

use crate::ast::Expr;
use crate::types::{Properties, Type};
use core::fmt;
use ecow::EcoString;
use std::collections::HashMap;
use std::sync::Arc;

/// The result of a completed evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The sole logic value.
    True,
    /// A natural number.
    Nat(u64),
    /// A pair of suspended computations. Neither side has been evaluated;
    /// projection forces exactly the side it asks for.
    Pair(Thunk, Thunk),
    /// A function value. Application substitutes the argument expression
    /// into the body rather than passing an evaluated value, so the body is
    /// kept as an expression.
    Closure { param: EcoString, body: Arc<Expr> },
}

impl Value {
    pub fn as_nat(&self) -> Option<u64> {
        match self {
            Value::Nat(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::True)
    }

    /// The type a checker would assign to this value. Suspended pair sides
    /// and closure domains are unevaluated, so they type as unconstrained
    /// unknowns.
    pub fn ty(&self) -> Type {
        match self {
            Value::True => Type::Logic,
            Value::Nat(_) => Type::Nat,
            Value::Pair(..) => Type::Pair(
                Box::new(Type::Unknown(Properties::empty())),
                Box::new(Type::Unknown(Properties::empty())),
            ),
            Value::Closure { .. } => Type::Lambda(Box::new(Type::Unknown(Properties::empty()))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::True => write!(f, "true"),
            Value::Nat(n) => write!(f, "{}", n),
            Value::Pair(left, right) => write!(f, "({}, {})", left.expr(), right.expr()),
            Value::Closure { param, body } => write!(f, "fun {} => {}", param, body),
        }
    }
}

/// A suspended computation: an expression together with the environment
/// snapshot it will be evaluated in.
#[derive(Debug, Clone, PartialEq)]
pub struct Thunk {
    pub(crate) expr: Arc<Expr>,
    pub(crate) env: Env,
}

impl Thunk {
    pub(crate) fn new(expr: Arc<Expr>, env: Env) -> Self {
        Self { expr, env }
    }

    /// The suspended expression, for display and diagnostics.
    pub fn expr(&self) -> &Arc<Expr> {
        &self.expr
    }
}

/// An immutable variable environment.
///
/// Cloning is cheap (the map is shared). No environment is ever mutated
/// after a concurrent branch starts from it; extension builds a new
/// environment wholesale, which is why branches need no locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Env {
    vars: Arc<HashMap<EcoString, Value>>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment with `name` bound to `value`, leaving `self`
    /// untouched.
    pub fn bind(&self, name: impl Into<EcoString>, value: Value) -> Env {
        let mut vars = (*self.vars).clone();
        vars.insert(name.into(), value);
        Env {
            vars: Arc::new(vars),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &EcoString> {
        self.vars.keys()
    }

    /// Iterate over the bindings, for deriving a type-checking context.
    pub fn bindings(&self) -> impl Iterator<Item = (&EcoString, &Value)> {
        self.vars.iter()
    }
}

impl FromIterator<(EcoString, Value)> for Env {
    fn from_iter<I: IntoIterator<Item = (EcoString, Value)>>(iter: I) -> Self {
        Env {
            vars: Arc::new(iter.into_iter().collect()),
        }
    }
}
