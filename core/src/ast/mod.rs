//! Expression trees.
//!
//! An [`Expr`] is an immutable value tree. Sub-trees are shared through
//! `Arc`, never mutated in place: substitution and recursion unfolding build
//! new nodes around existing handles, and the evaluator clones handles into
//! every concurrent branch it forks. Construction goes through the
//! `Arc`-returning helpers below, which are the programmatic equivalent of a
//! front-end parser.

mod subst;

#[cfg(test)]
mod subst_test;

pub use subst::{free_variables, substitute};

use core::fmt;
use ecow::EcoString;
use std::sync::Arc;

/// Arithmetic operators over naturals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Mul,
}

/// Comparison relations over naturals.
///
/// A relation that holds evaluates to the logic value; a relation that does
/// not hold is observed as divergence, never as a false value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Gt,
    Lt,
    Eq,
    Neq,
    Gte,
    Lte,
}

/// The value category a variable ranges over, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Logic,
    Nat,
    Pair,
    Lambda,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Logic => write!(f, "Logic"),
            Kind::Nat => write!(f, "Nat"),
            Kind::Pair => write!(f, "Pair"),
            Kind::Lambda => write!(f, "Lambda"),
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The logic constant that terminates immediately.
    Truth,
    /// The logic constant that never terminates.
    Falsity,
    And {
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
    Or {
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
    /// A natural-number literal.
    Num(u64),
    Arith {
        op: ArithOp,
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
    Compare {
        op: Relation,
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
    /// A variable, resolved against the evaluation environment. Variables
    /// are monomorphic: the kind is part of the node.
    Var {
        name: EcoString,
        kind: Kind,
    },
    /// `exists var. body` — binds `var` as a natural inside `body`.
    Exists {
        var: EcoString,
        body: Arc<Expr>,
    },
    /// `the var. body` — the natural for which `body` holds. Binds `var` as
    /// a natural inside `body`.
    The {
        var: EcoString,
        body: Arc<Expr>,
    },
    Pair {
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
    First(Arc<Expr>),
    Second(Arc<Expr>),
    /// A function into `Logic`; the body is not evaluated until application.
    Lambda {
        param: EcoString,
        body: Arc<Expr>,
    },
    Apply {
        func: Arc<Expr>,
        arg: Arc<Expr>,
    },
    /// Primitive recursion: `input = 0` yields `base`; otherwise `step` with
    /// `num_var` bound to `input - 1` and `acc_var` bound to the recursive
    /// unfolding.
    Rec {
        input: Arc<Expr>,
        base: Arc<Expr>,
        num_var: EcoString,
        acc_var: EcoString,
        step: Arc<Expr>,
    },
}

impl Expr {
    pub fn truth() -> Arc<Expr> {
        Arc::new(Expr::Truth)
    }

    pub fn falsity() -> Arc<Expr> {
        Arc::new(Expr::Falsity)
    }

    pub fn and(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::And { left, right })
    }

    pub fn or(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Or { left, right })
    }

    pub fn num(value: u64) -> Arc<Expr> {
        Arc::new(Expr::Num(value))
    }

    pub fn arith(op: ArithOp, left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Arith { op, left, right })
    }

    pub fn add(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::arith(ArithOp::Add, left, right)
    }

    pub fn mul(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::arith(ArithOp::Mul, left, right)
    }

    pub fn compare(op: Relation, left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Compare { op, left, right })
    }

    pub fn equal(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::compare(Relation::Eq, left, right)
    }

    pub fn not_equal(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::compare(Relation::Neq, left, right)
    }

    pub fn greater(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::compare(Relation::Gt, left, right)
    }

    pub fn less(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::compare(Relation::Lt, left, right)
    }

    pub fn greater_or_equal(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::compare(Relation::Gte, left, right)
    }

    pub fn less_or_equal(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Expr::compare(Relation::Lte, left, right)
    }

    pub fn var(name: impl Into<EcoString>, kind: Kind) -> Arc<Expr> {
        Arc::new(Expr::Var {
            name: name.into(),
            kind,
        })
    }

    pub fn nat_var(name: impl Into<EcoString>) -> Arc<Expr> {
        Expr::var(name, Kind::Nat)
    }

    pub fn logic_var(name: impl Into<EcoString>) -> Arc<Expr> {
        Expr::var(name, Kind::Logic)
    }

    pub fn exists(var: impl Into<EcoString>, body: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Exists {
            var: var.into(),
            body,
        })
    }

    pub fn the(var: impl Into<EcoString>, body: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::The {
            var: var.into(),
            body,
        })
    }

    pub fn pair(left: Arc<Expr>, right: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Pair { left, right })
    }

    pub fn first(pair: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::First(pair))
    }

    pub fn second(pair: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Second(pair))
    }

    pub fn lambda(param: impl Into<EcoString>, body: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Lambda {
            param: param.into(),
            body,
        })
    }

    pub fn apply(func: Arc<Expr>, arg: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Apply { func, arg })
    }

    pub fn rec(
        input: Arc<Expr>,
        base: Arc<Expr>,
        num_var: impl Into<EcoString>,
        acc_var: impl Into<EcoString>,
        step: Arc<Expr>,
    ) -> Arc<Expr> {
        Arc::new(Expr::Rec {
            input,
            base,
            num_var: num_var.into(),
            acc_var: acc_var.into(),
            step,
        })
    }

    /// Whether the expression has no free variables. The evaluator's
    /// contract only covers closed expressions.
    pub fn is_closed(&self) -> bool {
        free_variables(self).is_empty()
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithOp::Add => write!(f, "+"),
            ArithOp::Mul => write!(f, "*"),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Gt => write!(f, ">"),
            Relation::Lt => write!(f, "<"),
            Relation::Eq => write!(f, "=="),
            Relation::Neq => write!(f, "!="),
            Relation::Gte => write!(f, ">="),
            Relation::Lte => write!(f, "<="),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Truth => write!(f, "true"),
            Expr::Falsity => write!(f, "false"),
            Expr::And { left, right } => write!(f, "({} & {})", left, right),
            Expr::Or { left, right } => write!(f, "({} | {})", left, right),
            Expr::Num(value) => write!(f, "{}", value),
            Expr::Arith { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Compare { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Var { name, .. } => write!(f, "{}", name),
            Expr::Exists { var, body } => write!(f, "exists {}. {}", var, body),
            Expr::The { var, body } => write!(f, "the {}. {}", var, body),
            Expr::Pair { left, right } => write!(f, "({}, {})", left, right),
            Expr::First(pair) => write!(f, "fst {}", pair),
            Expr::Second(pair) => write!(f, "snd {}", pair),
            Expr::Lambda { param, body } => write!(f, "fun {} => {}", param, body),
            Expr::Apply { func, arg } => write!(f, "({} {})", func, arg),
            Expr::Rec {
                input,
                base,
                num_var,
                acc_var,
                step,
            } => write!(
                f,
                "rec({}; {}; {} {}. {})",
                input, base, num_var, acc_var, step
            ),
        }
    }
}
