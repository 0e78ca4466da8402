//! Capture avoidance by textual shadowing.
//!
//! At a binder whose bound name equals the substituted name, the whole node
//! is returned untouched and no renaming is ever performed. This is sound
//! only while replacements are closed, or their free variables are disjoint
//! from every binder name in scope; the engine does not verify that, and
//! callers that substitute open expressions own the risk. All internal call
//! sites (quantifier witnesses, recursion unfolding, application) substitute
//! closed expressions.

use super::Expr;
use ecow::EcoString;
use std::collections::HashSet;
use std::sync::Arc;

/// Replace every free occurrence of `name` in `expr` by `replacement`.
///
/// The input tree is never mutated; untouched sub-trees are shared into the
/// result by handle. Referentially transparent, safe to call concurrently.
pub fn substitute(expr: &Arc<Expr>, name: &str, replacement: &Arc<Expr>) -> Arc<Expr> {
    match &**expr {
        Expr::Var { name: n, .. } if n == name => Arc::clone(replacement),
        Expr::Truth | Expr::Falsity | Expr::Num(_) | Expr::Var { .. } => Arc::clone(expr),
        Expr::And { left, right } => Arc::new(Expr::And {
            left: substitute(left, name, replacement),
            right: substitute(right, name, replacement),
        }),
        Expr::Or { left, right } => Arc::new(Expr::Or {
            left: substitute(left, name, replacement),
            right: substitute(right, name, replacement),
        }),
        Expr::Arith { op, left, right } => Arc::new(Expr::Arith {
            op: *op,
            left: substitute(left, name, replacement),
            right: substitute(right, name, replacement),
        }),
        Expr::Compare { op, left, right } => Arc::new(Expr::Compare {
            op: *op,
            left: substitute(left, name, replacement),
            right: substitute(right, name, replacement),
        }),
        Expr::Exists { var, .. } if var == name => Arc::clone(expr),
        Expr::Exists { var, body } => Arc::new(Expr::Exists {
            var: var.clone(),
            body: substitute(body, name, replacement),
        }),
        Expr::The { var, .. } if var == name => Arc::clone(expr),
        Expr::The { var, body } => Arc::new(Expr::The {
            var: var.clone(),
            body: substitute(body, name, replacement),
        }),
        Expr::Pair { left, right } => Arc::new(Expr::Pair {
            left: substitute(left, name, replacement),
            right: substitute(right, name, replacement),
        }),
        Expr::First(pair) => Arc::new(Expr::First(substitute(pair, name, replacement))),
        Expr::Second(pair) => Arc::new(Expr::Second(substitute(pair, name, replacement))),
        Expr::Lambda { param, .. } if param == name => Arc::clone(expr),
        Expr::Lambda { param, body } => Arc::new(Expr::Lambda {
            param: param.clone(),
            body: substitute(body, name, replacement),
        }),
        Expr::Apply { func, arg } => Arc::new(Expr::Apply {
            func: substitute(func, name, replacement),
            arg: substitute(arg, name, replacement),
        }),
        // Either bound name of the recursor shadows the whole node.
        Expr::Rec {
            num_var, acc_var, ..
        } if num_var == name || acc_var == name => Arc::clone(expr),
        Expr::Rec {
            input,
            base,
            num_var,
            acc_var,
            step,
        } => Arc::new(Expr::Rec {
            input: substitute(input, name, replacement),
            base: substitute(base, name, replacement),
            num_var: num_var.clone(),
            acc_var: acc_var.clone(),
            step: substitute(step, name, replacement),
        }),
    }
}

/// The set of free variable names in `expr`.
///
/// Post-order collection with bound names removed at each binder, mirroring
/// the shadowing rule of [`substitute`]: a recursor's bound names shadow the
/// node as a whole. Used for diagnostics and closedness checks, not by the
/// evaluator.
pub fn free_variables(expr: &Expr) -> HashSet<EcoString> {
    let mut free = HashSet::new();
    collect(expr, &mut free);
    free
}

fn collect(expr: &Expr, out: &mut HashSet<EcoString>) {
    match expr {
        Expr::Truth | Expr::Falsity | Expr::Num(_) => {}
        Expr::Var { name, .. } => {
            out.insert(name.clone());
        }
        Expr::And { left, right }
        | Expr::Or { left, right }
        | Expr::Arith { left, right, .. }
        | Expr::Compare { left, right, .. }
        | Expr::Pair { left, right } => {
            collect(left, out);
            collect(right, out);
        }
        Expr::First(pair) | Expr::Second(pair) => collect(pair, out),
        Expr::Exists { var, body } | Expr::The { var, body } => {
            let mut inner = HashSet::new();
            collect(body, &mut inner);
            inner.remove(var);
            out.extend(inner);
        }
        Expr::Lambda { param, body } => {
            let mut inner = HashSet::new();
            collect(body, &mut inner);
            inner.remove(param);
            out.extend(inner);
        }
        Expr::Apply { func, arg } => {
            collect(func, out);
            collect(arg, out);
        }
        Expr::Rec {
            input,
            base,
            num_var,
            acc_var,
            step,
        } => {
            let mut inner = HashSet::new();
            collect(input, &mut inner);
            collect(base, &mut inner);
            collect(step, &mut inner);
            inner.remove(num_var);
            inner.remove(acc_var);
            out.extend(inner);
        }
    }
}
