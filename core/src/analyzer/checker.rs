//! The checking pass.
//!
//! One top-down-then-bottom-up walk over the expression. Binders check
//! their body in a clone of the context; the outer context is never
//! mutated by a nested check.

use super::TypeError;
use crate::ast::{ArithOp, Expr, Kind, Relation};
use crate::types::{Properties, Property, Type};
use ecow::EcoString;
use std::collections::HashMap;

/// A checking context: variable name to declared type.
#[derive(Debug, Clone, Default)]
pub struct Context {
    vars: HashMap<EcoString, Type>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<EcoString>, ty: Type) {
        self.vars.insert(name.into(), ty);
    }

    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.vars.get(name)
    }

    /// A clone with one extra binding, for checking under a binder.
    fn extended(&self, name: &EcoString, ty: Type) -> Context {
        let mut inner = self.clone();
        inner.bind(name.clone(), ty);
        inner
    }
}

impl FromIterator<(EcoString, Type)> for Context {
    fn from_iter<I: IntoIterator<Item = (EcoString, Type)>>(iter: I) -> Self {
        Context {
            vars: iter.into_iter().collect(),
        }
    }
}

/// Assign a type to `expr` in `context`, or explain why none exists.
pub fn check(expr: &Expr, context: &Context) -> Result<Type, TypeError> {
    match expr {
        Expr::Truth | Expr::Falsity => Ok(Type::Logic),

        Expr::And { left, right } | Expr::Or { left, right } => {
            expect_logic(check(left, context)?, "logical operand")?;
            expect_logic(check(right, context)?, "logical operand")?;
            Ok(Type::Logic)
        }

        Expr::Num(_) => Ok(Type::Nat),

        Expr::Arith { op, left, right } => {
            let op_name = arith_name(*op);
            require(&check(left, context)?, Property::Arithmetic, op_name)?;
            require(&check(right, context)?, Property::Arithmetic, op_name)?;
            Ok(Type::Nat)
        }

        Expr::Compare { op, left, right } => {
            let (property, op_name) = relation_requirement(*op);
            require(&check(left, context)?, property, op_name)?;
            require(&check(right, context)?, property, op_name)?;
            Ok(Type::Logic)
        }

        Expr::Var { name, kind } => {
            let ty = context
                .lookup(name)
                .ok_or_else(|| TypeError::UnboundVariable { name: name.clone() })?;
            if !category_matches(ty, *kind) {
                return Err(TypeError::KindMismatch {
                    name: name.clone(),
                    declared: ty.clone(),
                    used: *kind,
                });
            }
            Ok(ty.clone())
        }

        Expr::Exists { var, body } => {
            // Quantification is a search; only an overt type supports one
            // that terminates on true. Naturals are the only such type here.
            let bound = Type::Nat;
            require(&bound, Property::Overt, "exists")?;
            let inner = context.extended(var, bound);
            expect_logic(check(body, &inner)?, "quantifier body")?;
            Ok(Type::Logic)
        }

        Expr::The { var, body } => {
            // Description only ever binds a natural; the node fixes that by
            // construction, so no category check is needed here.
            let inner = context.extended(var, Type::Nat);
            expect_logic(check(body, &inner)?, "description body")?;
            Ok(Type::Nat)
        }

        Expr::Pair { left, right } => Ok(Type::Pair(
            Box::new(check(left, context)?),
            Box::new(check(right, context)?),
        )),

        Expr::First(pair) => match check(pair, context)? {
            Type::Pair(left, _) => Ok(*left),
            Type::Unknown(_) => Ok(Type::Unknown(Properties::empty())),
            found => Err(TypeError::NotAPair { found }),
        },

        Expr::Second(pair) => match check(pair, context)? {
            Type::Pair(_, right) => Ok(*right),
            Type::Unknown(_) => Ok(Type::Unknown(Properties::empty())),
            found => Err(TypeError::NotAPair { found }),
        },

        Expr::Lambda { param, body } => {
            let domain = infer_param_type(body, param)?;
            let inner = context.extended(param, domain.clone());
            expect_logic(check(body, &inner)?, "lambda body")?;
            Ok(Type::Lambda(Box::new(domain)))
        }

        Expr::Apply { func, arg } => {
            let arg_ty = check(arg, context)?;
            match check(func, context)? {
                Type::Lambda(domain) => {
                    if !compatible(&arg_ty, &domain) {
                        return Err(TypeError::Mismatch {
                            expected: *domain,
                            found: arg_ty,
                            context: "function argument",
                        });
                    }
                    Ok(Type::Logic)
                }
                Type::Unknown(_) => Ok(Type::Logic),
                found => Err(TypeError::NotALambda { found }),
            }
        }

        Expr::Rec {
            input,
            base,
            num_var,
            acc_var,
            step,
        } => {
            let input_ty = check(input, context)?;
            if !compatible(&input_ty, &Type::Nat) {
                return Err(TypeError::Mismatch {
                    expected: Type::Nat,
                    found: input_ty,
                    context: "recursion input",
                });
            }
            let result_ty = check(base, context)?;
            let mut inner = context.extended(num_var, Type::Nat);
            inner.bind(acc_var.clone(), result_ty.clone());
            let step_ty = check(step, &inner)?;
            if !compatible(&step_ty, &result_ty) {
                return Err(TypeError::Mismatch {
                    expected: result_ty,
                    found: step_ty,
                    context: "recursion step",
                });
            }
            Ok(result_ty)
        }
    }
}

fn arith_name(op: ArithOp) -> &'static str {
    match op {
        ArithOp::Add => "+",
        ArithOp::Mul => "*",
    }
}

/// Which property each relation demands of its operands.
fn relation_requirement(op: Relation) -> (Property, &'static str) {
    match op {
        Relation::Eq => (Property::Discrete, "=="),
        Relation::Neq => (Property::Hausdorff, "!="),
        Relation::Gt => (Property::StrictOrder, ">"),
        Relation::Lt => (Property::StrictOrder, "<"),
        Relation::Gte => (Property::LooseOrder, ">="),
        Relation::Lte => (Property::LooseOrder, "<="),
    }
}

fn require(ty: &Type, property: Property, op: &'static str) -> Result<(), TypeError> {
    if ty.has(property) {
        Ok(())
    } else {
        Err(TypeError::MissingProperty {
            op,
            property,
            ty: ty.clone(),
        })
    }
}

fn expect_logic(ty: Type, context: &'static str) -> Result<(), TypeError> {
    if compatible(&ty, &Type::Logic) {
        Ok(())
    } else {
        Err(TypeError::Mismatch {
            expected: Type::Logic,
            found: ty,
            context,
        })
    }
}

/// Whether a variable's declared type fits the category its occurrence is
/// tagged with. `Unknown` fits any category.
fn category_matches(ty: &Type, kind: Kind) -> bool {
    matches!(
        (ty, kind),
        (Type::Nat, Kind::Nat)
            | (Type::Logic, Kind::Logic)
            | (Type::Pair(..), Kind::Pair)
            | (Type::Lambda(..), Kind::Lambda)
            | (Type::Unknown(_), _)
    )
}

/// Structural compatibility. An `Unknown` is compatible with any type that
/// possesses its promised properties; two `Unknown`s are always compatible.
fn compatible(found: &Type, expected: &Type) -> bool {
    match (found, expected) {
        (Type::Unknown(_), Type::Unknown(_)) => true,
        (ty, Type::Unknown(props)) | (Type::Unknown(props), ty) => {
            ty.properties().contains(*props)
        }
        (Type::Pair(a1, a2), Type::Pair(b1, b2)) => compatible(a1, b1) && compatible(a2, b2),
        (Type::Lambda(a), Type::Lambda(b)) => compatible(a, b),
        (a, b) => a == b,
    }
}

/// Infer a lambda parameter's type from the categories its occurrences are
/// tagged with. Variables are monomorphic, so every occurrence must agree;
/// a parameter with no occurrence stays unconstrained.
fn infer_param_type(body: &Expr, param: &EcoString) -> Result<Type, TypeError> {
    let mut found: Option<Kind> = None;
    occurrence_kind(body, param, &mut found)?;
    Ok(match found {
        None => Type::Unknown(Properties::empty()),
        Some(Kind::Nat) => Type::Nat,
        Some(Kind::Logic) => Type::Logic,
        Some(Kind::Pair) => Type::Pair(
            Box::new(Type::Unknown(Properties::empty())),
            Box::new(Type::Unknown(Properties::empty())),
        ),
        Some(Kind::Lambda) => Type::Lambda(Box::new(Type::Unknown(Properties::empty()))),
    })
}

fn occurrence_kind(
    expr: &Expr,
    param: &EcoString,
    found: &mut Option<Kind>,
) -> Result<(), TypeError> {
    match expr {
        Expr::Var { name, kind } if name == param => match *found {
            None => {
                *found = Some(*kind);
                Ok(())
            }
            Some(first) if first == *kind => Ok(()),
            Some(first) => Err(TypeError::MixedKinds {
                name: param.clone(),
                first,
                second: *kind,
            }),
        },
        Expr::Truth | Expr::Falsity | Expr::Num(_) | Expr::Var { .. } => Ok(()),
        Expr::And { left, right }
        | Expr::Or { left, right }
        | Expr::Arith { left, right, .. }
        | Expr::Compare { left, right, .. }
        | Expr::Pair { left, right }
        | Expr::Apply {
            func: left,
            arg: right,
        } => {
            occurrence_kind(left, param, found)?;
            occurrence_kind(right, param, found)
        }
        Expr::First(pair) | Expr::Second(pair) => occurrence_kind(pair, param, found),
        // A shadowing binder hides the parameter, same rule as substitution.
        Expr::Exists { var, body } | Expr::The { var, body } if var != param => {
            occurrence_kind(body, param, found)
        }
        Expr::Exists { .. } | Expr::The { .. } => Ok(()),
        Expr::Lambda { param: p, body } if p != param => occurrence_kind(body, param, found),
        Expr::Lambda { .. } => Ok(()),
        Expr::Rec {
            num_var, acc_var, ..
        } if num_var == param || acc_var == param => Ok(()),
        Expr::Rec {
            input, base, step, ..
        } => {
            occurrence_kind(input, param, found)?;
            occurrence_kind(base, param, found)?;
            occurrence_kind(step, param, found)
        }
    }
}
