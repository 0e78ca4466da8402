//! Unit tests for the analyzer.

use super::{Context, TypeError, check};
use crate::ast::{Expr, Kind};
use crate::types::{Properties, Property, Type};
use pretty_assertions::assert_eq;

fn check_closed(expr: &Expr) -> Result<Type, TypeError> {
    check(expr, &Context::new())
}

// ============================================================================
// Constants and logical connectives
// ============================================================================

#[test]
fn constants() {
    assert_eq!(check_closed(&Expr::truth()), Ok(Type::Logic));
    assert_eq!(check_closed(&Expr::falsity()), Ok(Type::Logic));
    assert_eq!(check_closed(&Expr::num(42)), Ok(Type::Nat));
}

#[test]
fn conjunction_of_logic_operands() {
    let expr = Expr::and(Expr::truth(), Expr::or(Expr::falsity(), Expr::truth()));
    assert_eq!(check_closed(&expr), Ok(Type::Logic));
}

#[test]
fn conjunction_rejects_numeric_operand() {
    let expr = Expr::and(Expr::truth(), Expr::num(1));
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::Mismatch {
            expected: Type::Logic,
            found: Type::Nat,
            context: "logical operand",
        })
    );
}

// ============================================================================
// Arithmetic and relations
// ============================================================================

#[test]
fn arithmetic_over_naturals() {
    let expr = Expr::add(Expr::num(1), Expr::mul(Expr::num(2), Expr::num(3)));
    assert_eq!(check_closed(&expr), Ok(Type::Nat));
}

#[test]
fn arithmetic_rejects_logic_operand() {
    let expr = Expr::add(Expr::num(1), Expr::truth());
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::MissingProperty {
            op: "+",
            property: Property::Arithmetic,
            ty: Type::Logic,
        })
    );
}

#[test]
fn relations_yield_logic() {
    let expr = Expr::equal(Expr::num(1), Expr::num(2));
    assert_eq!(check_closed(&expr), Ok(Type::Logic));
}

#[test]
fn equality_needs_a_discrete_operand() {
    let expr = Expr::equal(Expr::truth(), Expr::truth());
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::MissingProperty {
            op: "==",
            property: Property::Discrete,
            ty: Type::Logic,
        })
    );
}

#[test]
fn strict_order_rejects_pairs() {
    let pair = Expr::pair(Expr::num(1), Expr::num(2));
    let expr = Expr::less(pair.clone(), pair);
    assert!(matches!(
        check_closed(&expr),
        Err(TypeError::MissingProperty {
            property: Property::StrictOrder,
            ..
        })
    ));
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn variable_resolves_through_context() {
    let mut context = Context::new();
    context.bind("n", Type::Nat);
    assert_eq!(check(&Expr::nat_var("n"), &context), Ok(Type::Nat));
}

#[test]
fn missing_variable_is_rejected() {
    assert_eq!(
        check_closed(&Expr::nat_var("n")),
        Err(TypeError::UnboundVariable { name: "n".into() })
    );
}

#[test]
fn variable_kind_must_match_context() {
    let mut context = Context::new();
    context.bind("n", Type::Logic);
    assert_eq!(
        check(&Expr::nat_var("n"), &context),
        Err(TypeError::KindMismatch {
            name: "n".into(),
            declared: Type::Logic,
            used: Kind::Nat,
        })
    );
}

// ============================================================================
// Quantifiers
// ============================================================================

#[test]
fn existential_over_naturals() {
    let expr = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::num(3)));
    assert_eq!(check_closed(&expr), Ok(Type::Logic));
}

#[test]
fn quantifier_binding_does_not_leak() {
    let context = Context::new();
    let expr = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::num(3)));
    check(&expr, &context).unwrap();
    // The bound name must not be visible outside the quantifier.
    assert_eq!(
        check(&Expr::nat_var("n"), &context),
        Err(TypeError::UnboundVariable { name: "n".into() })
    );
}

#[test]
fn quantifier_body_must_be_logic() {
    let expr = Expr::exists("n", Expr::nat_var("n"));
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::Mismatch {
            expected: Type::Logic,
            found: Type::Nat,
            context: "quantifier body",
        })
    );
}

#[test]
fn description_yields_a_natural() {
    let expr = Expr::the("n", Expr::equal(Expr::nat_var("n"), Expr::num(4)));
    assert_eq!(check_closed(&expr), Ok(Type::Nat));
}

// ============================================================================
// Pairs and projections
// ============================================================================

#[test]
fn pair_is_a_product() {
    let expr = Expr::pair(Expr::num(1), Expr::truth());
    assert_eq!(
        check_closed(&expr),
        Ok(Type::Pair(Box::new(Type::Nat), Box::new(Type::Logic)))
    );
}

#[test]
fn projections_extract_components() {
    let pair = Expr::pair(Expr::num(1), Expr::truth());
    assert_eq!(check_closed(&Expr::first(pair.clone())), Ok(Type::Nat));
    assert_eq!(check_closed(&Expr::second(pair)), Ok(Type::Logic));
}

#[test]
fn projection_rejects_non_pair() {
    assert_eq!(
        check_closed(&Expr::first(Expr::num(1))),
        Err(TypeError::NotAPair { found: Type::Nat })
    );
}

#[test]
fn projection_through_pair_variable() {
    let mut context = Context::new();
    context.bind("p", Type::Pair(Box::new(Type::Nat), Box::new(Type::Logic)));
    let expr = Expr::first(Expr::var("p", Kind::Pair));
    assert_eq!(check(&expr, &context), Ok(Type::Nat));
}

// ============================================================================
// Lambdas and application
// ============================================================================

#[test]
fn lambda_domain_is_inferred_from_occurrences() {
    let expr = Expr::lambda("x", Expr::equal(Expr::nat_var("x"), Expr::num(0)));
    assert_eq!(
        check_closed(&expr),
        Ok(Type::Lambda(Box::new(Type::Nat)))
    );
}

#[test]
fn lambda_with_unused_parameter_is_unconstrained() {
    let expr = Expr::lambda("x", Expr::truth());
    assert_eq!(
        check_closed(&expr),
        Ok(Type::Lambda(Box::new(Type::Unknown(Properties::empty()))))
    );
}

#[test]
fn lambda_codomain_is_restricted_to_logic() {
    let expr = Expr::lambda("x", Expr::num(1));
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::Mismatch {
            expected: Type::Logic,
            found: Type::Nat,
            context: "lambda body",
        })
    );
}

#[test]
fn mixed_parameter_kinds_are_rejected() {
    let body = Expr::and(
        Expr::logic_var("x"),
        Expr::equal(Expr::nat_var("x"), Expr::num(0)),
    );
    let expr = Expr::lambda("x", body);
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::MixedKinds {
            name: "x".into(),
            first: Kind::Logic,
            second: Kind::Nat,
        })
    );
}

#[test]
fn application_checks_argument_against_domain() {
    let lam = Expr::lambda("x", Expr::equal(Expr::nat_var("x"), Expr::num(0)));
    assert_eq!(
        check_closed(&Expr::apply(lam.clone(), Expr::num(3))),
        Ok(Type::Logic)
    );
    assert_eq!(
        check_closed(&Expr::apply(lam, Expr::truth())),
        Err(TypeError::Mismatch {
            expected: Type::Nat,
            found: Type::Logic,
            context: "function argument",
        })
    );
}

#[test]
fn application_rejects_non_function() {
    assert_eq!(
        check_closed(&Expr::apply(Expr::num(1), Expr::num(2))),
        Err(TypeError::NotALambda { found: Type::Nat })
    );
}

// ============================================================================
// Recursion
// ============================================================================

#[test]
fn recursion_over_naturals() {
    let expr = Expr::rec(
        Expr::num(3),
        Expr::num(0),
        "n",
        "acc",
        Expr::add(Expr::nat_var("acc"), Expr::num(1)),
    );
    assert_eq!(check_closed(&expr), Ok(Type::Nat));
}

#[test]
fn recursion_input_must_be_numeric() {
    let expr = Expr::rec(Expr::truth(), Expr::num(0), "n", "acc", Expr::num(1));
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::Mismatch {
            expected: Type::Nat,
            found: Type::Logic,
            context: "recursion input",
        })
    );
}

#[test]
fn recursion_step_must_match_base() {
    let expr = Expr::rec(Expr::num(3), Expr::num(0), "n", "acc", Expr::truth());
    assert_eq!(
        check_closed(&expr),
        Err(TypeError::Mismatch {
            expected: Type::Nat,
            found: Type::Logic,
            context: "recursion step",
        })
    );
}

#[test]
fn recursion_at_logic_type() {
    let expr = Expr::rec(
        Expr::num(2),
        Expr::truth(),
        "n",
        "acc",
        Expr::and(Expr::logic_var("acc"), Expr::truth()),
    );
    assert_eq!(check_closed(&expr), Ok(Type::Logic));
}
