//! Unit tests for substitution and free-variable collection.

use super::{Expr, free_variables, substitute};
use pretty_assertions::assert_eq;

#[test]
fn replaces_matching_variable() {
    let expr = Expr::nat_var("x");
    let result = substitute(&expr, "x", &Expr::num(7));
    assert_eq!(result, Expr::num(7));
}

#[test]
fn leaves_other_variables_alone() {
    let expr = Expr::add(Expr::nat_var("x"), Expr::nat_var("y"));
    let result = substitute(&expr, "x", &Expr::num(7));
    assert_eq!(result, Expr::add(Expr::num(7), Expr::nat_var("y")));
}

#[test]
fn shadowed_by_exists() {
    let expr = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::num(3)));
    let result = substitute(&expr, "n", &Expr::num(7));
    assert_eq!(result, expr);
}

#[test]
fn substitutes_under_non_shadowing_exists() {
    let expr = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::nat_var("m")));
    let result = substitute(&expr, "m", &Expr::num(7));
    assert_eq!(
        result,
        Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::num(7)))
    );
}

#[test]
fn shadowed_by_lambda_parameter() {
    let expr = Expr::lambda("x", Expr::equal(Expr::nat_var("x"), Expr::num(0)));
    let result = substitute(&expr, "x", &Expr::num(9));
    assert_eq!(result, expr);
}

#[test]
fn recursor_bound_names_shadow_the_whole_node() {
    let rec = Expr::rec(
        Expr::nat_var("k"),
        Expr::num(0),
        "k",
        "acc",
        Expr::add(Expr::nat_var("k"), Expr::nat_var("acc")),
    );
    // "k" is one of the recursor's bound names, so nothing changes.
    assert_eq!(substitute(&rec, "k", &Expr::num(5)), rec);
    assert_eq!(substitute(&rec, "acc", &Expr::num(5)), rec);
}

#[test]
fn recursor_substitutes_free_names_everywhere() {
    let rec = Expr::rec(
        Expr::nat_var("m"),
        Expr::nat_var("m"),
        "k",
        "acc",
        Expr::add(Expr::nat_var("m"), Expr::nat_var("acc")),
    );
    let result = substitute(&rec, "m", &Expr::num(4));
    assert_eq!(
        result,
        Expr::rec(
            Expr::num(4),
            Expr::num(4),
            "k",
            "acc",
            Expr::add(Expr::num(4), Expr::nat_var("acc")),
        )
    );
}

#[test]
fn unchanged_subtrees_are_shared_not_rebuilt() {
    let body = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::num(3)));
    let result = substitute(&body, "n", &Expr::num(7));
    assert!(std::sync::Arc::ptr_eq(&body, &result));
}

#[test]
fn composition_commutes_when_names_are_independent() {
    // substitute(substitute(e, x, e1), y, e2)
    //   == substitute(e, x, substitute(e1, y, e2))
    // holds when y is not free in e and no binder interferes.
    let e = Expr::and(Expr::logic_var("x"), Expr::truth());
    let e1 = Expr::equal(Expr::nat_var("y"), Expr::num(1));
    let e2 = Expr::num(1);

    let lhs = substitute(&substitute(&e, "x", &e1), "y", &e2);
    let rhs = substitute(&e, "x", &substitute(&e1, "y", &e2));
    assert_eq!(lhs, rhs);
}

// ============================================================================
// Free variables
// ============================================================================

#[test]
fn constants_are_closed() {
    assert!(Expr::truth().is_closed());
    assert!(Expr::num(3).is_closed());
}

#[test]
fn variable_is_free() {
    let free = free_variables(&Expr::nat_var("x"));
    assert_eq!(free.len(), 1);
    assert!(free.contains("x"));
}

#[test]
fn binder_removes_its_name() {
    let expr = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::nat_var("m")));
    let free = free_variables(&expr);
    assert_eq!(free.len(), 1);
    assert!(free.contains("m"));
}

#[test]
fn recursor_names_are_bound_across_the_node() {
    let rec = Expr::rec(
        Expr::nat_var("k"),
        Expr::nat_var("base"),
        "k",
        "acc",
        Expr::add(Expr::nat_var("acc"), Expr::nat_var("other")),
    );
    let free = free_variables(&rec);
    // "k" occurs in the input position but is one of the bound names, so the
    // textual shadowing rule hides it; only the genuinely free names remain.
    assert!(free.contains("base"));
    assert!(free.contains("other"));
    assert!(!free.contains("k"));
    assert!(!free.contains("acc"));
}

#[test]
fn closed_quantified_expression() {
    let expr = Expr::exists("n", Expr::equal(Expr::nat_var("n"), Expr::num(4)));
    assert!(expr.is_closed());
}
