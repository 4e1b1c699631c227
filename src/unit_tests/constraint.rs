use super::*;

use crate::networks::NetworkType;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

fn vars(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn equal_to_rejects_c1_greater_than_n() {
    let err = initial_boundary(&vars(&["a", "b"]), ConstraintType::EqualTo, Some(3), None, false).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn clamp_rejects_c1_greater_than_c2() {
    let err = initial_boundary(&vars(&["a", "b", "c"]), ConstraintType::Clamp, Some(2), Some(1), false).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn one_hot_boundary_has_a_single_always_one_at_the_end() {
    let (left, right) = initial_boundary(&vars(&["a", "b", "c"]), ConstraintType::OneHot, None, None, false).unwrap();
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
    assert!(left.iter().all(|n| n.attribute == NodeAttribute::ZeroOrOne));
    assert_eq!(right[0].attribute, NodeAttribute::AlwaysZero);
    assert_eq!(right[1].attribute, NodeAttribute::AlwaysZero);
    assert_eq!(right[2].attribute, NodeAttribute::AlwaysOne);
}

#[test]
fn padding_prepends_always_zero_nodes_up_to_the_next_power_of_two() {
    let (left, right) = initial_boundary(&vars(&["a", "b", "c"]), ConstraintType::OneHot, None, None, true).unwrap();
    assert_eq!(left.len(), 4);
    assert_eq!(right.len(), 4);
    assert_eq!(left[0].name, "L0");
    assert_eq!(left[0].attribute, NodeAttribute::AlwaysZero);
    assert_eq!(left[1].name, "a");
    assert_eq!(right[0].name, "R0");
    assert_eq!(right[0].attribute, NodeAttribute::AlwaysZero);
}

#[test]
fn divide_and_conquer_rejects_inequality_constraints() {
    let err = build_switches(
        &vars(&["a", "b", "c"]),
        ConstraintType::LessEqual,
        NetworkType::DivideAndConquer,
        Some(1),
        None,
        None,
        false,
        Some("aux"),
    )
    .unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn build_switches_one_hot_via_naive_matches_brute_force_optimum() {
    let variables = vars(&["a", "b", "c"]);
    let switches = build_switches(
        &variables,
        ConstraintType::OneHot,
        NetworkType::Naive,
        None,
        None,
        None,
        false,
        Some("aux"),
    )
    .unwrap();
    let qubo = switches_to_qubo(&switches);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = variables.iter().filter(|v| assignment[*v]).count();
    assert_eq!(ones, 1);
}

#[test]
fn user_variable_names_survive_prefixing() {
    let variables = vars(&["a", "b", "c"]);
    let switches = build_switches(
        &variables,
        ConstraintType::OneHot,
        NetworkType::Naive,
        None,
        None,
        None,
        false,
        Some("C0"),
    )
    .unwrap();
    let qubo = switches_to_qubo(&switches);
    for v in &variables {
        assert!(qubo.variables().contains(v));
    }
}
