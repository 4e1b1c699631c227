use super::*;

#[test]
fn new_qubo_is_empty() {
    let qubo: Qubo<i64> = Qubo::new();
    assert!(qubo.variables().is_empty());
    assert_eq!(*qubo.constant(), 0);
    assert_eq!(qubo.num_quadratic_terms(), 0);
}

#[test]
fn add_linear_accumulates() {
    let mut qubo: Qubo<i64> = Qubo::new();
    qubo.add_linear("a", 3);
    qubo.add_linear("a", -1);
    assert_eq!(qubo.linear_coeff("a"), 2);
    assert_eq!(qubo.linear_coeff("missing"), 0);
}

#[test]
fn add_quadratic_is_order_independent() {
    let mut qubo: Qubo<i64> = Qubo::new();
    qubo.add_quadratic("a", "b", 5);
    qubo.add_quadratic("b", "a", 1);
    assert_eq!(qubo.quadratic_coeff("a", "b"), 6);
    assert_eq!(qubo.quadratic_coeff("b", "a"), 6);
    assert_eq!(qubo.num_quadratic_terms(), 1);
}

#[test]
fn add_quadratic_self_pair_is_a_no_op() {
    let mut qubo: Qubo<i64> = Qubo::new();
    qubo.add_quadratic("a", "a", 9);
    assert_eq!(qubo.quadratic_coeff("a", "a"), 0);
    assert_eq!(qubo.num_quadratic_terms(), 0);
}

#[test]
fn merge_sums_matching_terms() {
    let mut a: Qubo<i64> = Qubo::new();
    a.add_linear("x", 1);
    a.add_quadratic("x", "y", 2);
    a.add_constant(3);

    let mut b: Qubo<i64> = Qubo::new();
    b.add_linear("x", 10);
    b.add_quadratic("x", "y", 20);
    b.add_constant(30);

    a.merge(&b);
    assert_eq!(a.linear_coeff("x"), 11);
    assert_eq!(a.quadratic_coeff("x", "y"), 22);
    assert_eq!(*a.constant(), 33);
}

#[test]
fn evaluate_treats_absent_variables_as_zero() {
    let mut qubo: Qubo<i64> = Qubo::new();
    qubo.add_linear("x", 5);
    qubo.add_quadratic("x", "y", -3);
    qubo.add_constant(1);

    let mut assignment = std::collections::BTreeMap::new();
    assignment.insert("x".to_string(), true);
    // "y" intentionally absent: treated as 0.
    assert_eq!(qubo.evaluate(&assignment), 6);

    assignment.insert("y".to_string(), true);
    assert_eq!(qubo.evaluate(&assignment), 3);
}
