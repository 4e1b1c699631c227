use std::collections::BTreeMap;

use cardinality_qubo::attribute::{NodeAttribute, VariableNode};
use cardinality_qubo::error::CompileError;
use cardinality_qubo::networks::{build_raw_network, NetworkType};
use cardinality_qubo::simplify::simplify;
use cardinality_qubo::switch::{switches_to_qubo, Switch};
use cardinality_qubo::{build_switches, reset_prefix_counter, ConstraintType};

fn assignment(vars: &[&str], ones: &[&str]) -> BTreeMap<String, bool> {
    vars.iter()
        .map(|v| (v.to_string(), ones.contains(v)))
        .collect()
}

// (E1) ONE_HOT on three variables through the divide-and-conquer network;
// the simplification pass collapses it to the standard `(a+b+c-1)^2`.
#[test]
fn one_hot_three_variables_via_divide_and_conquer() {
    reset_prefix_counter();
    let variables = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let switches = build_switches(
        &variables,
        ConstraintType::OneHot,
        NetworkType::DivideAndConquer,
        None,
        None,
        Some(1),
        false,
        Some("aux"),
    )
    .unwrap();
    let qubo = switches_to_qubo(&switches);

    for v in ["a", "b", "c"] {
        assert_eq!(qubo.linear_coeff(v), -1);
    }
    assert_eq!(qubo.quadratic_coeff("a", "b"), 2);
    assert_eq!(qubo.quadratic_coeff("a", "c"), 2);
    assert_eq!(qubo.quadratic_coeff("b", "c"), 2);
    assert_eq!(*qubo.constant(), 1);

    for (ones, expected) in [
        (vec!["a"], 0),
        (vec!["b"], 0),
        (vec!["c"], 0),
        (vec![], 1),
        (vec!["a", "b"], 1),
        (vec!["a", "b", "c"], 4),
    ] {
        let value = qubo.evaluate(&assignment(&["a", "b", "c"], &ones));
        assert_eq!(value, expected, "ones={ones:?}");
    }
}

// (E2) EQUAL_TO 2 on four variables through bubble sort: ground state value
// 0 attained exactly on the C(4,2)=6 balanced assignments.
#[test]
fn equal_to_two_of_four_via_bubble_sort() {
    reset_prefix_counter();
    let variables: Vec<String> = ["x0", "x1", "x2", "x3"].iter().map(|s| s.to_string()).collect();
    let switches = build_switches(
        &variables,
        ConstraintType::EqualTo,
        NetworkType::BubbleSort,
        Some(2),
        None,
        None,
        false,
        Some("aux"),
    )
    .unwrap();
    let qubo = switches_to_qubo(&switches);
    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();

    let mut balanced = 0;
    for mask in 0u32..16 {
        let ones: Vec<&str> = ["x0", "x1", "x2", "x3"]
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, v)| *v)
            .collect();
        let is_balanced = ones.len() == 2;
        let mut best = i64::MAX;
        for free_mask in 0u64..(1u64 << (all_vars.len() - 4)) {
            let mut full = assignment(&["x0", "x1", "x2", "x3"], &ones);
            let aux_vars: Vec<&String> = all_vars
                .iter()
                .filter(|v| !["x0", "x1", "x2", "x3"].contains(&v.as_str()))
                .collect();
            for (i, v) in aux_vars.iter().enumerate() {
                full.insert((*v).clone(), free_mask & (1 << i) != 0);
            }
            let value = qubo.evaluate(&full);
            best = best.min(value);
        }
        if is_balanced {
            assert_eq!(best, 0, "mask={mask}");
            balanced += 1;
        } else {
            assert!(best > 0, "mask={mask}");
        }
    }
    assert_eq!(balanced, 6);
}

// (E3) A single switch with zero constants.
#[test]
fn single_switch_zero_constants() {
    let switch = Switch::new(["L0".to_string(), "L1".to_string()], ["R0".to_string(), "R1".to_string()], 0, 0);
    let qubo = switches_to_qubo(&[switch]);
    assert_eq!(qubo.quadratic_coeff("L0", "L1"), 2);
    assert_eq!(qubo.quadratic_coeff("R0", "R1"), 2);
    for l in ["L0", "L1"] {
        for r in ["R0", "R1"] {
            assert_eq!(qubo.quadratic_coeff(l, r), -2);
        }
    }
    for v in ["L0", "L1", "R0", "R1"] {
        assert_eq!(qubo.linear_coeff(v), 1);
    }
    assert_eq!(*qubo.constant(), 0);
}

// (E4) A single switch with nonzero constants.
#[test]
fn single_switch_nonzero_constants() {
    let switch = Switch::new(["L0".to_string()], ["R0".to_string()], 1, 2);
    let qubo = switches_to_qubo(&[switch]);
    assert_eq!(qubo.linear_coeff("L0"), -1);
    assert_eq!(qubo.linear_coeff("R0"), 3);
    assert_eq!(*qubo.constant(), 1);
}

// (E5) An ill-formed raw sequence: a switch's right side references a
// variable not present anywhere on the current frontier.
#[test]
fn simplify_rejects_a_right_side_outside_the_frontier() {
    let right_boundary = vec![VariableNode::new("R0".to_string(), NodeAttribute::AlwaysOne)];
    let raw = vec![Switch::new(["L0".to_string()], ["NotOnFrontier".to_string()], 0, 0)];
    let err = simplify(&raw, &right_boundary, false).unwrap_err();
    assert!(matches!(err, CompileError::IllFormedNetwork(_)));
}

// (E6) Parameter validation rejects before any network is built.
#[test]
fn parameter_validation_rejects_before_network_construction() {
    let variables: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

    let err = build_switches(
        &variables,
        ConstraintType::EqualTo,
        NetworkType::Naive,
        Some(4),
        None,
        None,
        false,
        Some("aux"),
    )
    .unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));

    let err = build_switches(
        &variables,
        ConstraintType::Clamp,
        NetworkType::ClosNetworkMaxDegree,
        Some(2),
        Some(1),
        None,
        false,
        Some("aux"),
    )
    .unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));

    let left: Vec<VariableNode> = variables.iter().map(|v| VariableNode::free(v.clone())).collect();
    let right: Vec<VariableNode> = (0..2)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .chain(std::iter::once(VariableNode::new("R2".to_string(), NodeAttribute::AlwaysOne)))
        .collect();
    let err = build_raw_network(NetworkType::BitonicSort, &left, &right, None, false).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}
