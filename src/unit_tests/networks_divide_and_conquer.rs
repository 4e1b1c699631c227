use super::*;
use crate::simplify::simplify;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

fn free_nodes(names: &[&str]) -> Vec<VariableNode> {
    names.iter().map(|n| VariableNode::free(*n)).collect()
}

fn one_hot_right(n: usize) -> Vec<VariableNode> {
    let mut right: Vec<VariableNode> = (0..n - 1)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    right.push(VariableNode::new(format!("R{}", n - 1), NodeAttribute::AlwaysOne));
    right
}

#[test]
fn rejects_a_free_right_boundary() {
    let left = free_nodes(&["a", "b"]);
    let right = free_nodes(&["R0", "R1"]);
    let err = recurse(&left, &right, None).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn rejects_a_fixed_left_boundary() {
    let left = vec![
        VariableNode::new("a".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::free("b"),
    ];
    let right = one_hot_right(2);
    let err = recurse(&left, &right, None).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn all_same_fixed_value_is_a_direct_one_to_one_mapping() {
    let left = free_nodes(&["a", "b", "c"]);
    let right: Vec<VariableNode> = (0..3)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    let switches = recurse(&left, &right, None).unwrap();
    assert_eq!(switches.len(), 3);
    for s in &switches {
        assert_eq!(s.left.len(), 1);
        assert_eq!(s.right.len(), 1);
    }
}

#[test]
fn threshold_falls_back_to_a_single_naive_switch() {
    let left = free_nodes(&["a", "b", "c"]);
    let right = one_hot_right(3);
    let switches = recurse(&left, &right, Some(10)).unwrap();
    assert_eq!(switches.len(), 1);
    assert_eq!(switches[0].left.len(), 3);
}

#[test]
fn realizes_one_hot_on_five_variables() {
    let left = vec![
        VariableNode::free("a"),
        VariableNode::free("b"),
        VariableNode::free("c"),
        VariableNode::free("d"),
        VariableNode::free("e"),
    ];
    let right = one_hot_right(5);
    let raw = DivideAndConquer { threshold: Some(2) }
        .build(&left, &right, None, false)
        .unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c", "d", "e"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}
