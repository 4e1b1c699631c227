use super::*;
use crate::attribute::NodeAttribute;
use crate::simplify::simplify;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

fn free_nodes(names: &[&str]) -> Vec<VariableNode> {
    names.iter().map(|n| VariableNode::free(*n)).collect()
}

#[test]
fn rejects_non_power_of_two_width() {
    let left = free_nodes(&["a", "b", "c"]);
    let right = free_nodes(&["R0", "R1", "R2"]);
    let err = OddEvenMergeSort.build(&left, &right, None, true).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn rejects_mismatched_boundary_lengths() {
    let left = free_nodes(&["a", "b"]);
    let right = free_nodes(&["R0", "R1", "R2", "R3"]);
    let err = OddEvenMergeSort.build(&left, &right, None, true).unwrap_err();
    assert!(matches!(err, CompileError::IllFormedNetwork(_)));
}

// Every comparator is a genuine 2-node-to-2-node switch (two wires read,
// both of their next positions written), and the full schedule for N=4
// touches every boundary name exactly once as a leftmost source and once as
// a rightmost sink.
#[test]
fn every_switch_is_a_two_to_two_comparator_touching_every_wire() {
    let left = free_nodes(&["a", "b", "c", "d"]);
    let right = free_nodes(&["R0", "R1", "R2", "R3"]);
    let switches = OddEvenMergeSort.build(&left, &right, None, true).unwrap();
    assert_eq!(switches.len(), 5);
    for s in &switches {
        assert_eq!(s.left.len(), 2);
        assert_eq!(s.right.len(), 2);
    }

    let mut seen = std::collections::BTreeSet::new();
    for s in &switches {
        seen.extend(s.left.iter().cloned());
        seen.extend(s.right.iter().cloned());
    }
    for name in ["a", "b", "c", "d", "R0", "R1", "R2", "R3"] {
        assert!(seen.contains(name), "{name} missing from the comparator network");
    }
}

#[test]
fn realizes_one_hot_on_four_variables() {
    let left = vec![
        VariableNode::free("a"),
        VariableNode::free("b"),
        VariableNode::free("c"),
        VariableNode::free("d"),
    ];
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R2".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R3".to_string(), NodeAttribute::AlwaysOne),
    ];
    let raw = OddEvenMergeSort.build(&left, &right, None, false).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c", "d"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}

// Property 7: a permutation network with an all-zero right boundary leaves
// no real comparator behind after simplification — every switch collapses
// to a single-variable fixup, so no quadratic coupling survives.
#[test]
fn all_zero_right_boundary_leaves_no_quadratic_coupling() {
    let left = free_nodes(&["a", "b", "c", "d"]);
    let right: Vec<VariableNode> = (0..4)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    let raw = OddEvenMergeSort.build(&left, &right, None, false).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    assert!(simplified.iter().all(|s| s.right.is_empty()));
    let qubo = switches_to_qubo(&simplified);
    assert_eq!(qubo.num_quadratic_terms(), 0);
}
