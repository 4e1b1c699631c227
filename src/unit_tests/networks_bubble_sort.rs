use super::*;
use crate::attribute::NodeAttribute;
use crate::simplify::simplify;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

fn free_chain(names: &[&str]) -> Vec<VariableNode> {
    names.iter().map(|n| VariableNode::free(*n)).collect()
}

#[test]
fn raw_bubble_sort_has_the_triangular_switch_count() {
    let left = free_chain(&["L0", "L1", "L2", "L3"]);
    let right = free_chain(&["R0", "R1", "R2", "R3"]);
    let switches = raw_bubble_sort(&left, &right).unwrap();
    assert_eq!(switches.len(), 4 * 3 / 2);
    for s in &switches {
        assert_eq!(s.left.len(), 1);
        assert_eq!(s.right.len(), 1);
    }
}

#[test]
fn raw_bubble_sort_rejects_mismatched_boundary_lengths() {
    let left = free_chain(&["L0", "L1"]);
    let right = free_chain(&["R0"]);
    assert!(raw_bubble_sort(&left, &right).is_err());
}

#[test]
fn bubble_sort_realizes_one_hot_on_three_variables() {
    let left = vec![
        VariableNode::free("a"),
        VariableNode::free("b"),
        VariableNode::free("c"),
    ];
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R2".to_string(), NodeAttribute::AlwaysOne),
    ];
    let raw = BubbleSort.build(&left, &right, None, false).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}

// Property 7: a permutation network with an all-zero right boundary leaves
// no real comparator behind after simplification.
#[test]
fn all_zero_right_boundary_leaves_no_quadratic_coupling() {
    let left = free_chain(&["a", "b", "c", "d"]);
    let right: Vec<VariableNode> = (0..4)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    let raw = BubbleSort.build(&left, &right, None, false).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    assert!(simplified.iter().all(|s| s.right.is_empty()));
    let qubo = switches_to_qubo(&simplified);
    assert_eq!(qubo.num_quadratic_terms(), 0);
}
