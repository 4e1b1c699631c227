use super::*;
use crate::attribute::NodeAttribute;
use crate::simplify::simplify;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

#[test]
fn bitonic_sort_rejects_non_power_of_two_width() {
    let left = vec![VariableNode::free("a"), VariableNode::free("b"), VariableNode::free("c")];
    let right = vec![VariableNode::free("R0"), VariableNode::free("R1"), VariableNode::free("R2")];
    let err = BitonicSort.build(&left, &right, None, true).unwrap_err();
    assert!(matches!(err, CompileError::InvalidParameter(_)));
}

#[test]
fn bitonic_sort_switch_count_matches_batchers_formula() {
    let left = free_nodes(&["L0", "L1", "L2", "L3"]);
    let right = free_nodes(&["R0", "R1", "R2", "R3"]);
    let switches = BitonicSort.build(&left, &right, None, true).unwrap();
    // N * log2(N) * (log2(N)+1) / 4 with N=4, log2(N)=2 -> 4*2*3/4 = 6.
    assert_eq!(switches.len(), 6);
}

#[test]
fn bitonic_sort_realizes_one_hot_on_four_variables() {
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
    let raw = BitonicSort.build(&left, &right, None, true).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c", "d"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}

fn free_nodes(names: &[&str]) -> Vec<VariableNode> {
    names.iter().map(|n| VariableNode::free(*n)).collect()
}

// Property 7: a permutation network with an all-zero right boundary leaves
// no real comparator behind after simplification.
#[test]
fn all_zero_right_boundary_leaves_no_quadratic_coupling() {
    let left = free_nodes(&["a", "b", "c", "d"]);
    let right: Vec<VariableNode> = (0..4)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    let raw = BitonicSort.build(&left, &right, None, true).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    assert!(simplified.iter().all(|s| s.right.is_empty()));
    let qubo = switches_to_qubo(&simplified);
    assert_eq!(qubo.num_quadratic_terms(), 0);
}
