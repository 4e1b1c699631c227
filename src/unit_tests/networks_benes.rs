use super::*;
use crate::attribute::NodeAttribute;
use crate::simplify::simplify;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

#[test]
fn base_case_n_two_is_a_single_switch() {
    let left = vec![VariableNode::free("a"), VariableNode::free("b")];
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysOne),
    ];
    let switches = Benes.build(&left, &right, None, true).unwrap();
    assert_eq!(switches.len(), 1);
    assert_eq!(switches[0].left.len(), 2);
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
    let right: Vec<VariableNode> = (0..4)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .chain(std::iter::once(VariableNode::new(
            "R4".to_string(),
            NodeAttribute::AlwaysOne,
        )))
        .collect();
    let raw = Benes.build(&left, &right, None, true).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c", "d", "e"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}
