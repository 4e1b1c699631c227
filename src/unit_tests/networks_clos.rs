use super::*;
use crate::attribute::NodeAttribute;
use crate::simplify::simplify;
use crate::switch::switches_to_qubo;
use crate::testing::brute_force_minimum;

#[test]
fn max_degree_rejects_degree_below_two() {
    assert!(matches!(
        ClosNetworkMaxDegree::new(1).unwrap_err(),
        CompileError::InvalidParameter(_)
    ));
}

#[test]
fn reset_max_degree_rejects_degree_below_two_and_clears_memo() {
    let clos = ClosNetworkMaxDegree::new(4).unwrap();
    clos.estimated_cost(8);
    assert!(matches!(
        clos.reset_max_degree(1).unwrap_err(),
        CompileError::InvalidParameter(_)
    ));
    clos.reset_max_degree(3).unwrap();
    assert!(clos.cost_memo.lock().unwrap().is_empty());
}

#[test]
fn min_edge_new_prepopulates_base_cases() {
    let clos = ClosNetworkMinEdge::new();
    assert_eq!(clos.edge_cost_memo.lock().unwrap()[&0], 0);
    assert_eq!(clos.edge_cost_memo.lock().unwrap()[&1], 0);
    assert_eq!(clos.edge_cost_memo.lock().unwrap()[&2], 6);
    assert!(clos.is_small_memo.lock().unwrap()[&2]);
}

fn one_hot_boundary(names: &[&str]) -> (Vec<VariableNode>, Vec<VariableNode>) {
    let left: Vec<VariableNode> = names.iter().map(|n| VariableNode::free(*n)).collect();
    let n = names.len();
    let mut right: Vec<VariableNode> = (0..n - 1)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    right.push(VariableNode::new(format!("R{}", n - 1), NodeAttribute::AlwaysOne));
    (left, right)
}

#[test]
fn max_degree_realizes_one_hot_on_five_variables() {
    let (left, right) = one_hot_boundary(&["a", "b", "c", "d", "e"]);
    let clos = ClosNetworkMaxDegree::new(3).unwrap();
    let raw = clos.build(&left, &right, None, true).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c", "d", "e"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}

#[test]
fn min_edge_realizes_one_hot_on_five_variables() {
    let (left, right) = one_hot_boundary(&["a", "b", "c", "d", "e"]);
    let clos = ClosNetworkMinEdge::new();
    let raw = clos.build(&left, &right, None, true).unwrap();
    let simplified = simplify(&raw, &right, false).unwrap();
    let qubo = switches_to_qubo(&simplified);

    let all_vars: Vec<String> = qubo.variables().iter().cloned().collect();
    let (assignment, value) = brute_force_minimum(&qubo, &all_vars);
    assert_eq!(value, 0);
    let ones = ["a", "b", "c", "d", "e"].iter().filter(|v| assignment[**v]).count();
    assert_eq!(ones, 1);
}
