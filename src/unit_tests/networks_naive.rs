use super::*;
use crate::attribute::NodeAttribute;

#[test]
fn naive_builds_a_single_dense_switch() {
    let left = vec![VariableNode::free("a"), VariableNode::free("b")];
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysOne),
    ];
    let switches = Naive.build(&left, &right, None, false).unwrap();
    assert_eq!(switches.len(), 1);
    assert_eq!(switches[0].left.len(), 2);
    assert_eq!(switches[0].right.len(), 2);
    assert!(switches[0].left.contains("a"));
    assert!(switches[0].right.contains("R0"));
}
