use super::*;

#[test]
fn is_fixed_matches_always_variants() {
    assert!(NodeAttribute::AlwaysZero.is_fixed());
    assert!(NodeAttribute::AlwaysOne.is_fixed());
    assert!(!NodeAttribute::ZeroOrOne.is_fixed());
    assert!(!NodeAttribute::NotCare.is_fixed());
}

#[test]
fn free_constructs_zero_or_one() {
    let node = VariableNode::free("x");
    assert_eq!(node.name, "x");
    assert_eq!(node.attribute, NodeAttribute::ZeroOrOne);
}

#[test]
fn new_accepts_owned_or_borrowed_names() {
    let owned = VariableNode::new(String::from("y"), NodeAttribute::AlwaysOne);
    let borrowed = VariableNode::new("y", NodeAttribute::AlwaysOne);
    assert_eq!(owned, borrowed);
}
