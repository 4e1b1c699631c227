use super::*;
use crate::attribute::NodeAttribute;

#[test]
fn power_of_two_requirement_matches_the_sorting_networks() {
    assert!(NetworkType::Benes.requires_power_of_two_width());
    assert!(NetworkType::BitonicSort.requires_power_of_two_width());
    assert!(NetworkType::OddEvenMergeSort.requires_power_of_two_width());
    assert!(!NetworkType::Naive.requires_power_of_two_width());
    assert!(!NetworkType::BubbleSort.requires_power_of_two_width());
    assert!(!NetworkType::ClosNetworkMaxDegree.requires_power_of_two_width());
    assert!(!NetworkType::ClosNetworkMinEdge.requires_power_of_two_width());
    assert!(!NetworkType::DivideAndConquer.requires_power_of_two_width());
}

#[test]
fn only_divide_and_conquer_rejects_not_care() {
    for network in [
        NetworkType::Naive,
        NetworkType::Benes,
        NetworkType::BitonicSort,
        NetworkType::BubbleSort,
        NetworkType::ClosNetworkMaxDegree,
        NetworkType::ClosNetworkMinEdge,
        NetworkType::OddEvenMergeSort,
    ] {
        assert!(network.supports_not_care(), "{network:?} should support NOT_CARE");
    }
    assert!(!NetworkType::DivideAndConquer.supports_not_care());
}

#[test]
fn naive_dispatch_builds_a_single_dense_switch() {
    let left = vec![VariableNode::free("a"), VariableNode::free("b")];
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysOne),
    ];
    let switches = build_raw_network(NetworkType::Naive, &left, &right, None, false).unwrap();
    assert_eq!(switches.len(), 1);
    assert_eq!(switches[0].left.len(), 2);
    assert_eq!(switches[0].right.len(), 2);
}

#[test]
fn clos_max_degree_dispatch_uses_the_shared_default_instance() {
    let left: Vec<VariableNode> = ["a", "b", "c", "d", "e"].iter().map(|n| VariableNode::free(*n)).collect();
    let mut right: Vec<VariableNode> = (0..4)
        .map(|i| VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero))
        .collect();
    right.push(VariableNode::new("R4".to_string(), NodeAttribute::AlwaysOne));
    let switches = build_raw_network(NetworkType::ClosNetworkMaxDegree, &left, &right, None, true).unwrap();
    assert!(!switches.is_empty());
}
