use super::*;

#[test]
fn fresh_names_are_unique_within_one_generator() {
    let mut gen = NameGenerator::new();
    let a = gen.fresh("aux");
    let b = gen.fresh("aux");
    assert_ne!(a, b);
    assert_eq!(a, "aux_0");
    assert_eq!(b, "aux_1");
}

#[test]
fn two_generators_are_independent() {
    let mut a = NameGenerator::new();
    let mut b = NameGenerator::new();
    assert_eq!(a.fresh("x"), b.fresh("x"));
}

#[test]
fn chain_node_embeds_both_endpoints() {
    assert_eq!(NameGenerator::chain_node("L0", 2, "R0"), "L0_2_R0");
}

#[test]
fn interior_node_embeds_nearby_boundary_and_global_index() {
    assert_eq!(NameGenerator::interior_node("R3", 7), "R3_7");
}
