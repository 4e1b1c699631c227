use super::*;

fn boundary(name: &str, attribute: NodeAttribute) -> Vec<VariableNode> {
    vec![VariableNode::new(name.to_string(), attribute)]
}

#[test]
fn case_a_forces_left_to_one() {
    let right = boundary("R0", NodeAttribute::AlwaysOne);
    let raw = vec![Switch::new(["L0".to_string()], ["R0".to_string()], 0, 0)];
    let out = simplify(&raw, &right, false).unwrap();
    assert_eq!(out, vec![Switch::new(["L0".to_string()], [], 0, 1)]);
}

#[test]
fn case_b_forces_left_to_zero() {
    let right = boundary("R0", NodeAttribute::AlwaysZero);
    let raw = vec![Switch::new(["L0".to_string()], ["R0".to_string()], 0, 0)];
    let out = simplify(&raw, &right, false).unwrap();
    assert_eq!(out, vec![Switch::new(["L0".to_string()], [], 0, 0)]);
}

#[test]
fn case_c_erases_an_unconstrained_switch() {
    let right = boundary("R0", NodeAttribute::NotCare);
    let raw = vec![Switch::new(["L0".to_string()], ["R0".to_string()], 0, 0)];
    let out = simplify(&raw, &right, false).unwrap();
    assert!(out.is_empty());
}

#[test]
fn case_d_keeps_a_free_switch() {
    let right = boundary("R0", NodeAttribute::ZeroOrOne);
    let raw = vec![Switch::new(["L0".to_string()], ["R0".to_string()], 0, 0)];
    let out = simplify(&raw, &right, false).unwrap();
    assert_eq!(out, vec![Switch::new(["L0".to_string()], ["R0".to_string()], 0, 0)]);
}

#[test]
fn scheduling_violation_is_ill_formed() {
    let right = boundary("R0", NodeAttribute::AlwaysZero);
    let raw = vec![Switch::new(["L0".to_string()], ["R1".to_string()], 0, 0)];
    let err = simplify(&raw, &right, false).unwrap_err();
    assert!(matches!(err, CompileError::IllFormedNetwork(_)));
}

#[test]
fn overconstrained_switch_is_infeasible() {
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysOne),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysOne),
    ];
    let raw = vec![Switch::new(["L0".to_string()], ["R0".to_string(), "R1".to_string()], 0, 0)];
    let err = simplify(&raw, &right, false).unwrap_err();
    assert!(matches!(err, CompileError::Infeasible(_)));
}

#[test]
fn reverse_flag_flips_emission_order_back_to_input_order() {
    let right = boundary("R0", NodeAttribute::ZeroOrOne);
    let raw = vec![
        Switch::new(["L0".to_string()], ["M0".to_string()], 0, 0),
        Switch::new(["M0".to_string()], ["R0".to_string()], 0, 0),
    ];

    let processed_order = simplify(&raw, &right, false).unwrap();
    assert_eq!(processed_order[0].right, ["R0".to_string()].into_iter().collect());
    assert_eq!(processed_order[1].right, ["M0".to_string()].into_iter().collect());

    let input_order = simplify(&raw, &right, true).unwrap();
    assert_eq!(input_order[0].right, ["M0".to_string()].into_iter().collect());
    assert_eq!(input_order[1].right, ["R0".to_string()].into_iter().collect());
}
