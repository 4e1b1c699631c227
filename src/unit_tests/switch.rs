use super::*;

#[test]
fn accumulate_into_matches_worked_example_with_zero_constants() {
    let switch = Switch::new(["L0".to_string(), "L1".to_string()], ["R0".to_string(), "R1".to_string()], 0, 0);
    let mut qubo = Qubo::new();
    switch.accumulate_into(&mut qubo);

    assert_eq!(qubo.quadratic_coeff("L0", "L1"), 2);
    assert_eq!(qubo.quadratic_coeff("R0", "R1"), 2);
    for l in ["L0", "L1"] {
        for r in ["R0", "R1"] {
            assert_eq!(qubo.quadratic_coeff(l, r), -2);
        }
    }
    for v in ["L0", "L1", "R0", "R1"] {
        assert_eq!(qubo.linear_coeff(v), 1);
    }
    assert_eq!(*qubo.constant(), 0);
}

#[test]
fn accumulate_into_matches_worked_example_with_nonzero_constants() {
    let switch = Switch::new(["L0".to_string()], ["R0".to_string()], 1, 2);
    let mut qubo = Qubo::new();
    switch.accumulate_into(&mut qubo);

    assert_eq!(qubo.linear_coeff("L0"), -1);
    assert_eq!(qubo.linear_coeff("R0"), 3);
    assert_eq!(*qubo.constant(), 1);
}

#[test]
fn switches_to_qubo_is_linear_in_the_switch_list() {
    let a = Switch::new(["a".to_string()], ["b".to_string()], 0, 0);
    let b = Switch::new(["c".to_string()], ["d".to_string()], 0, 1);

    let combined = switches_to_qubo(&[a.clone(), b.clone()]);

    let mut separate = switches_to_qubo(&[a]);
    separate.merge(&switches_to_qubo(&[b]));

    assert_eq!(combined, separate);
}

#[test]
fn left_node_to_switch_maps_every_left_name() {
    let switches = vec![
        Switch::new(["L0".to_string()], ["M0".to_string()], 0, 0),
        Switch::new(["M0".to_string()], ["R0".to_string()], 0, 0),
    ];
    let map = left_node_to_switch(&switches);
    assert_eq!(map["L0"], 0);
    assert_eq!(map["M0"], 1);
}

#[test]
fn layer_structure_recovers_a_two_stage_chain() {
    let switches = vec![
        Switch::new(["L0".to_string()], ["M0".to_string()], 0, 0),
        Switch::new(["M0".to_string()], ["R0".to_string()], 0, 0),
    ];
    let layers = layer_structure(&switches);
    assert_eq!(layers.get(&0), Some(&vec![0]));
    assert_eq!(layers.get(&1), Some(&vec![1]));
}

#[test]
fn num_variables_and_net_constant() {
    let switch = Switch::new(["L0".to_string(), "L1".to_string()], ["R0".to_string()], 5, 2);
    assert_eq!(switch.num_variables(), 3);
    assert_eq!(switch.net_constant(), 3);
}
