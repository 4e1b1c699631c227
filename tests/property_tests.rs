//! Property-based tests using proptest, covering `SPEC_FULL.md` §8
//! properties 2 (integer accumulation), 4 (switch-to-QUBO linearity),
//! 5 (idempotence of simplification) and 6 (prefix isolation).
//!
//! Properties 3 and 7-9 are existential claims about one topology at a
//! handful of sizes and are covered by ordinary `#[test]` functions next
//! to the relevant network module instead.

use std::collections::BTreeMap;

use cardinality_qubo::attribute::{NodeAttribute, VariableNode};
use cardinality_qubo::networks::{build_raw_network, NetworkType};
use cardinality_qubo::simplify::simplify;
use cardinality_qubo::switch::{switches_to_qubo, Switch};
use cardinality_qubo::{build_switches, reset_prefix_counter, ConstraintType};
use proptest::prelude::*;

/// A single switch over a pool of six synthetic variable names, one name on
/// each side so left/right are trivially disjoint.
fn switch_strategy() -> impl Strategy<Value = Switch> {
    let names: Vec<String> = (0..6).map(|i| format!("v{i}")).collect();
    (0..6usize, 0..6usize, -3i64..=3, -3i64..=3).prop_filter_map(
        "left and right variable must differ",
        move |(l, r, lc, rc)| {
            if l == r {
                return None;
            }
            Some(Switch::new(
                [names[l].clone()],
                [names[r].clone()],
                lc,
                rc,
            ))
        },
    )
}

fn switch_list_strategy() -> impl Strategy<Value = Vec<Switch>> {
    prop::collection::vec(switch_strategy(), 0..6)
}

/// An EQUAL_TO instance over `n` freshly named variables, paired with a
/// network topology that both accepts an EQUAL_TO boundary (no NOT_CARE
/// nodes) and imposes no width restriction, so every generated `(n, k)` is
/// buildable.
fn equal_to_instance_strategy() -> impl Strategy<Value = (usize, i64, NetworkType)> {
    (2usize..=6).prop_flat_map(|n| {
        (
            Just(n),
            0i64..=n as i64,
            prop_oneof![Just(NetworkType::Naive), Just(NetworkType::BubbleSort)],
        )
    })
}

proptest! {
    /// Property 2 (integer coefficients): accumulation into a `Qubo<i64>`
    /// never loses or fabricates a constant contribution — the objective
    /// evaluated at the all-zero assignment is exactly the constant term,
    /// for any switch list built from a valid constraint instance.
    #[test]
    fn constant_term_matches_evaluation_at_the_origin((n, k, network) in equal_to_instance_strategy()) {
        let variables: Vec<String> = (0..n).map(|i| format!("x{i}")).collect();
        reset_prefix_counter();
        let switches = build_switches(
            &variables,
            ConstraintType::EqualTo,
            network,
            Some(k),
            None,
            None,
            false,
            Some("aux"),
        ).unwrap();
        let qubo = switches_to_qubo(&switches);
        prop_assert_eq!(qubo.evaluate(&BTreeMap::new()), *qubo.constant());
    }

    /// Property 4 (switch -> QUBO linearity): reducing a concatenation of
    /// two switch lists equals reducing each separately and summing.
    #[test]
    fn switches_to_qubo_is_linear_in_the_switch_list(a in switch_list_strategy(), b in switch_list_strategy()) {
        let mut concatenated = a.clone();
        concatenated.extend(b.clone());
        let combined = switches_to_qubo(&concatenated);

        let mut summed = switches_to_qubo(&a);
        summed.merge(&switches_to_qubo(&b));

        prop_assert_eq!(combined, summed);
    }

    /// Property 5 (idempotence of simplification): re-running the
    /// simplification driver on its own output, with the same right
    /// boundary, reproduces that output exactly. `reverse = true` is used
    /// for both calls so the list handed back in satisfies the documented
    /// "ordered left-to-right" contract simplify expects of `raw`; the
    /// default `reverse = false` orientation is the *reverse* of that
    /// contract (see the note on `simplify`) and isn't a valid re-feed.
    #[test]
    fn simplify_is_idempotent((n, k, network) in equal_to_instance_strategy()) {
        let variables: Vec<String> = (0..n).map(|i| format!("x{i}")).collect();
        let pad = network.requires_power_of_two_width();
        let (left, right) = cardinality_qubo::constraint::initial_boundary(
            &variables,
            ConstraintType::EqualTo,
            Some(k),
            None,
            pad,
        ).unwrap();
        let raw = build_raw_network(network, &left, &right, None, true).unwrap();
        let once = simplify(&raw, &right, true).unwrap();
        let twice = simplify(&once, &right, true).unwrap();
        prop_assert_eq!(twice, once);
    }

    /// Property 6 (prefix isolation): two successive compiles with disjoint
    /// user-variable sets produce QUBOs whose variable sets are disjoint,
    /// as long as the prefix counter starts fresh.
    #[test]
    fn disjoint_variable_sets_stay_disjoint_under_the_default_prefix(
        (n1, k1, network1) in equal_to_instance_strategy(),
        (n2, k2, network2) in equal_to_instance_strategy(),
    ) {
        reset_prefix_counter();
        let variables1: Vec<String> = (0..n1).map(|i| format!("a{i}")).collect();
        let variables2: Vec<String> = (0..n2).map(|i| format!("b{i}")).collect();

        let switches1 = build_switches(&variables1, ConstraintType::EqualTo, network1, Some(k1), None, None, false, None).unwrap();
        let switches2 = build_switches(&variables2, ConstraintType::EqualTo, network2, Some(k2), None, None, false, None).unwrap();

        let qubo1 = switches_to_qubo(&switches1);
        let qubo2 = switches_to_qubo(&switches2);

        for v in qubo1.variables() {
            prop_assert!(!qubo2.variables().contains(v), "variable {v} leaked across prefixes");
        }
    }
}

/// Property 8 (Benes / Clos base case) is a plain `#[test]` per
/// `SPEC_FULL.md` §8's note that single-size existential claims don't
/// benefit from random sampling; included here since it spans both
/// families rather than living next to either module alone.
#[test]
fn benes_and_clos_min_edge_base_case_n_two_is_one_switch() {
    let left = vec![VariableNode::free("a"), VariableNode::free("b")];
    let right = vec![
        VariableNode::new("R0".to_string(), NodeAttribute::AlwaysZero),
        VariableNode::new("R1".to_string(), NodeAttribute::AlwaysOne),
    ];
    let benes = build_raw_network(NetworkType::Benes, &left, &right, None, true).unwrap();
    assert_eq!(benes.len(), 1);

    let clos_min_edge = build_raw_network(NetworkType::ClosNetworkMinEdge, &left, &right, None, true).unwrap();
    assert_eq!(clos_min_edge.len(), 1);
}
