//! Shared recursive Clos-network construction, parameterized by two hooks:
//! an ad-hoc small-case implementation and a switch-size chooser. Both
//! [`ClosNetworkMaxDegree`] and [`ClosNetworkMinEdge`] below are thin
//! wrappers over [`clos_recursive`] that supply different hooks and
//! memoize a different cost function; [`super::Benes`] is the same
//! template with `n` pinned to 2.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::attribute::VariableNode;
use crate::error::{CompileError, Result};
use crate::names::NameGenerator;
use crate::switch::Switch;

use super::NetworkConstructor;

/// Recursive three-stage Clos construction shared by every Clos-family
/// topology. `implement_if_small` is tried first at every recursion level;
/// if it returns `Some`, recursion stops there. Otherwise `determine_sizes`
/// picks the exterior switch count `n` and interior switch count `r` for
/// this level, `n*r` intermediate nodes are synthesized (named after the
/// nearer boundary endpoint, so independent recursive sub-networks never
/// collide), and the middle stage recurses on those names.
pub(super) fn clos_recursive(
    left: &[VariableNode],
    right: &[VariableNode],
    threshold: Option<usize>,
    reverse: bool,
    implement_if_small: &dyn Fn(&[String], &[String]) -> Option<Vec<Switch>>,
    determine_sizes: &dyn Fn(usize, usize) -> (usize, usize),
) -> Result<Vec<Switch>> {
    let left_names: Vec<String> = left.iter().map(|n| n.name.clone()).collect();
    let right_names: Vec<String> = right.iter().map(|n| n.name.clone()).collect();

    if let Some(result) = implement_if_small(&left_names, &right_names) {
        return Ok(result);
    }

    let left_size = left_names.len();
    let right_size = right_names.len();
    let (exterior_switch_size, interior_switch_size) = determine_sizes(left_size, right_size);
    let intermediate_node_size = exterior_switch_size * interior_switch_size;
    if left_size.max(right_size) > intermediate_node_size {
        return Err(CompileError::IllFormedNetwork(
            "clos network: switch size too small for boundary width".into(),
        ));
    }

    let mut ingress_switches = Vec::with_capacity(interior_switch_size);
    let mut ingress_nodes = Vec::with_capacity(intermediate_node_size);
    for r in 0..interior_switch_size {
        let left_index_start = r * left_size / interior_switch_size;
        let left_index_end = (r + 1) * left_size / interior_switch_size;
        let interior_index_start = exterior_switch_size * r;
        let interior_index_end = exterior_switch_size * (r + 1);

        let interior_names: Vec<String> = (interior_index_start..interior_index_end)
            .map(|i| {
                let nearby = &left_names[i.min(left_index_end - 1)];
                NameGenerator::interior_node(nearby, i)
            })
            .collect();
        ingress_switches.push(Switch::new(
            left_names[left_index_start..left_index_end].to_vec(),
            interior_names.clone(),
            0,
            0,
        ));
        ingress_nodes.extend(interior_names);
    }

    let mut egress_switches = Vec::with_capacity(interior_switch_size);
    let mut egress_nodes = Vec::with_capacity(intermediate_node_size);
    for r in 0..interior_switch_size {
        let right_index_start = r * right_size / interior_switch_size;
        let right_index_end = (r + 1) * right_size / interior_switch_size;
        let interior_index_start = exterior_switch_size * r;
        let interior_index_end = exterior_switch_size * (r + 1);

        let interior_names: Vec<String> = (interior_index_start..interior_index_end)
            .map(|i| {
                let nearby = &right_names[i.min(right_index_end - 1)];
                NameGenerator::interior_node(nearby, i)
            })
            .collect();
        egress_switches.push(Switch::new(
            interior_names.clone(),
            right_names[right_index_start..right_index_end].to_vec(),
            0,
            0,
        ));
        egress_nodes.extend(interior_names);
    }

    let mut middle_switches = Vec::new();
    for i_start in 0..exterior_switch_size {
        let sub_left: Vec<VariableNode> = ingress_nodes[i_start..]
            .iter()
            .step_by(exterior_switch_size)
            .take(interior_switch_size)
            .map(|n| VariableNode::free(n.clone()))
            .collect();
        let sub_right: Vec<VariableNode> = egress_nodes[i_start..]
            .iter()
            .step_by(exterior_switch_size)
            .take(interior_switch_size)
            .map(|n| VariableNode::free(n.clone()))
            .collect();
        middle_switches.extend(clos_recursive(
            &sub_left,
            &sub_right,
            threshold,
            reverse,
            implement_if_small,
            determine_sizes,
        )?);
    }

    let mut out = ingress_switches;
    out.extend(middle_switches);
    out.extend(egress_switches);
    Ok(out)
}

/// Clos network minimizing switch count for a caller-bounded fan-in.
///
/// The memo mapping problem size to estimated switch count lives on the
/// instance (a `Mutex<HashMap<_>>` field), not in a module-level static, so
/// concurrent callers each holding their own instance never race and tests
/// never need to reset shared state.
#[derive(Debug)]
pub struct ClosNetworkMaxDegree {
    max_degree: Mutex<usize>,
    cost_memo: Mutex<HashMap<usize, usize>>,
}

impl ClosNetworkMaxDegree {
    /// Create a constructor bounded to the given maximum switch fan-in.
    pub fn new(max_degree: usize) -> Result<Self> {
        if max_degree < 2 {
            return Err(CompileError::InvalidParameter(
                "clos max-degree network requires max_degree >= 2".into(),
            ));
        }
        Ok(Self {
            max_degree: Mutex::new(max_degree),
            cost_memo: Mutex::new(HashMap::new()),
        })
    }

    /// Sets a new fan-in bound and clears the memoized per-size cost
    /// estimates.
    pub fn reset_max_degree(&self, new_max: usize) -> Result<()> {
        if new_max < 2 {
            return Err(CompileError::InvalidParameter(
                "clos max-degree network requires max_degree >= 2".into(),
            ));
        }
        *self.max_degree.lock().unwrap() = new_max;
        self.cost_memo.lock().unwrap().clear();
        Ok(())
    }

    fn implement_if_small(&self, left: &[String], right: &[String]) -> Option<Vec<Switch>> {
        let max_degree = *self.max_degree.lock().unwrap();
        let n = left.len().max(right.len());
        if max_degree >= n {
            Some(vec![Switch::new(left.to_vec(), right.to_vec(), 0, 0)])
        } else {
            None
        }
    }

    fn estimated_cost(&self, n: usize) -> usize {
        if let Some(&cost) = self.cost_memo.lock().unwrap().get(&n) {
            return cost;
        }
        let l: Vec<String> = (0..n).map(|i| format!("L{i}")).collect();
        let r: Vec<String> = (0..n).map(|i| format!("R{i}")).collect();
        let cost = match self.implement_if_small(&l, &r) {
            Some(adhoc) => adhoc.len(),
            None => {
                let (n_opt, r_opt) = self.determine_channel_sizes(n);
                self.num_elements(n_opt, r_opt)
            }
        };
        self.cost_memo.lock().unwrap().insert(n, cost);
        cost
    }

    fn num_elements(&self, exterior: usize, interior: usize) -> usize {
        let interior_cost = self.estimated_cost(interior) * exterior;
        let exterior_cost = interior;
        exterior_cost * 2 + interior_cost
    }

    fn determine_channel_sizes(&self, n_size: usize) -> (usize, usize) {
        let max_degree = *self.max_degree.lock().unwrap();
        (2..=max_degree)
            .map(|n| (n, (n_size + n - 1) / n))
            .min_by_key(|&(n, r)| self.num_elements(n, r))
            .expect("max_degree >= 2 guarantees a non-empty candidate range")
    }
}

impl NetworkConstructor for ClosNetworkMaxDegree {
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        threshold: Option<usize>,
        reverse: bool,
    ) -> Result<Vec<Switch>> {
        clos_recursive(
            left,
            right,
            threshold,
            reverse,
            &|l, r| self.implement_if_small(l, r),
            &|n_left, n_right| self.determine_channel_sizes(n_left.max(n_right)),
        )
    }
}

/// Clos network minimizing the number of logical quadratic edges the §4.1
/// reduction produces, rather than raw switch count.
pub struct ClosNetworkMinEdge {
    is_small_memo: Mutex<HashMap<usize, bool>>,
    edge_cost_memo: Mutex<HashMap<usize, usize>>,
}

impl Default for ClosNetworkMinEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosNetworkMinEdge {
    /// Create a constructor with the base cases (`N <= 2`, always the naive
    /// single switch) pre-populated.
    pub fn new() -> Self {
        let is_small_memo = [(0, true), (1, true), (2, true)].into_iter().collect();
        let edge_cost_memo = [(0, 0), (1, 0), (2, 6)].into_iter().collect();
        Self {
            is_small_memo: Mutex::new(is_small_memo),
            edge_cost_memo: Mutex::new(edge_cost_memo),
        }
    }

    fn estimated_cost_and_is_small(&self, n: usize) -> (usize, bool) {
        if let Some(&cost) = self.edge_cost_memo.lock().unwrap().get(&n) {
            let is_small = self.is_small_memo.lock().unwrap()[&n];
            return (cost, is_small);
        }
        let (n_opt, r_opt) = self.determine_channel_sizes(n);
        let cost_division = self.num_logical_edges(n, n_opt, r_opt);
        let cost_clique = n * (n * 2 - 1);
        let is_small = cost_clique <= cost_division;
        let cost = cost_clique.min(cost_division);
        self.is_small_memo.lock().unwrap().insert(n, is_small);
        self.edge_cost_memo.lock().unwrap().insert(n, cost);
        (cost, is_small)
    }

    fn num_logical_edges(&self, n: usize, exterior: usize, interior: usize) -> usize {
        let interior_cost = self.estimated_cost_and_is_small(interior).0 * exterior;
        let mut exterior_cost = 0usize;
        for r_idx in 0..interior {
            let input_start = n * r_idx / interior;
            let input_end = n * (r_idx + 1) / interior;
            let total_nodes = input_end - input_start + exterior;
            exterior_cost += total_nodes * (total_nodes - 1) / 2;
        }
        exterior_cost * 2 + interior_cost
    }

    fn determine_channel_sizes(&self, n_size: usize) -> (usize, usize) {
        (2..n_size)
            .map(|n| (n, (n_size + n - 1) / n))
            .min_by_key(|&(n, r)| self.num_logical_edges(n_size, n, r))
            .expect("callers only recurse here once N exceeds the memoized base cases")
    }

    fn implement_if_small(&self, left: &[String], right: &[String]) -> Option<Vec<Switch>> {
        let n = left.len().max(right.len());
        let is_small = self.estimated_cost_and_is_small(n).1;
        if is_small {
            Some(vec![Switch::new(left.to_vec(), right.to_vec(), 0, 0)])
        } else {
            None
        }
    }
}

impl NetworkConstructor for ClosNetworkMinEdge {
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        threshold: Option<usize>,
        reverse: bool,
    ) -> Result<Vec<Switch>> {
        clos_recursive(
            left,
            right,
            threshold,
            reverse,
            &|l, r| self.implement_if_small(l, r),
            &|n_left, n_right| self.determine_channel_sizes(n_left.max(n_right)),
        )
    }
}

/// Fan-in bound for the shared default [`ClosNetworkMaxDegree`] instance
/// used by [`super::build_raw_network`]. Callers who want a different bound
/// construct their own `ClosNetworkMaxDegree` and call `build` directly.
const DEFAULT_MAX_DEGREE: usize = 4;

static DEFAULT_MAX_DEGREE_INSTANCE: OnceLock<ClosNetworkMaxDegree> = OnceLock::new();
static DEFAULT_MIN_EDGE_INSTANCE: OnceLock<ClosNetworkMinEdge> = OnceLock::new();

pub(super) fn default_max_degree_constructor<T>(f: impl FnOnce(&ClosNetworkMaxDegree) -> T) -> T {
    let instance = DEFAULT_MAX_DEGREE_INSTANCE
        .get_or_init(|| ClosNetworkMaxDegree::new(DEFAULT_MAX_DEGREE).expect("default max_degree is valid"));
    f(instance)
}

pub(super) fn default_min_edge_constructor<T>(f: impl FnOnce(&ClosNetworkMinEdge) -> T) -> T {
    let instance = DEFAULT_MIN_EDGE_INSTANCE.get_or_init(ClosNetworkMinEdge::new);
    f(instance)
}

#[cfg(test)]
#[path = "../unit_tests/networks_clos.rs"]
mod tests;
