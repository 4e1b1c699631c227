//! The [`Switch`] record and its reduction to a [`Qubo`] (components B, F §4.1).

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::qubo::Qubo;

/// A single local equality constraint: `sum(left) + left_constant ==
/// sum(right) + right_constant`, encoded as the penalty
/// `(sum(left) + left_constant - sum(right) - right_constant)^2`.
///
/// Invariant: `left` and `right` are disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    /// Left-hand variable names.
    pub left: BTreeSet<String>,
    /// Right-hand variable names.
    pub right: BTreeSet<String>,
    /// Constant added to the left-hand sum.
    pub left_constant: i64,
    /// Constant added to the right-hand sum.
    pub right_constant: i64,
}

impl Switch {
    /// Build a switch, panicking in debug builds if `left` and `right`
    /// overlap (a constructor bug, not a user error — production builds
    /// skip the check and simply produce a switch whose later
    /// simplification will likely fail the disjointness check).
    pub fn new<L, R>(left: L, right: R, left_constant: i64, right_constant: i64) -> Self
    where
        L: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        let left: BTreeSet<String> = left.into_iter().collect();
        let right: BTreeSet<String> = right.into_iter().collect();
        debug_assert!(
            left.is_disjoint(&right),
            "switch left and right sets must be disjoint"
        );
        Self {
            left,
            right,
            left_constant,
            right_constant,
        }
    }

    /// Number of variables referenced by this switch.
    pub fn num_variables(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// `left_constant - right_constant`, the folded constant `c` in
    /// `(sum(left) - sum(right) + c)^2`.
    pub fn net_constant(&self) -> i64 {
        self.left_constant - self.right_constant
    }

    /// Accumulate this switch's quadratic penalty into `qubo`.
    ///
    /// Expands `(sum(left) - sum(right) + c)^2`: +2 for every unordered pair
    /// within `left` or within `right`, -2 for every cross pair, and the
    /// usual `x^2 = x` linear folding plus `c^2` on the constant.
    pub fn accumulate_into(&self, qubo: &mut Qubo<i64>) {
        let c = self.net_constant();

        for pair in pairs(&self.left) {
            qubo.add_quadratic(&pair.0, &pair.1, 2);
        }
        for pair in pairs(&self.right) {
            qubo.add_quadratic(&pair.0, &pair.1, 2);
        }
        for l in &self.left {
            for r in &self.right {
                qubo.add_quadratic(l, r, -2);
            }
        }
        for l in &self.left {
            qubo.add_linear(l, 2 * c);
            qubo.add_linear(l, 1);
        }
        for r in &self.right {
            qubo.add_linear(r, -2 * c);
            qubo.add_linear(r, 1);
        }
        qubo.add_constant(c * c);
    }
}

fn pairs(set: &BTreeSet<String>) -> Vec<(String, String)> {
    let items: Vec<&String> = set.iter().collect();
    let mut out = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            out.push((items[i].clone(), items[j].clone()));
        }
    }
    out
}

/// Reduce a list of switches to a single QUBO (component F).
///
/// `variables` is the union over all switches of `left ∪ right`; missing map
/// keys default to zero. Duplicate pairs across switches are merged
/// additively, so `switches_to_qubo(a ++ b)` equals `switches_to_qubo(a)`
/// merged with `switches_to_qubo(b)` (property 4: switch-to-QUBO linearity).
pub fn switches_to_qubo(switches: &[Switch]) -> Qubo<i64> {
    let mut qubo = Qubo::new();
    for switch in switches {
        switch.accumulate_into(&mut qubo);
    }
    qubo
}

/// Map each left-side variable name to the index of the switch containing it.
pub fn left_node_to_switch(switches: &[Switch]) -> BTreeMap<String, usize> {
    let mut map = BTreeMap::new();
    for (idx, switch) in switches.iter().enumerate() {
        for node in &switch.left {
            map.insert(node.clone(), idx);
        }
    }
    map
}

/// Recover a topological layering of `switches` by breadth-first traversal
/// from the boundary `L{i}` nodes, following `left -> right` edges.
///
/// Returns `{layer_number: [switch_indices]}`. Switches unreachable from a
/// boundary `L{i}` node (e.g. because the network was built with
/// differently-named left boundary nodes) are omitted — this is a
/// diagnostic aid, not part of the compilation pipeline.
pub fn layer_structure(switches: &[Switch]) -> BTreeMap<usize, Vec<usize>> {
    let left_owner = left_node_to_switch(switches);

    let mut graph: DiGraph<String, ()> = DiGraph::new();
    let mut node_index = BTreeMap::new();
    let mut index_of = |graph: &mut DiGraph<String, ()>, name: &str| -> petgraph::graph::NodeIndex {
        *node_index
            .entry(name.to_string())
            .or_insert_with(|| graph.add_node(name.to_string()))
    };
    for switch in switches {
        for l in &switch.left {
            let li = index_of(&mut graph, l);
            for r in &switch.right {
                let ri = index_of(&mut graph, r);
                graph.add_edge(li, ri, ());
            }
        }
    }

    let mut switch_layer: BTreeMap<usize, usize> = BTreeMap::new();
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();
    for switch in switches {
        for node in &switch.left {
            if is_boundary_left_name(node) {
                queue.push_back((node.clone(), 0));
            }
        }
    }

    while let Some((node, layer)) = queue.pop_front() {
        let Some(&switch_idx) = left_owner.get(&node) else {
            continue;
        };
        if switch_layer.contains_key(&switch_idx) {
            continue;
        }
        switch_layer.insert(switch_idx, layer);
        let Some(&node_idx) = node_index.get(&node) else {
            continue;
        };
        for edge in graph.edges(node_idx) {
            let next_name = &graph[edge.target()];
            queue.push_back((next_name.clone(), layer + 1));
        }
    }

    let mut layers: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (switch_idx, layer) in switch_layer {
        layers.entry(layer).or_default().push(switch_idx);
    }
    for indices in layers.values_mut() {
        indices.sort_unstable();
    }
    layers
}

fn is_boundary_left_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('L') else {
        return false;
    };
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "unit_tests/switch.rs"]
mod tests;
