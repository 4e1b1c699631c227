//! Triangular bubble-sort comparator network.

use crate::attribute::VariableNode;
use crate::error::{CompileError, Result};
use crate::names::NameGenerator;
use crate::switch::Switch;

use super::NetworkConstructor;

/// Bubble-sort switching network: `N(N-1)/2` two-sorter switches arranged in
/// the standard triangular comparator schedule. Each wire `i` passes through
/// a chain of intermediate nodes named `{left_i}_{j}_{right_i}`. This is the
/// only constructor that locally enforces just a *permutation* — each
/// two-sorter leaves which of its two inputs lands left and which lands
/// right unconstrained — so it is the one topology that natively supports a
/// `NotCare` right boundary (the simplification driver turns the
/// permutation into a sorter once it sees the target shape).
pub struct BubbleSort;

impl NetworkConstructor for BubbleSort {
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        _threshold: Option<usize>,
        _reverse: bool,
    ) -> Result<Vec<Switch>> {
        raw_bubble_sort(left, right)
    }
}

/// The raw (pre-simplification) bubble-sort comparator schedule, reusable by
/// [`super::divide_and_conquer::DivideAndConquer`] for its one-hot case.
pub(super) fn raw_bubble_sort(
    left: &[VariableNode],
    right: &[VariableNode],
) -> Result<Vec<Switch>> {
    let left_names: Vec<&str> = left.iter().map(|n| n.name.as_str()).collect();
    let right_names: Vec<&str> = right.iter().map(|n| n.name.as_str()).collect();
    if left_names.len() != right_names.len() {
        return Err(CompileError::IllFormedNetwork(
            "bubble sort requires equal-length left and right boundaries".into(),
        ));
    }
    let n = left_names.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    // Each wire i owns a chain of names: left_i, a run of intermediate
    // nodes, right_i. Wire i needs 2*(N-1-i) intermediates when i > 0, or
    // N-2 when i == 0 (the leftmost wire participates in every column).
    let mut wires: Vec<Vec<String>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut chain = vec![left_names[i].to_string()];
        let intermediates = if i > 0 { (n - 1 - i) * 2 } else { n.saturating_sub(2) };
        for j in 0..intermediates {
            chain.push(NameGenerator::chain_node(left_names[i], j, right_names[i]));
        }
        chain.push(right_names[i].to_string());
        wires.push(chain);
    }

    let mut progress = vec![0usize; n];
    let mut switches = Vec::new();
    let columns: Vec<usize> = (1..n).chain((1..n.saturating_sub(1)).rev()).collect();
    for i in columns {
        let mut j = 0;
        while j < i {
            let k1 = i - j;
            let k2 = i - j - 1;
            switches.push(Switch::new(
                [wires[k1][progress[k1]].clone(), wires[k2][progress[k2]].clone()],
                [
                    wires[k1][progress[k1] + 1].clone(),
                    wires[k2][progress[k2] + 1].clone(),
                ],
                0,
                0,
            ));
            progress[k1] += 1;
            progress[k2] += 1;
            j += 2;
        }
    }
    Ok(switches)
}

#[cfg(test)]
#[path = "../unit_tests/networks_bubble_sort.rs"]
mod tests;
