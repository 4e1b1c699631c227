//! Recursive divide-and-conquer star network: one-hot and equal-to only.

use crate::attribute::{NodeAttribute, VariableNode};
use crate::error::{CompileError, Result};
use crate::switch::Switch;

use super::bubble_sort::raw_bubble_sort;
use super::NetworkConstructor;

/// Star network built by splitting the left boundary in half, routing each
/// half through a 2-switch into a fresh pair of auxiliary variables, and
/// recursing on each half against a correspondingly split slice of the
/// fixed right boundary. Bottoms out either at a threshold-sized naive
/// switch or, once only one `ALWAYS_ONE` (or one `ALWAYS_ZERO`) remains, a
/// bubble sort against the remaining fixed nodes.
///
/// Requires every right node to be `ALWAYS_ZERO` or `ALWAYS_ONE` and every
/// left node to be `ZERO_OR_ONE`; a `ZERO_OR_ONE` or `NOT_CARE` right node
/// has no representation in this topology (see [`super::NetworkType::supports_not_care`]).
pub struct DivideAndConquer {
    pub threshold: Option<usize>,
}

impl NetworkConstructor for DivideAndConquer {
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        _threshold: Option<usize>,
        _reverse: bool,
    ) -> Result<Vec<Switch>> {
        recurse(left, right, self.threshold)
    }
}

fn recurse(
    left: &[VariableNode],
    right: &[VariableNode],
    threshold: Option<usize>,
) -> Result<Vec<Switch>> {
    if left.len() != right.len() {
        return Err(CompileError::IllFormedNetwork(
            "divide-and-conquer requires equal-length left and right boundaries".into(),
        ));
    }
    let num_variables = left.len();

    let mut always_zero = Vec::new();
    let mut always_one = Vec::new();
    for node in right {
        match node.attribute {
            NodeAttribute::AlwaysZero => always_zero.push(node.clone()),
            NodeAttribute::AlwaysOne => always_one.push(node.clone()),
            NodeAttribute::ZeroOrOne | NodeAttribute::NotCare => {
                return Err(CompileError::InvalidParameter(
                    "divide-and-conquer network requires an all-fixed right boundary (only ALWAYS_ZERO/ALWAYS_ONE)"
                        .into(),
                ));
            }
        }
    }
    if left.iter().any(|n| n.attribute != NodeAttribute::ZeroOrOne) {
        return Err(CompileError::InvalidParameter(
            "divide-and-conquer network requires a free (ZERO_OR_ONE) left boundary".into(),
        ));
    }

    if always_zero.len() == num_variables || always_one.len() == num_variables {
        return Ok(left
            .iter()
            .zip(right.iter())
            .map(|(l, r)| Switch::new([l.name.clone()], [r.name.clone()], 0, 0))
            .collect());
    }

    if always_one.len() == 1 {
        let mut ordered = always_zero.clone();
        ordered.extend(always_one.clone());
        return raw_bubble_sort(left, &ordered);
    }
    if always_zero.len() == 1 {
        let mut ordered = always_one.clone();
        ordered.extend(always_zero.clone());
        return raw_bubble_sort(left, &ordered);
    }

    if let Some(t) = threshold {
        if num_variables <= t {
            let l: Vec<String> = left.iter().map(|n| n.name.clone()).collect();
            let r: Vec<String> = right.iter().map(|n| n.name.clone()).collect();
            return Ok(vec![Switch::new(l, r, 0, 0)]);
        }
    }

    let half = num_variables.div_ceil(2);
    let mut aux_nodes: Vec<VariableNode> = left
        .iter()
        .enumerate()
        .map(|(i, n)| VariableNode::new(format!("{}_{i}", n.name), NodeAttribute::ZeroOrOne))
        .collect();

    let mut switches = Vec::new();
    for i in 0..num_variables / 2 {
        switches.push(Switch::new(
            [left[i].name.clone(), left[i + half].name.clone()],
            [aux_nodes[i].name.clone(), aux_nodes[i + half].name.clone()],
            0,
            0,
        ));
    }
    if num_variables % 2 == 1 {
        aux_nodes[num_variables / 2] = left[num_variables / 2].clone();
    }

    let ones_half = always_one.len().div_ceil(2);
    let zeros_first = half - ones_half;
    let (ones_first, ones_rest) = always_one.split_at(ones_half);
    let (zeros_first_part, zeros_rest) = always_zero.split_at(zeros_first);

    let mut right_first: Vec<VariableNode> = ones_first.to_vec();
    right_first.extend(zeros_first_part.iter().cloned());
    let mut right_rest: Vec<VariableNode> = ones_rest.to_vec();
    right_rest.extend(zeros_rest.iter().cloned());

    switches.extend(recurse(&aux_nodes[..half], &right_first, threshold)?);
    switches.extend(recurse(&aux_nodes[half..], &right_rest, threshold)?);
    Ok(switches)
}

#[cfg(test)]
#[path = "../unit_tests/networks_divide_and_conquer.rs"]
mod tests;
