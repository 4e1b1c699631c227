//! The right-to-left constant-propagation / simplification pass (component D).

use std::collections::{BTreeMap, BTreeSet};

use crate::attribute::{NodeAttribute, VariableNode};
use crate::error::{CompileError, Result};
use crate::switch::Switch;

/// Walk a raw switch list right-to-left, folding boundary attributes into
/// constants, detecting infeasibility, and emitting a simplified switch list.
///
/// `raw` is the constructor's output, ordered left-to-right (its rightmost
/// frontier must equal `right_boundary`'s names). `right_boundary` carries
/// the initial attributes. The traversal itself always runs right-to-left,
/// and `out` is accumulated in that order; with `reverse = false` (the
/// default) the switches therefore come back in the *reverse* of `raw`'s
/// input order, and only `reverse = true` flips `out` back to match `raw`'s
/// left-to-right order. Either way the *set* of emitted switches is
/// identical — `reverse` only controls orientation of the returned
/// sequence.
pub fn simplify(
    raw: &[Switch],
    right_boundary: &[VariableNode],
    reverse: bool,
) -> Result<Vec<Switch>> {
    let mut current_nodes: BTreeSet<String> =
        right_boundary.iter().map(|n| n.name.clone()).collect();
    let mut attr: BTreeMap<String, NodeAttribute> = right_boundary
        .iter()
        .map(|n| (n.name.clone(), n.attribute))
        .collect();
    let mut out: Vec<Switch> = Vec::new();

    for switch in raw.iter().rev() {
        // 1. Scheduling check.
        if !switch.right.is_subset(&current_nodes) {
            return Err(CompileError::IllFormedNetwork(format!(
                "switch right set {:?} is not a subset of the current frontier {:?}",
                switch.right, current_nodes
            )));
        }
        for r in &switch.right {
            current_nodes.remove(r);
        }

        // 2. Disjointness check.
        if !switch.left.is_disjoint(&current_nodes) {
            return Err(CompileError::IllFormedNetwork(format!(
                "switch left set {:?} collides with the current frontier {:?}",
                switch.left, current_nodes
            )));
        }
        current_nodes.extend(switch.left.iter().cloned());

        // 3. Bounds computation.
        let ones = switch
            .right
            .iter()
            .filter(|r| attr[r.as_str()] == NodeAttribute::AlwaysOne)
            .count() as i64;
        let non_zero = switch
            .right
            .iter()
            .filter(|r| attr[r.as_str()] != NodeAttribute::AlwaysZero)
            .count() as i64;
        let right_sum_min = ones + switch.right_constant - switch.left_constant;
        let right_sum_max = non_zero + switch.right_constant - switch.left_constant;
        let n = switch.left.len() as i64;

        if right_sum_max < 0 || right_sum_min > n {
            return Err(CompileError::Infeasible(format!(
                "switch {:?} requires right_sum in [{right_sum_min}, {right_sum_max}] \
                 but only {n} left variables are available",
                switch
            )));
        }

        // 4. Fold.
        if right_sum_min == n {
            // (a) every left node must be 1.
            for l in &switch.left {
                attr.insert(l.clone(), NodeAttribute::AlwaysOne);
                out.push(Switch::new([l.clone()], [], 0, 1));
            }
        } else if right_sum_max == 0 {
            // (b) every left node must be 0.
            for l in &switch.left {
                attr.insert(l.clone(), NodeAttribute::AlwaysZero);
                out.push(Switch::new([l.clone()], [], 0, 0));
            }
        } else if switch
            .right
            .iter()
            .all(|r| attr[r.as_str()] == NodeAttribute::NotCare)
            && right_sum_min <= 0
            && right_sum_max >= n
        {
            // (c) left nodes are entirely unconstrained.
            for l in &switch.left {
                attr.insert(l.clone(), NodeAttribute::NotCare);
            }
        } else {
            // (d) the switch stays, with fixed right nodes folded away.
            for l in &switch.left {
                attr.insert(l.clone(), NodeAttribute::ZeroOrOne);
            }
            let ones_in_right = switch
                .right
                .iter()
                .filter(|r| attr[r.as_str()] == NodeAttribute::AlwaysOne)
                .count() as i64;
            let kept_right: BTreeSet<String> = switch
                .right
                .iter()
                .filter(|r| !attr[r.as_str()].is_fixed())
                .cloned()
                .collect();
            out.push(Switch::new(
                switch.left.iter().cloned(),
                kept_right,
                switch.left_constant,
                switch.right_constant + ones_in_right,
            ));
        }
    }

    if reverse {
        out.reverse();
    }
    Ok(out)
}

#[cfg(test)]
#[path = "unit_tests/simplify.rs"]
mod tests;
