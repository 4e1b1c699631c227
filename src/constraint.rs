//! Constraint front-end (component E): maps a constraint kind and
//! parameters to the boundary attribute pattern consumed by the network
//! constructors and the simplification driver, then drives the whole
//! pipeline through to a prefixed switch list.

use std::collections::BTreeSet;

use crate::attribute::{NodeAttribute, VariableNode};
use crate::error::{CompileError, Result};
use crate::networks::{build_raw_network, NetworkType};
use crate::prefix::{apply_prefix, next_default_prefix};
use crate::simplify::simplify;
use crate::switch::Switch;

/// The linear cardinality constraint shapes the front-end understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintType {
    /// Exactly one of N variables is 1.
    OneHot,
    /// Exactly `c1` of N variables are 1.
    EqualTo,
    /// At most `c1` of N variables are 1.
    LessEqual,
    /// At least `c1` of N variables are 1.
    GreaterEqual,
    /// Between `c1` and `c2` (inclusive) of N variables are 1.
    Clamp,
}

impl ConstraintType {
    /// True if this constraint kind's boundary pattern can include a
    /// `NOT_CARE` node (every kind but `ONE_HOT`/`EQUAL_TO`).
    pub fn needs_not_care(self) -> bool {
        matches!(
            self,
            ConstraintType::LessEqual | ConstraintType::GreaterEqual | ConstraintType::Clamp
        )
    }
}

fn right_attribute(
    kind: ConstraintType,
    n: usize,
    i: usize,
    c1: Option<i64>,
    c2: Option<i64>,
) -> Result<NodeAttribute> {
    let n = n as i64;
    let i = i as i64;
    match kind {
        ConstraintType::OneHot => Ok(if i < n - 1 {
            NodeAttribute::AlwaysZero
        } else {
            NodeAttribute::AlwaysOne
        }),
        ConstraintType::EqualTo => {
            let k = require_param(c1, "EQUAL_TO requires c1")?;
            if !(0..=n).contains(&k) {
                return Err(CompileError::InvalidParameter(format!(
                    "EQUAL_TO requires 0 <= c1 <= {n}, got {k}"
                )));
            }
            Ok(if i < n - k {
                NodeAttribute::AlwaysZero
            } else {
                NodeAttribute::AlwaysOne
            })
        }
        ConstraintType::LessEqual => {
            let k = require_param(c1, "LESS_EQUAL requires c1")?;
            if !(k > 0 && k <= n) {
                return Err(CompileError::InvalidParameter(format!(
                    "LESS_EQUAL requires 0 < c1 <= {n}, got {k}"
                )));
            }
            Ok(if i < n - k {
                NodeAttribute::AlwaysZero
            } else {
                NodeAttribute::NotCare
            })
        }
        ConstraintType::GreaterEqual => {
            let k = require_param(c1, "GREATER_EQUAL requires c1")?;
            if !(0..n).contains(&k) {
                return Err(CompileError::InvalidParameter(format!(
                    "GREATER_EQUAL requires 0 <= c1 < {n}, got {k}"
                )));
            }
            Ok(if i < n - k {
                NodeAttribute::NotCare
            } else {
                NodeAttribute::AlwaysOne
            })
        }
        ConstraintType::Clamp => {
            let k1 = require_param(c1, "CLAMP requires c1")?;
            let k2 = require_param(c2, "CLAMP requires c2")?;
            if !(0 <= k1 && k1 <= k2 && k2 <= n) {
                return Err(CompileError::InvalidParameter(format!(
                    "CLAMP requires 0 <= c1 <= c2 <= {n}, got c1={k1}, c2={k2}"
                )));
            }
            Ok(if i < n - k2 {
                NodeAttribute::AlwaysZero
            } else if i < n - k1 {
                NodeAttribute::NotCare
            } else {
                NodeAttribute::AlwaysOne
            })
        }
    }
}

fn require_param(value: Option<i64>, message: &str) -> Result<i64> {
    value.ok_or_else(|| CompileError::InvalidParameter(message.to_string()))
}

/// Build the left/right boundary node lists for `variables` under `kind`,
/// optionally padding both boundaries up to the next power of two (the
/// requirement of [`NetworkType::requires_power_of_two_width`]).
pub fn initial_boundary(
    variables: &[String],
    kind: ConstraintType,
    c1: Option<i64>,
    c2: Option<i64>,
    pad_to_power_of_two: bool,
) -> Result<(Vec<VariableNode>, Vec<VariableNode>)> {
    let original_size = variables.len();
    let target_size = if pad_to_power_of_two && original_size > 0 {
        original_size.next_power_of_two()
    } else {
        original_size
    };
    let pad_len = target_size - original_size;

    let mut left = Vec::with_capacity(target_size);
    for i in 0..pad_len {
        left.push(VariableNode::new(format!("L{i}"), NodeAttribute::AlwaysZero));
    }
    for v in variables {
        left.push(VariableNode::new(v.clone(), NodeAttribute::ZeroOrOne));
    }

    let mut right = Vec::with_capacity(target_size);
    for i in 0..pad_len {
        right.push(VariableNode::new(format!("R{i}"), NodeAttribute::AlwaysZero));
    }
    for i in 0..original_size {
        let attribute = right_attribute(kind, original_size, i, c1, c2)?;
        right.push(VariableNode::new(format!("R{}", pad_len + i), attribute));
    }

    Ok((left, right))
}

/// Compile a linear cardinality constraint over `variables` into a prefixed,
/// simplified switch list using the given network topology.
///
/// `var_prefix` names the prefix applied to every auxiliary (non-user)
/// variable the network introduces, so that several constraints' switches
/// can be merged into one QUBO without name collisions; `None` draws the
/// next prefix from the process-wide counter (see [`crate::prefix`]).
#[allow(clippy::too_many_arguments)]
pub fn build_switches(
    variables: &[String],
    kind: ConstraintType,
    network: NetworkType,
    c1: Option<i64>,
    c2: Option<i64>,
    threshold: Option<usize>,
    reverse: bool,
    var_prefix: Option<&str>,
) -> Result<Vec<Switch>> {
    if kind.needs_not_care() && !network.supports_not_care() {
        return Err(CompileError::InvalidParameter(format!(
            "{kind:?} requires a NOT_CARE-capable topology; {network:?} does not support one"
        )));
    }

    let (left, right) = initial_boundary(variables, kind, c1, c2, network.requires_power_of_two_width())?;
    let raw = build_raw_network(network, &left, &right, threshold, reverse)?;
    let simplified = simplify(&raw, &right, reverse)?;

    let prefix = var_prefix
        .map(str::to_string)
        .unwrap_or_else(next_default_prefix);
    let original: BTreeSet<&str> = variables.iter().map(String::as_str).collect();
    Ok(apply_prefix(&simplified, &original, &prefix))
}

#[cfg(test)]
#[path = "unit_tests/constraint.rs"]
mod tests;
