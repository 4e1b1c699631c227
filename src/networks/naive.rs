//! The naive constructor: one dense switch covering the whole boundary.

use crate::attribute::VariableNode;
use crate::error::Result;
use crate::switch::Switch;

use super::NetworkConstructor;

/// Realizes the constraint with a single switch connecting every left
/// variable to every right variable. Produces a complete bipartite graph of
/// quadratic terms after reduction — the baseline every other topology is
/// sparser than. Also useful as a fallback for callers who'd rather hand the
/// constraint to a vendor-supplied linear-constraint helper: that route and
/// `Naive` produce equivalent QUBOs up to a scalar factor.
pub struct Naive;

impl NetworkConstructor for Naive {
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        _threshold: Option<usize>,
        _reverse: bool,
    ) -> Result<Vec<Switch>> {
        let l: Vec<String> = left.iter().map(|n| n.name.clone()).collect();
        let r: Vec<String> = right.iter().map(|n| n.name.clone()).collect();
        Ok(vec![Switch::new(l, r, 0, 0)])
    }
}

#[cfg(test)]
#[path = "../unit_tests/networks_naive.rs"]
mod tests;
