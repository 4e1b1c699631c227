//! Brute-force QUBO minimization, used only to cross-check network
//! constructors against an exhaustive oracle in tests. Not part of the
//! public API: the module is gated behind `#[cfg(test)]` in `lib.rs` so it
//! never ships in a release build, the way the teacher's own brute-force
//! solver is reserved for verification rather than production solving.

use std::collections::BTreeMap;

use crate::qubo::Qubo;

/// Enumerate every 0/1 assignment of `variables` and return one attaining
/// the minimum value of `qubo`, together with that value.
///
/// Exponential in `variables.len()`; only suitable for the handful of
/// variables exercised by a unit or integration test.
pub fn brute_force_minimum(qubo: &Qubo<i64>, variables: &[String]) -> (BTreeMap<String, bool>, i64) {
    let n = variables.len();
    assert!(n <= 20, "brute_force_minimum is exponential; keep test instances small");

    let mut best: Option<(BTreeMap<String, bool>, i64)> = None;
    for mask in 0u64..(1u64 << n) {
        let assignment: BTreeMap<String, bool> = variables
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), (mask >> i) & 1 == 1))
            .collect();
        let value = qubo.evaluate(&assignment);
        let is_better = best.as_ref().map(|(_, best_value)| value < *best_value).unwrap_or(true);
        if is_better {
            best = Some((assignment, value));
        }
    }
    best.unwrap_or_else(|| (BTreeMap::new(), *qubo.constant()))
}
