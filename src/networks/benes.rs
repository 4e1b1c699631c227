//! Recursive Beneš network: the Clos template with exterior width pinned
//! to 2.

use crate::attribute::VariableNode;
use crate::error::Result;
use crate::switch::Switch;

use super::clos::clos_recursive;
use super::NetworkConstructor;

/// Beneš network. Base case `N <= 2` is a single switch; otherwise
/// `(n, r) = (2, r)` with `r` the smallest power of two such that
/// `2*r >= N`, giving ingress/egress stages of `r` width-2 switches around
/// a middle stage of two size-`r` sub-networks.
pub struct Benes;

impl NetworkConstructor for Benes {
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
            &|l, r| {
                let n = l.len().max(r.len());
                if n <= 2 {
                    Some(vec![Switch::new(l.to_vec(), r.to_vec(), 0, 0)])
                } else {
                    None
                }
            },
            &|n_left, n_right| {
                let n_size = n_left.max(n_right);
                let mut r = 1usize;
                while 2 * r < n_size {
                    r *= 2;
                }
                (2, r)
            },
        )
    }
}

#[cfg(test)]
#[path = "../unit_tests/networks_benes.rs"]
mod tests;
