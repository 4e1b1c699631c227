//! Batcher's bitonic sorting network.

use crate::attribute::VariableNode;
use crate::error::{CompileError, Result};
use crate::names::NameGenerator;
use crate::switch::Switch;

use super::NetworkConstructor;

/// Batcher bitonic sort for `N` a power of two: `N*log2(N)*(log2(N)+1)/4`
/// two-sorters arranged in `log2(N)*(log2(N)+1)/2` comparator columns. The
/// `reverse` flag swaps which boundary is treated as the sort source and
/// mirrors every comparator's left/right orientation — a mirror image of
/// the same network, not a different topology.
pub struct BitonicSort;

impl NetworkConstructor for BitonicSort {
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        _threshold: Option<usize>,
        reverse: bool,
    ) -> Result<Vec<Switch>> {
        let mut left_names: Vec<String> = left.iter().map(|n| n.name.clone()).collect();
        let mut right_names: Vec<String> = right.iter().map(|n| n.name.clone()).collect();
        if left_names.len() != right_names.len() {
            return Err(CompileError::IllFormedNetwork(
                "bitonic sort requires equal-length left and right boundaries".into(),
            ));
        }
        let n = left_names.len();
        let log2n = n.trailing_zeros() as usize;
        if n == 0 || (1usize << log2n) != n {
            return Err(CompileError::InvalidParameter(format!(
                "bitonic sort requires a power-of-two boundary width, got {n}"
            )));
        }

        if !reverse {
            std::mem::swap(&mut left_names, &mut right_names);
        }

        let num_columns = log2n * (log2n + 1) / 2;
        let mut wires: Vec<Vec<String>> = Vec::with_capacity(n);
        for i in 0..n {
            let mut chain = vec![left_names[i].clone()];
            for j in 0..num_columns.saturating_sub(1) {
                chain.push(NameGenerator::chain_node(&left_names[i], j, &right_names[i]));
            }
            chain.push(right_names[i].clone());
            wires.push(chain);
        }

        let mut progress = vec![0usize; n];
        let mut switches = Vec::new();
        for m_max in (0..log2n).rev() {
            for m in 0..=m_max {
                let step = 1usize << m;
                for i in 0..n {
                    if (i / step) % 2 == 0 {
                        let j = i + step;
                        if reverse {
                            switches.push(Switch::new(
                                [wires[i][progress[i]].clone(), wires[j][progress[j]].clone()],
                                [
                                    wires[i][progress[i] + 1].clone(),
                                    wires[j][progress[j] + 1].clone(),
                                ],
                                0,
                                0,
                            ));
                        } else {
                            switches.push(Switch::new(
                                [
                                    wires[i][progress[i] + 1].clone(),
                                    wires[j][progress[j] + 1].clone(),
                                ],
                                [wires[i][progress[i]].clone(), wires[j][progress[j]].clone()],
                                0,
                                0,
                            ));
                        }
                        progress[i] += 1;
                        progress[j] += 1;
                    }
                }
            }
        }

        if reverse {
            Ok(switches)
        } else {
            switches.reverse();
            Ok(switches)
        }
    }
}

#[cfg(test)]
#[path = "../unit_tests/networks_bitonic_sort.rs"]
mod tests;
