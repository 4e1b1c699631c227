//! Batcher's odd-even merge sorting network.

use std::collections::HashMap;

use crate::attribute::VariableNode;
use crate::error::{CompileError, Result};
use crate::switch::Switch;

use super::NetworkConstructor;

/// Batcher odd-even mergesort: same wire count and switch count as
/// [`super::bitonic_sort::BitonicSort`], but a different internal stage
/// layout. Built over synthetic `{wire}_{step}` coordinates and remapped to
/// boundary names afterward, since the recursive merge structure doesn't
/// naturally align with either boundary until the very first and last step
/// of each wire. `reverse` defaults to `true` here (the only constructor
/// whose raw generation differs by default) to match the upstream
/// reference; [`crate::constraint::build_switches`] always passes an
/// explicit value, so this default never surfaces publicly.
pub struct OddEvenMergeSort;

impl NetworkConstructor for OddEvenMergeSort {
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
                "odd-even merge sort requires equal-length left and right boundaries".into(),
            ));
        }
        let n = left_names.len();
        let log2n = n.trailing_zeros() as usize;
        if n == 0 || (1usize << log2n) != n {
            return Err(CompileError::InvalidParameter(format!(
                "odd-even merge sort requires a power-of-two boundary width, got {n}"
            )));
        }

        if !reverse {
            std::mem::swap(&mut left_names, &mut right_names);
        }

        // Each wire i carries a chain of synthetic coordinates "{i}_{step}".
        // A comparator between wires i and j=i+step reads both wires' current
        // coordinate and writes both wires' next coordinate, so every channel
        // is a genuine 2-node-to-2-node switch, not a 1-1 edge.
        let mut progress = vec![0usize; n];
        let mut channels: Vec<([String; 2], [String; 2])> = Vec::new();
        for m_max in (1..=log2n).rev() {
            let step_max = 1isize << m_max;
            let mut i_base = 0isize;
            while i_base < n as isize {
                for m in 0..m_max {
                    let step = 1isize << m;
                    // `i_start` can be legitimately negative here (the
                    // innermost stage of each i_base block looks one step
                    // behind it); the block of negative i's is always the
                    // 0th (even) block in the parity check below, so it
                    // never contributes a channel and can be skipped by
                    // starting the loop at 0 while still using the true,
                    // possibly-negative `i_start` for the parity check.
                    let i_start = if m < m_max - 1 { i_base } else { i_base - step };
                    let i_end = i_base + step_max - step;
                    let mut i = i_start.max(0);
                    while i < i_end {
                        if ((i - i_start) / step) % 2 == 1 {
                            let wire_i = i as usize;
                            let wire_j = (i + step) as usize;
                            channels.push((
                                [
                                    format!("{wire_i}_{}", progress[wire_i]),
                                    format!("{wire_j}_{}", progress[wire_j]),
                                ],
                                [
                                    format!("{wire_i}_{}", progress[wire_i] + 1),
                                    format!("{wire_j}_{}", progress[wire_j] + 1),
                                ],
                            ));
                            progress[wire_i] += 1;
                            progress[wire_j] += 1;
                        }
                        i += 1;
                    }
                }
                i_base += step_max;
            }
        }

        let mut rename: HashMap<String, String> = HashMap::new();
        for i in 0..n {
            for j in 0..=progress[i] {
                let key = format!("{i}_{j}");
                let value = if j == 0 {
                    left_names[i].clone()
                } else if j == progress[i] {
                    right_names[i].clone()
                } else {
                    format!("{}_{}_{}", left_names[i], j - 1, right_names[i])
                };
                rename.insert(key, value);
            }
        }

        if reverse {
            Ok(channels
                .into_iter()
                .map(|(l, r)| {
                    Switch::new(
                        l.iter().map(|k| rename[k].clone()),
                        r.iter().map(|k| rename[k].clone()),
                        0,
                        0,
                    )
                })
                .collect())
        } else {
            let mut switches: Vec<Switch> = channels
                .into_iter()
                .map(|(l, r)| {
                    Switch::new(
                        r.iter().map(|k| rename[k].clone()),
                        l.iter().map(|k| rename[k].clone()),
                        0,
                        0,
                    )
                })
                .collect();
            switches.reverse();
            Ok(switches)
        }
    }
}

#[cfg(test)]
#[path = "../unit_tests/networks_oddeven_merge_sort.rs"]
mod tests;
