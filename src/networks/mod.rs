//! Network constructors (component C): one module per switching-network
//! topology, plus the [`NetworkType`] dispatch table.

mod benes;
mod bitonic_sort;
mod bubble_sort;
mod clos;
mod divide_and_conquer;
mod naive;
mod oddeven_merge_sort;

pub use clos::{ClosNetworkMaxDegree, ClosNetworkMinEdge};

use serde::{Deserialize, Serialize};

use crate::attribute::VariableNode;
use crate::error::Result;
use crate::switch::Switch;

/// Closed enumeration of supported switching-network topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    /// One dense switch covering all boundary variables.
    Naive,
    /// Recursive Beneš network.
    Benes,
    /// Batcher's bitonic sorting network.
    BitonicSort,
    /// Triangular bubble-sort comparator network.
    BubbleSort,
    /// Recursive Clos network, minimizing switch count for a bounded fan-in.
    ClosNetworkMaxDegree,
    /// Recursive Clos network, minimizing logical quadratic edge count.
    ClosNetworkMinEdge,
    /// Recursive divide-and-conquer star network (one-hot / equal-to only).
    DivideAndConquer,
    /// Batcher's odd-even merge sorting network.
    OddEvenMergeSort,
}

impl NetworkType {
    /// Whether this topology requires the boundary width to be a power of
    /// two (the front-end pads to the next power of two when this is set).
    pub fn requires_power_of_two_width(self) -> bool {
        matches!(
            self,
            NetworkType::Benes | NetworkType::BitonicSort | NetworkType::OddEvenMergeSort
        )
    }

    /// Whether this topology can realize a right boundary containing
    /// `NotCare` attributes directly (without the caller routing inequality
    /// constraints through a different topology first).
    pub fn supports_not_care(self) -> bool {
        !matches!(self, NetworkType::DivideAndConquer)
    }
}

/// Common interface implemented by every network topology.
///
/// `build` returns the *raw* (pre-simplification) switch list whose
/// leftmost frontier is `left` and whose rightmost frontier is `right`.
/// `threshold` and `reverse` are accepted uniformly; a constructor that has
/// no use for one of them simply ignores it (see `SPEC_FULL.md` §4.4 for
/// which constructors use which).
pub trait NetworkConstructor {
    /// Build the raw switch list for this topology between `left` and
    /// `right`, which must have equal length.
    fn build(
        &self,
        left: &[VariableNode],
        right: &[VariableNode],
        threshold: Option<usize>,
        reverse: bool,
    ) -> Result<Vec<Switch>>;
}

/// Dispatch to the constructor named by `network`, building the raw switch
/// list. Exposed for callers who want the pre-simplification network (e.g.
/// for layer-structure diagnostics); most callers should use
/// [`crate::constraint::build_switches`] instead, which also runs
/// simplification and prefixing.
pub fn build_raw_network(
    network: NetworkType,
    left: &[VariableNode],
    right: &[VariableNode],
    threshold: Option<usize>,
    reverse: bool,
) -> Result<Vec<Switch>> {
    match network {
        NetworkType::Naive => naive::Naive.build(left, right, threshold, reverse),
        NetworkType::BubbleSort => bubble_sort::BubbleSort.build(left, right, threshold, reverse),
        NetworkType::BitonicSort => bitonic_sort::BitonicSort.build(left, right, threshold, reverse),
        NetworkType::OddEvenMergeSort => {
            oddeven_merge_sort::OddEvenMergeSort.build(left, right, threshold, reverse)
        }
        NetworkType::Benes => benes::Benes.build(left, right, threshold, reverse),
        NetworkType::ClosNetworkMaxDegree => {
            clos::default_max_degree_constructor(|c| c.build(left, right, threshold, reverse))
        }
        NetworkType::ClosNetworkMinEdge => {
            clos::default_min_edge_constructor(|c| c.build(left, right, threshold, reverse))
        }
        NetworkType::DivideAndConquer => {
            divide_and_conquer::DivideAndConquer { threshold }.build(left, right, threshold, reverse)
        }
    }
}

#[cfg(test)]
#[path = "../unit_tests/networks_dispatch.rs"]
mod tests;
