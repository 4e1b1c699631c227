//! Node attributes: the compile-time tags that drive simplification.

use serde::{Deserialize, Serialize};

/// Tag on a [`VariableNode`] indicating whether its value is fixed, free, or
/// irrelevant, for the purposes of the simplification driver in
/// [`crate::simplify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeAttribute {
    /// Free binary variable; participates in the resulting QUBO.
    ZeroOrOne,
    /// Forced to 0; foldable into a constant.
    AlwaysZero,
    /// Forced to 1; foldable into a constant.
    AlwaysOne,
    /// Unconstrained; may be erased once every downstream consumer is also
    /// `NotCare` and the switch's width permits it.
    NotCare,
}

impl NodeAttribute {
    /// True for `AlwaysZero` and `AlwaysOne`.
    pub fn is_fixed(self) -> bool {
        matches!(self, NodeAttribute::AlwaysZero | NodeAttribute::AlwaysOne)
    }
}

/// A named binary variable together with its current attribute.
///
/// The attribute is meaningful on the original left/right boundary and in
/// the simplification driver's bookkeeping; switches built by a
/// [`crate::networks::NetworkConstructor`] store only bare name sets
/// (see [`crate::switch::Switch`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableNode {
    /// Opaque, unique variable name.
    pub name: String,
    /// Current attribute.
    pub attribute: NodeAttribute,
}

impl VariableNode {
    /// Create a new node with the given name and attribute.
    pub fn new(name: impl Into<String>, attribute: NodeAttribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }

    /// Shorthand for a free binary variable.
    pub fn free(name: impl Into<String>) -> Self {
        Self::new(name, NodeAttribute::ZeroOrOne)
    }
}

#[cfg(test)]
#[path = "unit_tests/attribute.rs"]
mod tests;
