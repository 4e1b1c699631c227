//! Deterministic internal node-name synthesis.
//!
//! Every network constructor needs to mint fresh node names for the wires it
//! introduces between the left and right boundary. The original
//! implementation spread ad-hoc `format!`-style naming across each
//! constructor; here it is centralized so that two constructors invoked in
//! the same process (or the same recursive call tree) never collide, and so
//! that naming is reproducible given the same inputs.

/// Generates fresh, collision-free internal node names for one constructor
/// invocation.
///
/// A `NameGenerator` is local to a single [`crate::networks::NetworkConstructor::build`]
/// call (including its recursive sub-calls); it carries no process-global
/// state, so concurrent calls never interfere.
#[derive(Debug, Default)]
pub struct NameGenerator {
    counter: usize,
}

impl NameGenerator {
    /// Create a fresh generator.
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Mint a fresh name built from a human-readable tag, guaranteed unique
    /// within this generator's lifetime.
    pub fn fresh(&mut self, tag: &str) -> String {
        let name = format!("{tag}_{}", self.counter);
        self.counter += 1;
        name
    }

    /// Name an intermediate wire between two named stages, e.g. the bubble
    /// sort network's `L0_3_R0` chain nodes.
    pub fn chain_node(left: &str, step: usize, right: &str) -> String {
        format!("{left}_{step}_{right}")
    }

    /// Name a Clos middle-stage node: the nearest boundary name clamped into
    /// range, suffixed with the global interior index. Matches
    /// `clos_network_base.py`'s naming so recursive sub-networks never
    /// collide without requiring a shared registry.
    pub fn interior_node(nearby_boundary_name: &str, global_index: usize) -> String {
        format!("{nearby_boundary_name}_{global_index}")
    }
}

#[cfg(test)]
#[path = "unit_tests/names.rs"]
mod tests;
