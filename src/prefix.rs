//! Auxiliary variable prefixing (§4.5): renames every switch variable the
//! network introduced (everything but the user's own variable names) so
//! several constraints' switches can be merged into one QUBO without
//! collisions.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::switch::Switch;

static DEFAULT_PREFIX_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Allocate the next default prefix (`C0`, `C1`, ...) from the process-wide
/// counter used when a caller passes `var_prefix: None` to
/// [`crate::constraint::build_switches`].
///
/// A module-scope counter is convenient but hostile to parallel use;
/// callers building constraints concurrently from multiple threads should
/// prefer their own [`PrefixContext`] instead.
pub fn next_default_prefix() -> String {
    let n = DEFAULT_PREFIX_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("C{n}")
}

/// Reset the default-prefix counter to 0.
///
/// Exposed solely for test determinism (so a test suite can assert on
/// exact prefix names run after run); resetting it in the middle of
/// building an unrelated model can reintroduce name collisions.
pub fn reset_prefix_counter() {
    DEFAULT_PREFIX_COUNTER.store(0, Ordering::Relaxed);
}

/// A caller-owned prefix counter, for code that builds many constraints
/// concurrently and wants prefixes scoped to its own instance instead of
/// racing on the process-wide counter.
#[derive(Debug, Default)]
pub struct PrefixContext {
    counter: AtomicUsize,
}

impl PrefixContext {
    /// Create a context whose counter starts at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next prefix (`C0`, `C1`, ...) from this context.
    pub fn next_prefix(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("C{n}")
    }
}

/// Rename every switch variable not present in `original_variables` to
/// `{prefix}_{name}`. User-supplied variable names are never renamed.
pub fn apply_prefix(switches: &[Switch], original_variables: &BTreeSet<&str>, prefix: &str) -> Vec<Switch> {
    let rename = |name: &String| -> String {
        if original_variables.contains(name.as_str()) {
            name.clone()
        } else {
            format!("{prefix}_{name}")
        }
    };
    switches
        .iter()
        .map(|s| {
            Switch::new(
                s.left.iter().map(|n| rename(n)),
                s.right.iter().map(|n| rename(n)),
                s.left_constant,
                s.right_constant,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "unit_tests/prefix.rs"]
mod tests;
