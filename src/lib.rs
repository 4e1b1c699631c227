//! # cardinality-qubo
//!
//! Compiles linear cardinality constraints over binary variables (ONE_HOT,
//! EQUAL_TO, LESS_EQUAL, GREATER_EQUAL, CLAMP) into sparse Quadratic
//! Unconstrained Binary Optimization (QUBO) penalty functions, suitable for
//! Ising/annealing hardware.
//!
//! A naive encoding of a sum-equals-K constraint produces a complete graph
//! of O(N²) quadratic terms. This crate instead realizes the constraint as
//! a *switching network* — a directed multistage graph of small switches,
//! each locally asserting that the sum of its left variables equals the sum
//! of its right variables plus a constant — and folds away switches whose
//! outcome is already fixed, yielding a sparser QUBO.
//!
//! ## Example
//!
//! ```rust
//! use cardinality_qubo::prelude::*;
//!
//! let variables: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
//! let switches = build_switches(
//!     &variables,
//!     ConstraintType::OneHot,
//!     NetworkType::Naive,
//!     None,
//!     None,
//!     None,
//!     false,
//!     Some("aux"),
//! )
//! .unwrap();
//! let qubo = switches_to_qubo(&switches);
//! assert!(qubo.variables().len() >= variables.len());
//! ```
//!
//! ## Modules
//!
//! - [`attribute`]: the node algebra driving simplification.
//! - [`switch`]: the switch record and its reduction to a QUBO.
//! - [`simplify`]: the right-to-left constant-propagation pass.
//! - [`networks`]: the switching-network topologies.
//! - [`constraint`]: the constraint front-end tying the above together.
//! - [`qubo`]: the QUBO objective type.
//! - [`prefix`]: auxiliary variable prefixing.
//! - [`error`]: the crate's error and result types.

pub mod attribute;
pub mod constraint;
pub mod error;
pub mod names;
pub mod networks;
pub mod prefix;
pub mod qubo;
pub mod simplify;
pub mod switch;

#[cfg(test)]
pub(crate) mod testing;

pub use constraint::{build_switches, ConstraintType};
pub use error::{CompileError, Result};
pub use networks::{ClosNetworkMaxDegree, ClosNetworkMinEdge, NetworkType};
pub use prefix::reset_prefix_counter;
pub use switch::switches_to_qubo;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::attribute::{NodeAttribute, VariableNode};
    pub use crate::constraint::{build_switches, ConstraintType};
    pub use crate::error::{CompileError, Result};
    pub use crate::networks::{ClosNetworkMaxDegree, ClosNetworkMinEdge, NetworkType};
    pub use crate::prefix::{reset_prefix_counter, PrefixContext};
    pub use crate::qubo::Qubo;
    pub use crate::switch::{switches_to_qubo, Switch};
}
