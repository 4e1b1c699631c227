//! The QUBO record and its accumulation from switches (component F).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Bound on the coefficient type a [`Qubo`] can carry.
///
/// The crate's own constructors only ever produce `Qubo<i64>` (per the
/// integer-coefficient guarantee of [`crate::switch::Switch::accumulate_into`]);
/// this trait exists so a caller can `map` the result into `f64` once a
/// Lagrange multiplier is applied, without the crate needing to know about
/// that multiplier.
pub trait Coefficient:
    Clone
    + Default
    + PartialEq
    + num_traits::Zero
    + num_traits::One
    + std::ops::Add<Output = Self>
    + std::ops::AddAssign
    + std::ops::Neg<Output = Self>
    + std::ops::Mul<Output = Self>
    + 'static
{
}

impl<T> Coefficient for T where
    T: Clone
        + Default
        + PartialEq
        + num_traits::Zero
        + num_traits::One
        + std::ops::Add<Output = T>
        + std::ops::AddAssign
        + std::ops::Neg<Output = T>
        + std::ops::Mul<Output = T>
        + 'static
{
}

/// An unordered pair of distinct variable names, canonicalized so
/// `{a, b} == {b, a}`.
pub type Pair = (String, String);

fn canonical_pair(a: &str, b: &str) -> Pair {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// A Quadratic Unconstrained Binary Optimization objective:
/// `constant + sum_v linear[v]*v + sum_{u,v} quadratic[{u,v}]*u*v`.
///
/// `quadratic` is sparse and keyed by unordered pairs; the pair `{v, v}`
/// never appears (a self-term folds into `linear[v]` because `v*v = v` for
/// binary `v`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qubo<T = i64> {
    variables: BTreeSet<String>,
    linear: BTreeMap<String, T>,
    quadratic: BTreeMap<Pair, T>,
    constant: T,
}

impl<T: Coefficient> Default for Qubo<T> {
    fn default() -> Self {
        Self {
            variables: BTreeSet::new(),
            linear: BTreeMap::new(),
            quadratic: BTreeMap::new(),
            constant: T::zero(),
        }
    }
}

impl<T: Coefficient> Qubo<T> {
    /// An empty objective (the zero polynomial).
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of variables appearing in this objective.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    /// The linear coefficient of `v`, or zero if absent.
    pub fn linear_coeff(&self, v: &str) -> T {
        self.linear.get(v).cloned().unwrap_or_else(T::zero)
    }

    /// The quadratic coefficient of the unordered pair `{u, v}`, or zero if
    /// absent. Returns zero for `u == v` (self-terms are not represented).
    pub fn quadratic_coeff(&self, u: &str, v: &str) -> T {
        if u == v {
            return T::zero();
        }
        self.quadratic
            .get(&canonical_pair(u, v))
            .cloned()
            .unwrap_or_else(T::zero)
    }

    /// The constant term.
    pub fn constant(&self) -> &T {
        &self.constant
    }

    /// Iterate over `(variable, coefficient)` linear terms.
    pub fn linear_terms(&self) -> impl Iterator<Item = (&str, &T)> {
        self.linear.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over `((u, v), coefficient)` quadratic terms, `u < v`.
    pub fn quadratic_terms(&self) -> impl Iterator<Item = (&Pair, &T)> {
        self.quadratic.iter()
    }

    /// Number of distinct variable pairs with a nonzero quadratic term.
    pub fn num_quadratic_terms(&self) -> usize {
        self.quadratic.len()
    }

    /// Ensure a variable is present, defaulting its linear coefficient to
    /// zero if new.
    pub(crate) fn touch(&mut self, v: &str) {
        self.variables.insert(v.to_string());
    }

    /// Add `delta` to the linear coefficient of `v`.
    pub(crate) fn add_linear(&mut self, v: &str, delta: T) {
        self.touch(v);
        let entry = self.linear.entry(v.to_string()).or_insert_with(T::zero);
        *entry += delta;
    }

    /// Add `delta` to the quadratic coefficient of `{u, v}`. No-op if
    /// `u == v` (self-terms are absorbed elsewhere).
    pub(crate) fn add_quadratic(&mut self, u: &str, v: &str, delta: T) {
        if u == v {
            return;
        }
        self.touch(u);
        self.touch(v);
        let entry = self
            .quadratic
            .entry(canonical_pair(u, v))
            .or_insert_with(T::zero);
        *entry += delta;
    }

    /// Add `delta` to the constant term.
    pub(crate) fn add_constant(&mut self, delta: T) {
        self.constant = self.constant.clone() + delta;
    }

    /// Merge `other` into `self`, adding coefficients term by term. Used to
    /// verify property 4 (switch-to-QUBO linearity): reducing a
    /// concatenation of two switch lists equals reducing each separately and
    /// summing.
    pub fn merge(&mut self, other: &Qubo<T>) {
        for v in &other.variables {
            self.touch(v);
        }
        for (v, c) in &other.linear {
            self.add_linear(v, c.clone());
        }
        for ((u, v), c) in &other.quadratic {
            self.add_quadratic(u, v, c.clone());
        }
        self.add_constant(other.constant.clone());
    }

    /// Evaluate the objective at a 0/1 assignment. Variables not present in
    /// `assignment` are treated as 0.
    pub fn evaluate(&self, assignment: &std::collections::BTreeMap<String, bool>) -> T {
        let bit = |v: &str| -> T {
            if assignment.get(v).copied().unwrap_or(false) {
                T::one()
            } else {
                T::zero()
            }
        };
        let mut value = self.constant.clone();
        for (v, c) in &self.linear {
            value += c.clone() * bit(v);
        }
        for ((u, v), c) in &self.quadratic {
            value += c.clone() * bit(u) * bit(v);
        }
        value
    }
}

#[cfg(test)]
#[path = "unit_tests/qubo.rs"]
mod tests;
