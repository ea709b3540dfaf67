pub mod prelude {
    pub use super::{equals, Formula};
}

use serde::{Deserialize, Serialize};

/// The Formula represents a propositional formula as a finite, immutable tree.
///
/// Formulas are compared structurally, never by identity. Tactics only ever clone sub-formulas
/// out of an existing tree, so no proof step makes a formula deeper than the problem's own.
///
/// # Example
/// ```text
/// P → (Q → P)
/// P ∧ Q → P
/// ¬(P ∨ Q)
/// ```
///
/// In a catalogue file the same tree is written in its externally tagged form:
/// ```toml
/// target = { implies = [{ var = "P" }, { var = "P" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// An atomic proposition, identified by its name.
    Var(String),
    Implies(Box<Formula>, Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Not(Box<Formula>),
}

impl Formula {
    /// Creates a new atomic proposition with the given name.
    pub fn var<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Formula::Var(name.into())
    }

    /// Creates the implication `left → right`.
    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    /// Creates the conjunction `left ∧ right`.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// Creates the disjunction `left ∨ right`.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// Creates the negation `¬inner`.
    pub fn negate(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    /// Returns the antecedent and consequent if this formula is an implication.
    pub fn as_implies(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Implies(left, right) => Some((&**left, &**right)),
            _ => None,
        }
    }

    /// Returns both conjuncts if this formula is a conjunction.
    pub fn as_and(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::And(left, right) => Some((&**left, &**right)),
            _ => None,
        }
    }

    /// Returns both disjuncts if this formula is a disjunction.
    pub fn as_or(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Or(left, right) => Some((&**left, &**right)),
            _ => None,
        }
    }

    /// Human readable name of the top-level connective, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Formula::Var(_) => "variable",
            Formula::Implies(_, _) => "implication",
            Formula::And(_, _) => "conjunction",
            Formula::Or(_, _) => "disjunction",
            Formula::Not(_) => "negation",
        }
    }
}

/// equals reports whether two formulas are structurally identical.
///
/// Variant tags must match and all sub-formulas must be equal recursively; variables compare
/// by name. This is exactly the derived `PartialEq`, so `a == b` can be used interchangeably.
pub fn equals(a: &Formula, b: &Formula) -> bool {
    a == b
}
