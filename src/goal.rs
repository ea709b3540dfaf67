pub mod prelude {
    pub use super::{Goal, Hypothesis};
}

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::formula::Formula;

/// The Hypothesis represents a named formula assumed true inside a single goal.
///
/// Names only have meaning within the goal that holds them; the same name in two different
/// goals may refer to different formulas.
///
/// # Example
/// ```text
/// H1: P ∧ Q
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hypothesis {
    pub name: String,
    pub formula: Formula,
}

impl Hypothesis {
    /// Creates a new Hypothesis with the given name and formula.
    pub fn new<S>(name: S, formula: Formula) -> Self
    where
        S: Into<String>,
    {
        Hypothesis {
            name: name.into(),
            formula,
        }
    }
}

impl Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formula)
    }
}

/// The Goal represents a pending proof obligation: a target formula to be shown from an
/// ordered list of hypotheses.
///
/// Goals are values. Tactics never edit a goal; they build new ones with [`Goal::with_target`]
/// and [`Goal::assume`].
///
/// # Example
/// ```text
/// H1: P, H2: Q ⊢ P
/// ⊢ P → (Q → P)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    pub target: Formula,
}

impl Goal {
    /// Creates a new Goal with the given hypotheses and target.
    pub fn new(hypotheses: Vec<Hypothesis>, target: Formula) -> Self {
        Goal { hypotheses, target }
    }

    /// Creates a Goal with an empty context.
    pub fn from_target(target: Formula) -> Self {
        Goal::new(Vec::new(), target)
    }

    /// Returns the hypothesis with the given name, if it exists in this goal.
    pub fn hypothesis(&self, name: &str) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.name == name)
    }

    /// The name the next introduced hypothesis receives in this goal.
    ///
    /// It depends only on how many hypotheses the goal already holds, so replaying the same
    /// tactics from the same starting goal always produces the same names.
    pub fn next_hypothesis_name(&self) -> String {
        format!("H{}", self.hypotheses.len() + 1)
    }

    /// Returns a new goal with the same hypotheses and a different target.
    pub fn with_target(&self, target: Formula) -> Self {
        Goal::new(self.hypotheses.clone(), target)
    }

    /// Returns a new goal extended with one freshly named hypothesis and the given target.
    pub fn assume(&self, formula: Formula, target: Formula) -> Self {
        let mut hypotheses = self.hypotheses.clone();
        hypotheses.push(Hypothesis::new(self.next_hypothesis_name(), formula));

        Goal::new(hypotheses, target)
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hypotheses.is_empty() {
            return write!(f, "⊢ {}", self.target);
        }

        write!(
            f,
            "{} ⊢ {}",
            self.hypotheses
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            self.target
        )
    }
}
