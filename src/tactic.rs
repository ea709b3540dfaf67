//! The tactic engine.
//!
//! Every tactic is a pure function from a goal (and its parameters) to a [`TacticResult`]. A
//! tactic either fails with a diagnostic and no goals, replaces the goal with one or two new
//! goals, or closes it outright. Failures are values, never panics.
//!
//! The set of tactics is closed: [`TACTICS`] lists each one with the parameters it needs, and
//! [`TacticId`] can only be built from a name found in that table.

pub mod prelude {
    pub use super::{
        apply, destruct, exact, intro, left, right, split, Side, TacticError, TacticId,
        TacticParams, TacticResult, TacticSpec, TACTICS,
    };
}

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::{formula::Formula, goal::Goal};

/// Side selects one component of a conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Picks the component of a binary formula on this side.
    pub fn pick<'a>(&self, left: &'a Formula, right: &'a Formula) -> &'a Formula {
        match self {
            Side::Left => left,
            Side::Right => right,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = TacticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(TacticError::InvalidSide(s.to_string())),
        }
    }
}

/// TacticError enumerates every precondition a tactic invocation can violate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TacticError {
    #[error("Target is not {expected}: {found}")]
    TargetShape {
        expected: &'static str,
        found: Formula,
    },

    #[error("Hypothesis {name} is not {expected}: {found}")]
    HypothesisShape {
        name: String,
        expected: &'static str,
        found: Formula,
    },

    #[error("Hypothesis {0} not found")]
    HypothesisNotFound(String),

    #[error("Hypothesis {name} ({hypothesis}) does not match target {target}")]
    Mismatch {
        name: String,
        hypothesis: Formula,
        target: Formula,
    },

    #[error("Consequent of {name} ({consequent}) does not match target {target}")]
    ConsequentMismatch {
        name: String,
        consequent: Formula,
        target: Formula,
    },

    #[error("{tactic} requires {parameter}")]
    MissingParameter {
        tactic: TacticId,
        parameter: &'static str,
    },

    #[error("Unknown tactic: {0}")]
    UnknownTactic(String),

    #[error("Invalid side '{0}', expected left or right")]
    InvalidSide(String),

    #[error("No problem selected")]
    NoProblemSelected,

    #[error("The proof is already complete")]
    ProofComplete,
}

const IMPLICATION: &str = "an implication";
const CONJUNCTION: &str = "a conjunction";
const DISJUNCTION: &str = "a disjunction";

/// TacticResult is the outcome of one tactic invocation.
///
/// The constructors keep the outcome consistent: a failure carries no goals and never
/// completes, and a completed goal carries no replacement goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticResult {
    success: bool,
    message: String,
    new_goals: Vec<Goal>,
    completed: bool,
}

impl TacticResult {
    /// A failed invocation; the goal stack must stay as it was.
    pub fn failure<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        TacticResult {
            success: false,
            message: message.into(),
            new_goals: Vec::new(),
            completed: false,
        }
    }

    /// A successful invocation replacing the current goal by `new_goals`, in order.
    pub fn progress<S>(message: S, new_goals: Vec<Goal>) -> Self
    where
        S: Into<String>,
    {
        TacticResult {
            success: true,
            message: message.into(),
            new_goals,
            completed: false,
        }
    }

    /// A successful invocation that closes the current goal.
    pub fn closed<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        TacticResult {
            success: true,
            message: message.into(),
            new_goals: Vec::new(),
            completed: true,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn new_goals(&self) -> &[Goal] {
        &self.new_goals
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

impl From<TacticError> for TacticResult {
    fn from(error: TacticError) -> Self {
        TacticResult::failure(error.to_string())
    }
}

/// TacticId names one of the built-in tactics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TacticId {
    Intro,
    Exact,
    Apply,
    Split,
    Left,
    Right,
    Destruct,
}

impl TacticId {
    /// Returns the registry entry describing this tactic.
    pub fn spec(&self) -> &'static TacticSpec {
        match self {
            TacticId::Intro => &TACTICS[0],
            TacticId::Exact => &TACTICS[1],
            TacticId::Apply => &TACTICS[2],
            TacticId::Split => &TACTICS[3],
            TacticId::Left => &TACTICS[4],
            TacticId::Right => &TACTICS[5],
            TacticId::Destruct => &TACTICS[6],
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }
}

impl Display for TacticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TacticId {
    type Err = TacticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TACTICS
            .iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.id)
            .ok_or_else(|| TacticError::UnknownTactic(s.to_string()))
    }
}

/// TacticSpec is one row of the tactic registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacticSpec {
    pub id: TacticId,
    pub name: &'static str,
    /// The tactic refers to a hypothesis of the current goal by name.
    pub needs_hypothesis: bool,
    /// The tactic selects the left or right component of a conjunction.
    pub needs_side: bool,
    pub summary: &'static str,
}

/// The tactic registry, in the order tactics are offered to the user.
pub static TACTICS: [TacticSpec; 7] = [
    TacticSpec {
        id: TacticId::Intro,
        name: "intro",
        needs_hypothesis: false,
        needs_side: false,
        summary: "Assume the antecedent of an implication and prove its consequent",
    },
    TacticSpec {
        id: TacticId::Exact,
        name: "exact",
        needs_hypothesis: true,
        needs_side: false,
        summary: "Close the goal with a hypothesis equal to the target",
    },
    TacticSpec {
        id: TacticId::Apply,
        name: "apply",
        needs_hypothesis: true,
        needs_side: false,
        summary: "Use a hypothesis A → target and prove A instead",
    },
    TacticSpec {
        id: TacticId::Split,
        name: "split",
        needs_hypothesis: false,
        needs_side: false,
        summary: "Prove both sides of a conjunction separately",
    },
    TacticSpec {
        id: TacticId::Left,
        name: "left",
        needs_hypothesis: false,
        needs_side: false,
        summary: "Prove the left side of a disjunction",
    },
    TacticSpec {
        id: TacticId::Right,
        name: "right",
        needs_hypothesis: false,
        needs_side: false,
        summary: "Prove the right side of a disjunction",
    },
    TacticSpec {
        id: TacticId::Destruct,
        name: "destruct",
        needs_hypothesis: true,
        needs_side: true,
        summary: "Add one side of a conjunction hypothesis as a new hypothesis",
    },
];

/// TacticParams carries the optional arguments of a tactic invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacticParams {
    pub hypothesis: Option<String>,
    pub side: Option<Side>,
}

impl TacticParams {
    /// Parameters that name a hypothesis.
    pub fn hypothesis<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        TacticParams {
            hypothesis: Some(name.into()),
            side: None,
        }
    }

    /// Returns the same parameters with the side set.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Returns the hypothesis name or the error `tactic` reports when it is absent.
    pub fn require_hypothesis(&self, tactic: TacticId) -> Result<&str, TacticError> {
        self.hypothesis
            .as_deref()
            .ok_or(TacticError::MissingParameter {
                tactic,
                parameter: "a hypothesis name",
            })
    }

    /// Returns the side or the error `tactic` reports when it is absent.
    pub fn require_side(&self, tactic: TacticId) -> Result<Side, TacticError> {
        self.side.ok_or(TacticError::MissingParameter {
            tactic,
            parameter: "a side (left or right)",
        })
    }
}

fn settle(result: Result<TacticResult, TacticError>) -> TacticResult {
    result.unwrap_or_else(TacticResult::from)
}

fn find<'a>(goal: &'a Goal, name: &str) -> Result<&'a Formula, TacticError> {
    goal.hypothesis(name)
        .map(|h| &h.formula)
        .ok_or_else(|| TacticError::HypothesisNotFound(name.to_string()))
}

/// intro turns a goal `Γ ⊢ A → B` into `Γ, Hn: A ⊢ B`.
pub fn intro(goal: &Goal) -> TacticResult {
    settle(try_intro(goal))
}

fn try_intro(goal: &Goal) -> Result<TacticResult, TacticError> {
    let (antecedent, consequent) =
        goal.target
            .as_implies()
            .ok_or_else(|| TacticError::TargetShape {
                expected: IMPLICATION,
                found: goal.target.clone(),
            })?;

    let name = goal.next_hypothesis_name();
    let next = goal.assume(antecedent.clone(), consequent.clone());

    Ok(TacticResult::progress(
        format!("Introduced {}: {}", name, antecedent),
        vec![next],
    ))
}

/// exact closes the goal when the named hypothesis is structurally equal to the target.
pub fn exact(goal: &Goal, name: &str) -> TacticResult {
    settle(try_exact(goal, name))
}

fn try_exact(goal: &Goal, name: &str) -> Result<TacticResult, TacticError> {
    let formula = find(goal, name)?;
    if *formula != goal.target {
        return Err(TacticError::Mismatch {
            name: name.to_string(),
            hypothesis: formula.clone(),
            target: goal.target.clone(),
        });
    }

    Ok(TacticResult::closed(format!("Goal closed by {}", name)))
}

/// apply reduces the target `B` to `A` using a hypothesis `A → B`.
///
/// The consequent must equal the target literally; there is no chaining through further
/// implications.
pub fn apply(goal: &Goal, name: &str) -> TacticResult {
    settle(try_apply(goal, name))
}

fn try_apply(goal: &Goal, name: &str) -> Result<TacticResult, TacticError> {
    let formula = find(goal, name)?;
    let (antecedent, consequent) =
        formula
            .as_implies()
            .ok_or_else(|| TacticError::HypothesisShape {
                name: name.to_string(),
                expected: IMPLICATION,
                found: formula.clone(),
            })?;

    if *consequent != goal.target {
        return Err(TacticError::ConsequentMismatch {
            name: name.to_string(),
            consequent: consequent.clone(),
            target: goal.target.clone(),
        });
    }

    Ok(TacticResult::progress(
        format!("Applied {}, new target: {}", name, antecedent),
        vec![goal.with_target(antecedent.clone())],
    ))
}

/// split turns `Γ ⊢ A ∧ B` into the two goals `Γ ⊢ A` and `Γ ⊢ B`, in that order.
pub fn split(goal: &Goal) -> TacticResult {
    settle(try_split(goal))
}

fn try_split(goal: &Goal) -> Result<TacticResult, TacticError> {
    let (left, right) = goal
        .target
        .as_and()
        .ok_or_else(|| TacticError::TargetShape {
            expected: CONJUNCTION,
            found: goal.target.clone(),
        })?;

    Ok(TacticResult::progress(
        "Split into 2 goals",
        vec![goal.with_target(left.clone()), goal.with_target(right.clone())],
    ))
}

/// left turns `Γ ⊢ A ∨ B` into `Γ ⊢ A`.
pub fn left(goal: &Goal) -> TacticResult {
    settle(try_choose(goal, Side::Left))
}

/// right turns `Γ ⊢ A ∨ B` into `Γ ⊢ B`.
pub fn right(goal: &Goal) -> TacticResult {
    settle(try_choose(goal, Side::Right))
}

fn try_choose(goal: &Goal, side: Side) -> Result<TacticResult, TacticError> {
    let (left, right) = goal
        .target
        .as_or()
        .ok_or_else(|| TacticError::TargetShape {
            expected: DISJUNCTION,
            found: goal.target.clone(),
        })?;
    let chosen = side.pick(left, right);

    Ok(TacticResult::progress(
        format!("Proving {} disjunct: {}", side, chosen),
        vec![goal.with_target(chosen.clone())],
    ))
}

/// destruct adds one component of a conjunction hypothesis as a new hypothesis, keeping the
/// target.
pub fn destruct(goal: &Goal, name: &str, side: Side) -> TacticResult {
    settle(try_destruct(goal, name, side))
}

fn try_destruct(goal: &Goal, name: &str, side: Side) -> Result<TacticResult, TacticError> {
    let formula = find(goal, name)?;
    let (left, right) = formula
        .as_and()
        .ok_or_else(|| TacticError::HypothesisShape {
            name: name.to_string(),
            expected: CONJUNCTION,
            found: formula.clone(),
        })?;
    let component = side.pick(left, right);

    let added = goal.next_hypothesis_name();
    let next = goal.assume(component.clone(), goal.target.clone());

    Ok(TacticResult::progress(
        format!("Destructed {}, added {}: {}", name, added, component),
        vec![next],
    ))
}
