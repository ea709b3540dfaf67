//! The proof session ties a catalogue, the goal stack and the step log together.
//!
//! A session is driven one user action at a time: select a problem, apply tactics, undo or
//! reset. Every action runs to completion synchronously and the session is the only owner of
//! the goal stack.

pub mod prelude {
    pub use super::{ProofSession, ProofStep};
}

use std::fmt::{self, Display};

use log::{debug, info, warn};

use crate::{
    catalogue::{Catalogue, Problem},
    goal::Goal,
    goal_stack::{GoalStack, StackState},
    tactic::{self, TacticError, TacticId, TacticParams, TacticResult},
};

/// ProofStep records one successfully applied tactic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProofStep {
    pub tactic_name: String,
    /// The tactic's arguments as typed, e.g. `H1` or `H1 left`; empty for `intro`.
    pub detail: String,
}

impl ProofStep {
    pub fn new<S, D>(tactic_name: S, detail: D) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        ProofStep {
            tactic_name: tactic_name.into(),
            detail: detail.into(),
        }
    }

    fn record(tactic: TacticId, params: &TacticParams) -> Self {
        let spec = tactic.spec();
        let mut detail = Vec::new();
        if spec.needs_hypothesis {
            if let Some(name) = &params.hypothesis {
                detail.push(name.clone());
            }
        }
        if spec.needs_side {
            if let Some(side) = params.side {
                detail.push(side.to_string());
            }
        }

        ProofStep::new(spec.name, detail.join(" "))
    }
}

impl Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.tactic_name)
        } else {
            write!(f, "{} {}", self.tactic_name, self.detail)
        }
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    stack: GoalStack,
    steps: usize,
}

/// ProofSession is the state a front-end drives while a learner works on one problem.
#[derive(Debug, Clone)]
pub struct ProofSession {
    catalogue: Catalogue,
    problem: Option<Problem>,
    stack: Option<GoalStack>,
    steps: Vec<ProofStep>,
    history: Vec<Snapshot>,
}

impl ProofSession {
    /// Creates a session over the given catalogue with no problem selected.
    pub fn new(catalogue: Catalogue) -> Self {
        ProofSession {
            catalogue,
            problem: None,
            stack: None,
            steps: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Starts a fresh proof of the problem with the given id.
    ///
    /// Unknown ids leave the session as it was; callers validate ids against the catalogue.
    pub fn select_problem(&mut self, id: &str) {
        let problem = match self.catalogue.get(id) {
            Some(problem) => problem.clone(),
            None => {
                warn!("unknown problem '{}', selection ignored", id);
                return;
            }
        };

        info!("selected problem {} ({})", problem.id, problem.formula_display);
        self.problem = Some(problem);
        self.reset();
    }

    /// Restores the selected problem's initial goal and clears the step log.
    pub fn reset(&mut self) {
        self.stack = self
            .problem
            .as_ref()
            .map(|problem| GoalStack::new(problem.initial_goal.clone()));
        self.steps.clear();
        self.history.clear();
    }

    /// Runs one tactic against the current goal.
    ///
    /// On success the step is logged and the goal stack advances; on failure nothing changes
    /// and only the message is reported.
    pub fn apply_tactic(&mut self, tactic: TacticId, params: &TacticParams) -> TacticResult {
        let stack = match self.stack.as_mut() {
            Some(stack) => stack,
            None => return TacticError::NoProblemSelected.into(),
        };
        let goal = match stack.current() {
            Some(goal) => goal,
            None => return TacticError::ProofComplete.into(),
        };

        let result = match invoke(goal, tactic, params) {
            Ok(result) => result,
            Err(error) => error.into(),
        };

        if !result.success() {
            debug!("{} failed: {}", tactic, result.message());
            return result;
        }

        self.history.push(Snapshot {
            stack: stack.clone(),
            steps: self.steps.len(),
        });
        let step = ProofStep::record(tactic, params);
        let state = stack.apply(&result);
        debug!("{}: {} ({} goals left)", step, result.message(), stack.remaining());
        self.steps.push(step);

        if state == StackState::Complete {
            info!("proof complete in {} steps", self.steps.len());
        }

        result
    }

    /// Reverts the most recent successful tactic. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.stack = Some(snapshot.stack);
                self.steps.truncate(snapshot.steps);
                true
            }
            None => false,
        }
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    /// The goal being worked on; None before selection and after completion.
    pub fn current_goal(&self) -> Option<&Goal> {
        self.stack.as_ref().and_then(|stack| stack.current())
    }

    /// All open goals, current first.
    pub fn goals(&self) -> &[Goal] {
        self.stack.as_ref().map(|stack| stack.goals()).unwrap_or(&[])
    }

    pub fn remaining_goals(&self) -> usize {
        self.goals().len()
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// True once a selected problem has no open goals left.
    pub fn is_complete(&self) -> bool {
        self.stack.as_ref().is_some_and(|stack| stack.is_complete())
    }
}

/// Checks the parameters a tactic needs, then dispatches to it.
fn invoke(
    goal: &Goal,
    id: TacticId,
    params: &TacticParams,
) -> Result<TacticResult, TacticError> {
    let result = match id {
        TacticId::Intro => tactic::intro(goal),
        TacticId::Exact => tactic::exact(goal, params.require_hypothesis(id)?),
        TacticId::Apply => tactic::apply(goal, params.require_hypothesis(id)?),
        TacticId::Split => tactic::split(goal),
        TacticId::Left => tactic::left(goal),
        TacticId::Right => tactic::right(goal),
        TacticId::Destruct => tactic::destruct(
            goal,
            params.require_hypothesis(id)?,
            params.require_side(id)?,
        ),
    };

    Ok(result)
}
