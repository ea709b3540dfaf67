pub mod prelude {
    pub use super::{GoalStack, StackState};
}

use crate::{goal::Goal, tactic::TacticResult};

/// StackState tells whether any goal is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackState {
    Active,
    Complete,
}

/// GoalStack holds the open goals of a proof, current goal first.
///
/// Goals produced by a tactic are pushed in front of the goals that were already waiting, so
/// sub-goals are always finished before their older siblings (a depth-first walk of the
/// derivation). The proof is complete exactly when the stack is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalStack {
    goals: Vec<Goal>,
}

impl GoalStack {
    /// Creates a new stack holding only the initial goal.
    pub fn new(initial: Goal) -> Self {
        GoalStack {
            goals: vec![initial],
        }
    }

    /// The goal the user is working on, or None once the proof is complete.
    pub fn current(&self) -> Option<&Goal> {
        self.goals.first()
    }

    /// All open goals, current goal first.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Number of open goals, including the current one.
    pub fn remaining(&self) -> usize {
        self.goals.len()
    }

    pub fn state(&self) -> StackState {
        if self.goals.is_empty() {
            StackState::Complete
        } else {
            StackState::Active
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == StackState::Complete
    }

    /// Replaces the current goal with `new_goals`, keeping the rest of the stack in order.
    ///
    /// An empty `new_goals` closes the current goal. Does nothing on a complete stack.
    pub fn advance(&mut self, new_goals: Vec<Goal>) -> StackState {
        if !self.goals.is_empty() {
            let mut goals = new_goals;
            goals.extend(self.goals.drain(1..));
            self.goals = goals;
        }

        self.state()
    }

    /// Applies the outcome of a tactic run against the current goal.
    ///
    /// Failed results leave the stack untouched.
    pub fn apply(&mut self, result: &TacticResult) -> StackState {
        if !result.success() {
            return self.state();
        }

        self.advance(result.new_goals().to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{formula::Formula, goal::Hypothesis};

    fn goal(name: &str) -> Goal {
        Goal::from_target(Formula::var(name))
    }

    #[test]
    fn test_new_stack_is_active() {
        // Arrange
        let stack = GoalStack::new(goal("P"));

        // Act & Assert
        assert_eq!(stack.state(), StackState::Active);
        assert_eq!(stack.current(), Some(&goal("P")));
        assert_eq!(stack.remaining(), 1);
    }

    #[test]
    fn test_advance_prepends_new_goals() {
        // Arrange
        let mut stack = GoalStack::new(goal("A"));
        stack.advance(vec![goal("B"), goal("C")]);

        // Act
        let state = stack.advance(vec![goal("D"), goal("E")]);

        // Assert
        assert_eq!(state, StackState::Active);
        assert_eq!(stack.goals(), &[goal("D"), goal("E"), goal("C")]);
    }

    #[test]
    fn test_closing_moves_to_next_goal() {
        // Arrange
        let mut stack = GoalStack::new(goal("A"));
        stack.advance(vec![goal("B"), goal("C")]);

        // Act
        let state = stack.advance(vec![]);

        // Assert
        assert_eq!(state, StackState::Active);
        assert_eq!(stack.current(), Some(&goal("C")));
    }

    #[test]
    fn test_closing_last_goal_completes() {
        // Arrange
        let mut stack = GoalStack::new(goal("A"));

        // Act
        let state = stack.advance(vec![]);

        // Assert
        assert_eq!(state, StackState::Complete);
        assert!(stack.is_complete());
        assert_eq!(stack.current(), None);
        assert_eq!(stack.remaining(), 0);
    }

    #[test]
    fn test_complete_stack_ignores_advance() {
        // Arrange
        let mut stack = GoalStack::new(goal("A"));
        stack.advance(vec![]);

        // Act
        let state = stack.advance(vec![goal("B")]);

        // Assert
        assert_eq!(state, StackState::Complete);
        assert!(stack.goals().is_empty());
    }

    #[test]
    fn test_apply_failure_keeps_stack() {
        // Arrange
        let initial = Goal::new(
            vec![Hypothesis::new("H1", Formula::var("P"))],
            Formula::and(Formula::var("P"), Formula::var("Q")),
        );
        let mut stack = GoalStack::new(initial.clone());

        // Act
        let state = stack.apply(&TacticResult::failure("Target is not an implication"));

        // Assert
        assert_eq!(state, StackState::Active);
        assert_eq!(stack.goals(), &[initial]);
    }

    #[test]
    fn test_apply_closed_result() {
        // Arrange
        let mut stack = GoalStack::new(goal("A"));

        // Act
        let state = stack.apply(&TacticResult::closed("Goal closed by H1"));

        // Assert
        assert_eq!(state, StackState::Complete);
    }
}
