use natded::prelude::*;

fn p() -> Formula {
    Formula::var("P")
}

fn q() -> Formula {
    Formula::var("Q")
}

fn no_params() -> TacticParams {
    TacticParams::default()
}

fn session(id: &str) -> ProofSession {
    let mut session = ProofSession::new(Catalogue::builtin());
    session.select_problem(id);
    session
}

fn log(session: &ProofSession) -> Vec<String> {
    session.steps().iter().map(|step| step.to_string()).collect()
}

fn current(session: &ProofSession) -> String {
    session
        .current_goal()
        .map(|goal| goal.to_string())
        .unwrap_or_default()
}

#[test]
fn test_identity() {
    // Arrange
    let mut session = session("identity");
    assert_eq!(current(&session), "⊢ P → P");

    // Act
    let intro = session.apply_tactic(TacticId::Intro, &no_params());
    let after_intro = current(&session);
    let exact = session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H1"));

    // Assert
    assert!(intro.success());
    assert_eq!(after_intro, "H1: P ⊢ P");
    assert!(exact.success());
    assert!(exact.completed());
    assert!(session.is_complete());
    assert_eq!(log(&session), vec!["intro", "exact H1"]);
}

#[test]
fn test_weakening() {
    // Arrange
    let mut session = session("weakening");

    // Act & Assert
    session.apply_tactic(TacticId::Intro, &no_params());
    assert_eq!(current(&session), "H1: P ⊢ Q → P");

    session.apply_tactic(TacticId::Intro, &no_params());
    assert_eq!(current(&session), "H1: P, H2: Q ⊢ P");

    let result = session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H1"));
    assert!(result.completed());
    assert!(session.is_complete());
    assert_eq!(log(&session), vec!["intro", "intro", "exact H1"]);
}

#[test]
fn test_conjunction_elimination() {
    // Arrange
    let mut session = session("and-elim-left");

    // Act & Assert
    session.apply_tactic(TacticId::Intro, &no_params());
    assert_eq!(current(&session), "H1: P ∧ Q ⊢ P");

    session.apply_tactic(
        TacticId::Destruct,
        &TacticParams::hypothesis("H1").with_side(Side::Left),
    );
    assert_eq!(current(&session), "H1: P ∧ Q, H2: P ⊢ P");

    let result = session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H2"));
    assert!(result.completed());
    assert!(session.is_complete());
}

#[test]
fn test_disjunction_introduction() {
    // Arrange
    let mut session = session("or-intro-left");

    // Act & Assert
    session.apply_tactic(TacticId::Intro, &no_params());
    assert_eq!(current(&session), "H1: P ⊢ P ∨ Q");

    session.apply_tactic(TacticId::Left, &no_params());
    assert_eq!(current(&session), "H1: P ⊢ P");

    let result = session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H1"));
    assert!(result.completed());
    assert!(session.is_complete());
    assert_eq!(log(&session), vec!["intro", "left", "exact H1"]);
}

#[test]
fn test_intro_on_conjunction_fails() {
    // Arrange
    let initial = Goal::from_target(Formula::and(p(), q()));
    let catalogue = Catalogue::new(vec![Problem {
        id: "conj".to_string(),
        title: "Conjunction".to_string(),
        formula_display: "P ∧ Q".to_string(),
        difficulty: Difficulty::Easy,
        initial_goal: initial.clone(),
        hint: String::new(),
    }])
    .unwrap();
    let mut session = ProofSession::new(catalogue);
    session.select_problem("conj");

    // Act
    let result = session.apply_tactic(TacticId::Intro, &no_params());

    // Assert
    assert!(!result.success());
    assert!(!result.completed());
    assert!(result.new_goals().is_empty());
    assert!(result.message().contains("not an implication"));
    assert_eq!(session.goals(), &[initial]);
    assert!(session.steps().is_empty());
}

#[test]
fn test_split_goals_are_solved_depth_first() {
    // Arrange
    let mut session = session("and-comm");
    session.apply_tactic(TacticId::Intro, &no_params());

    // Act
    session.apply_tactic(TacticId::Split, &no_params());

    // Assert
    assert_eq!(session.remaining_goals(), 2);
    assert_eq!(current(&session), "H1: P ∧ Q ⊢ Q");

    session.apply_tactic(
        TacticId::Destruct,
        &TacticParams::hypothesis("H1").with_side(Side::Right),
    );
    assert_eq!(session.remaining_goals(), 2);
    assert_eq!(current(&session), "H1: P ∧ Q, H2: Q ⊢ Q");

    session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H2"));
    assert_eq!(session.remaining_goals(), 1);
    assert_eq!(current(&session), "H1: P ∧ Q ⊢ P");

    session.apply_tactic(
        TacticId::Destruct,
        &TacticParams::hypothesis("H1").with_side(Side::Left),
    );
    let result = session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H2"));
    assert!(result.completed());
    assert!(session.is_complete());
    assert_eq!(
        log(&session),
        vec![
            "intro",
            "split",
            "destruct H1 right",
            "exact H2",
            "destruct H1 left",
            "exact H2",
        ]
    );
}

#[test]
fn test_syllogism_with_apply() {
    // Arrange
    let mut session = session("syllogism");

    // Act
    for _ in 0..3 {
        session.apply_tactic(TacticId::Intro, &no_params());
    }
    let before_apply = current(&session);
    session.apply_tactic(TacticId::Apply, &TacticParams::hypothesis("H2"));
    session.apply_tactic(TacticId::Apply, &TacticParams::hypothesis("H1"));
    session.apply_tactic(TacticId::Exact, &TacticParams::hypothesis("H3"));

    // Assert
    assert_eq!(before_apply, "H1: P → Q, H2: Q → R, H3: P ⊢ R");
    assert!(session.is_complete());
    assert_eq!(
        log(&session),
        vec!["intro", "intro", "intro", "apply H2", "apply H1", "exact H3"]
    );
}

#[test]
fn test_replay_yields_identical_names() {
    // Arrange
    let script = [
        (TacticId::Intro, no_params()),
        (TacticId::Intro, no_params()),
        (TacticId::Split, no_params()),
    ];
    let mut first = session("and-intro");
    let mut second = session("and-intro");

    // Act
    for (id, params) in &script {
        first.apply_tactic(*id, params);
    }
    second.apply_tactic(TacticId::Intro, &no_params());
    second.reset();
    for (id, params) in &script {
        second.apply_tactic(*id, params);
    }

    // Assert
    assert_eq!(first.goals(), second.goals());
    assert_eq!(current(&first), "H1: P, H2: Q ⊢ P");
}
