//! The problem catalogue.
//!
//! Problems arrive pre-built: every initial goal is already a [`Formula`] tree, either from the
//! built-in set or from a TOML file where formulas are written in their tagged form. The
//! `formula_display` text is only shown to the user and is never parsed.
//!
//! ```toml
//! [[problems]]
//! id = "identity"
//! title = "Identity"
//! formula_display = "P → P"
//! difficulty = "easy"
//! hint = "Introduce the assumption, then use it."
//!
//! [problems.initial_goal]
//! target = { implies = [{ var = "P" }, { var = "P" }] }
//! ```

pub mod prelude {
    pub use super::{Catalogue, CatalogueError, Difficulty, Problem};
}

use std::{
    collections::HashSet,
    fmt::{self, Display},
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{formula::Formula, goal::Goal};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalogue: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate problem id '{0}'")]
    DuplicateId(String),

    #[error("problem '{problem}' names hypothesis {name}, expected {expected}")]
    InvalidHypothesisName {
        problem: String,
        name: String,
        expected: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
        }
    }
}

/// Problem is one exercise: a formula to prove, given as its initial goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub formula_display: String,
    pub difficulty: Difficulty,
    pub initial_goal: Goal,
    #[serde(default)]
    pub hint: String,
}

impl Problem {
    /// Creates a problem whose initial goal is `⊢ target`, displayed with the printer.
    pub fn new<S, T, H>(id: S, title: T, difficulty: Difficulty, target: Formula, hint: H) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        H: Into<String>,
    {
        Problem {
            id: id.into(),
            title: title.into(),
            formula_display: target.to_string(),
            difficulty,
            initial_goal: Goal::from_target(target),
            hint: hint.into(),
        }
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.difficulty, self.id, self.title, self.formula_display
        )
    }
}

/// Catalogue is the ordered list of problems a session can select from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    problems: Vec<Problem>,
}

impl Catalogue {
    /// Builds a catalogue, rejecting duplicate problem ids.
    ///
    /// Seeded hypotheses must be named `H1..Hn` in order, matching the names tactics assign.
    pub fn new(problems: Vec<Problem>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for problem in &problems {
            if !seen.insert(problem.id.as_str()) {
                return Err(CatalogueError::DuplicateId(problem.id.clone()));
            }
            check_hypothesis_names(problem)?;
        }

        Ok(Catalogue { problems })
    }

    /// Reads a catalogue from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogueError> {
        let parsed: Catalogue = toml::from_str(content)?;
        debug!("parsed {} problems", parsed.problems.len());

        Catalogue::new(parsed.problems)
    }

    /// Reads a catalogue from a TOML file.
    pub fn load<P>(path: P) -> Result<Self, CatalogueError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalogue = Catalogue::from_toml_str(&content)?;
        info!(
            "loaded {} problems from {}",
            catalogue.len(),
            path.display()
        );

        Ok(catalogue)
    }

    /// The problems every installation ships with.
    pub fn builtin() -> Self {
        let p = || Formula::var("P");
        let q = || Formula::var("Q");
        let r = || Formula::var("R");

        Catalogue {
            problems: vec![
                Problem::new(
                    "identity",
                    "Identity",
                    Difficulty::Easy,
                    Formula::implies(p(), p()),
                    "Introduce the assumption, then use it directly.",
                ),
                Problem::new(
                    "weakening",
                    "Weakening",
                    Difficulty::Easy,
                    Formula::implies(p(), Formula::implies(q(), p())),
                    "Introduce both assumptions; only the first one is needed.",
                ),
                Problem::new(
                    "and-elim-left",
                    "Conjunction elimination",
                    Difficulty::Easy,
                    Formula::implies(Formula::and(p(), q()), p()),
                    "After intro, destruct the conjunction and keep its left side.",
                ),
                Problem::new(
                    "or-intro-left",
                    "Disjunction introduction",
                    Difficulty::Easy,
                    Formula::implies(p(), Formula::or(p(), q())),
                    "Pick the side of the disjunction you can already prove.",
                ),
                Problem::new(
                    "modus-ponens",
                    "Modus ponens",
                    Difficulty::Easy,
                    Formula::implies(p(), Formula::implies(Formula::implies(p(), q()), q())),
                    "Apply the implication to reduce Q to P.",
                ),
                Problem::new(
                    "and-intro",
                    "Conjunction introduction",
                    Difficulty::Medium,
                    Formula::implies(p(), Formula::implies(q(), Formula::and(p(), q()))),
                    "Split the conjunction and prove each side on its own.",
                ),
                Problem::new(
                    "and-comm",
                    "Commutativity of conjunction",
                    Difficulty::Medium,
                    Formula::implies(Formula::and(p(), q()), Formula::and(q(), p())),
                    "Split first; each new goal has its own copy of the hypotheses.",
                ),
                Problem::new(
                    "syllogism",
                    "Hypothetical syllogism",
                    Difficulty::Medium,
                    Formula::implies(
                        Formula::implies(p(), q()),
                        Formula::implies(Formula::implies(q(), r()), Formula::implies(p(), r())),
                    ),
                    "Work backwards from R with apply.",
                ),
            ],
        }
    }

    /// Returns the problem with the given id.
    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|problem| problem.id == id)
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

fn check_hypothesis_names(problem: &Problem) -> Result<(), CatalogueError> {
    let hypotheses = &problem.initial_goal.hypotheses;
    for (index, hypothesis) in hypotheses.iter().enumerate() {
        let expected = format!("H{}", index + 1);
        if hypothesis.name != expected {
            return Err(CatalogueError::InvalidHypothesisName {
                problem: problem.id.clone(),
                name: hypothesis.name.clone(),
                expected,
            });
        }
    }

    Ok(())
}
