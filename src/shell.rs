//! The proof shell lets a learner work through the catalogue in the terminal.
//!
//! Each line is one command. Tactics are typed the way they are logged (`intro`, `exact H1`,
//! `destruct H1 left`). When a tactic is missing an argument the shell offers the choices
//! with a selection prompt instead of failing, and `next` walks through the whole choice
//! (tactic, hypothesis, side) with prompts.
//!
//! Special commands in the proof shell:
//! - `help` shows the commands and the tactic registry.
//! - `list` shows every problem in the catalogue.
//! - `begin [id]` starts a new proof, prompting for a problem when no id is given.
//! - `next` picks a tactic and its arguments from prompts.
//! - `show` prints the open goals and the steps so far.
//! - `hint` prints the hint for the current problem.
//! - `back` undoes the last successful tactic.
//! - `reset` restarts the current problem.
//! - `quit` leaves the shell.
//!
//! The same commands can be replayed without prompts with [`ProofShell::run_script`].

pub mod prelude {
    pub use super::{ProofShell, ShellError};
}

use std::{fmt::Write as _, io};

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use thiserror::Error;

use crate::{
    catalogue::{Catalogue, CatalogueError},
    command::{Command, CommandError},
    session::ProofSession,
    tactic::{Side, TacticId, TacticParams, TacticResult, TACTICS},
};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid command: {0}")]
    InvalidCommand(#[from] CommandError),

    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    #[error("`begin` needs a problem id outside the interactive shell")]
    MissingProblemId,

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Flow tells the read loop whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// ProofShell drives a [`ProofSession`] from the terminal.
pub struct ProofShell {
    session: ProofSession,
    term: Term,
    theme: ColorfulTheme,
}

impl ProofShell {
    pub fn new(session: ProofSession) -> Self {
        ProofShell {
            session,
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }

    pub fn session(&self) -> &ProofSession {
        &self.session
    }

    /// Selects a problem after checking that the catalogue has it.
    pub fn begin(&mut self, id: &str) -> Result<(), ShellError> {
        if self.session.catalogue().get(id).is_none() {
            return Err(ShellError::UnknownProblem(id.to_string()));
        }

        self.session.select_problem(id);
        self.term.write_line(&render_state(&self.session))?;

        Ok(())
    }

    /// Runs `;`-separated commands without prompting, then prints the final state.
    ///
    /// Tactic failures are reported and the script continues; a line that does not parse
    /// stops the script with an error.
    pub fn run_script(&mut self, script: &str) -> Result<(), ShellError> {
        for line in script.split(';').map(str::trim).filter(|l| !l.is_empty()) {
            let command = line.parse::<Command>()?;
            self.term.write_line(&format!("> {}", line))?;

            if self.execute(command, false)? == Flow::Quit {
                break;
            }
        }

        self.term.write_line(&render_state(&self.session))?;
        Ok(())
    }

    /// Reads commands until `quit` or the end of input.
    ///
    /// Errors from a single command are printed and the loop continues.
    pub fn interact(&mut self) -> Result<(), ShellError> {
        self.term.write_line("Type `help` for the list of commands.")?;

        loop {
            self.term.write_str("> ")?;
            let line = self.term.read_line()?;
            if line.is_empty() && !self.term.is_term() {
                return Ok(());
            }

            let flow = line
                .parse::<Command>()
                .map_err(ShellError::from)
                .and_then(|command| self.execute(command, true));

            match flow {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(ShellError::Io(err)) => return Err(ShellError::Io(err)),
                Err(ShellError::InvalidCommand(CommandError::Empty)) => {}
                Err(err) => self.term.write_line(&format!("Error: {}", err))?,
            }
        }
    }

    fn execute(&mut self, command: Command, interactive: bool) -> Result<Flow, ShellError> {
        debug!("executing {:?}", command);

        match command {
            Command::Help => self.term.write_line(&render_help())?,
            Command::List => self
                .term
                .write_line(&render_problems(self.session.catalogue()))?,
            Command::Begin(Some(id)) => self.begin(&id)?,
            Command::Begin(None) if interactive => self.read_begin()?,
            Command::Begin(None) => return Err(ShellError::MissingProblemId),
            Command::Next if interactive => self.read_next()?,
            Command::Next => self.term.write_line("`next` needs an interactive terminal")?,
            Command::Show => self.term.write_line(&render_state(&self.session))?,
            Command::Hint => self.show_hint()?,
            Command::Back => {
                if self.session.undo() {
                    self.term.write_line("Undid the last step.")?;
                    self.term.write_line(&render_state(&self.session))?;
                } else {
                    self.term.write_line("No steps to undo.")?;
                }
            }
            Command::Reset => {
                self.session.reset();
                self.term.write_line(&render_state(&self.session))?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Tactic { id, params } => {
                let params = if interactive {
                    self.complete_params(id, params)?
                } else {
                    Some(params)
                };

                match params {
                    Some(params) => self.run_tactic(id, &params)?,
                    None => self.term.write_line("Cancelled.")?,
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn run_tactic(&mut self, id: TacticId, params: &TacticParams) -> Result<(), ShellError> {
        let result = self.session.apply_tactic(id, params);
        self.term.write_line(&render_result(&result))?;

        if result.success() {
            self.term.write_line(&render_state(&self.session))?;
        }

        Ok(())
    }

    fn show_hint(&self) -> Result<(), ShellError> {
        let hint = match self.session.problem() {
            Some(problem) if !problem.hint.is_empty() => problem.hint.clone(),
            Some(_) => "No hint for this problem.".to_string(),
            None => "No problem selected.".to_string(),
        };

        self.term.write_line(&hint)?;
        Ok(())
    }

    /// Prompts with the given choices plus `Cancel`; returns None when cancelled.
    fn select(&self, prompt: &str, choices: &[String]) -> Result<Option<usize>, ShellError> {
        let items: Vec<&str> = choices
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("Cancel"))
            .collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(0)
            .items(&items)
            .interact_on(&self.term)?;

        if selection == choices.len() {
            return Ok(None);
        }

        Ok(Some(selection))
    }

    fn read_begin(&mut self) -> Result<(), ShellError> {
        let catalogue = self.session.catalogue();
        if catalogue.is_empty() {
            self.term.write_line("The catalogue has no problems.")?;
            return Ok(());
        }

        let choices: Vec<String> = catalogue.problems().iter().map(|p| p.to_string()).collect();
        let ids: Vec<String> = catalogue.problems().iter().map(|p| p.id.clone()).collect();

        if let Some(index) = self.select("Select a problem to prove", &choices)? {
            self.begin(&ids[index])?;
        }

        Ok(())
    }

    fn read_next(&mut self) -> Result<(), ShellError> {
        if self.session.current_goal().is_none() {
            self.term.write_line(&render_state(&self.session))?;
            return Ok(());
        }

        let choices: Vec<String> = TACTICS
            .iter()
            .map(|spec| format!("{} - {}", spec.name, spec.summary))
            .collect();

        let id = match self.select("Select a tactic", &choices)? {
            Some(index) => TACTICS[index].id,
            None => return Ok(()),
        };

        match self.complete_params(id, TacticParams::default())? {
            Some(params) => self.run_tactic(id, &params),
            None => Ok(()),
        }
    }

    /// Fills in missing tactic arguments with prompts.
    ///
    /// Returns None if the user cancels. When there is nothing to choose from the parameters
    /// are returned as they are and the session reports what is missing.
    fn complete_params(
        &self,
        id: TacticId,
        mut params: TacticParams,
    ) -> Result<Option<TacticParams>, ShellError> {
        let spec = id.spec();

        if spec.needs_hypothesis && params.hypothesis.is_none() {
            let hypotheses: Vec<(String, String)> = self
                .session
                .current_goal()
                .map(|goal| {
                    goal.hypotheses
                        .iter()
                        .map(|h| (h.name.clone(), h.to_string()))
                        .collect()
                })
                .unwrap_or_default();

            if !hypotheses.is_empty() {
                let choices: Vec<String> = hypotheses.iter().map(|(_, text)| text.clone()).collect();
                match self.select(&format!("Select a hypothesis for {}", spec.name), &choices)? {
                    Some(index) => params.hypothesis = Some(hypotheses[index].0.clone()),
                    None => return Ok(None),
                }
            }
        }

        if spec.needs_side && params.side.is_none() {
            let choices: Vec<String> = Side::ALL.iter().map(|side| side.to_string()).collect();
            match self.select(&format!("Select a side for {}", spec.name), &choices)? {
                Some(index) => params.side = Some(Side::ALL[index]),
                None => return Ok(None),
            }
        }

        Ok(Some(params))
    }
}

/// Renders the tactic outcome as a single colored line.
pub fn render_result(result: &TacticResult) -> String {
    if result.success() {
        style(result.message()).green().to_string()
    } else {
        style(format!("Failed: {}", result.message())).red().to_string()
    }
}

/// Renders the session's goals, or the finished derivation once the proof is complete.
pub fn render_state(session: &ProofSession) -> String {
    let mut out = String::new();

    let problem = match session.problem() {
        Some(problem) => problem,
        None => return "No problem selected. Use `begin` to choose one.".to_string(),
    };

    let _ = writeln!(out, "{}: {}", problem.title, problem.formula_display);

    if session.is_complete() {
        let _ = write!(out, "Proof complete in {} steps:", session.steps().len());
        for (i, step) in session.steps().iter().enumerate() {
            let _ = write!(out, "\n  {}. {}", i + 1, step);
        }
        return out;
    }

    let goals = session.goals();
    for (i, goal) in goals.iter().enumerate() {
        if i == 0 {
            let _ = writeln!(out, "Goal 1 of {}:", goals.len());
            for hypothesis in &goal.hypotheses {
                let _ = writeln!(out, "  {}", hypothesis);
            }
            let _ = write!(out, "  ⊢ {}", goal.target);
        } else {
            let _ = write!(out, "\nGoal {}: {}", i + 1, goal);
        }
    }

    out
}

/// Renders the catalogue, one problem per line.
pub fn render_problems(catalogue: &Catalogue) -> String {
    catalogue
        .problems()
        .iter()
        .map(|problem| problem.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the shell commands followed by the tactic registry.
pub fn render_help() -> String {
    let mut out = String::from(
        "Available commands:
  help - Show this help message
  list - List the problems in the catalogue
  begin [id] - Start proving a problem
  next - Choose a tactic and its arguments from prompts
  show - Show the open goals
  hint - Show the hint for the current problem
  back - Undo the last step
  reset - Restart the current problem
  quit - Leave the shell
Tactics:",
    );

    for spec in TACTICS.iter() {
        let mut usage = spec.name.to_string();
        if spec.needs_hypothesis {
            usage.push_str(" <hypothesis>");
        }
        if spec.needs_side {
            usage.push_str(" <left|right>");
        }
        let _ = write!(out, "\n  {} - {}", usage, spec.summary);
    }

    out
}
