pub mod prelude {
    pub use super::{Command, CommandError};
}

use std::str::FromStr;

use thiserror::Error;

use crate::tactic::{Side, TacticError, TacticId, TacticParams};

pub const HELP: &str = "help";
pub const LIST: &str = "list";
pub const BEGIN: &str = "begin";
pub const NEXT: &str = "next";
pub const SHOW: &str = "show";
pub const HINT: &str = "hint";
pub const BACK: &str = "back";
pub const RESET: &str = "reset";
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unexpected argument '{argument}' for {command}")]
    UnexpectedArgument { command: String, argument: String },

    #[error(transparent)]
    Tactic(#[from] TacticError),
}

/// Command is one line typed into the shell or one `;`-separated entry of a script.
///
/// # Example
/// ```text
/// begin identity
/// intro
/// exact H1
/// destruct H1 left
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    /// Select a problem, prompting for one when no id is given.
    Begin(Option<String>),
    /// Pick a tactic from the registry interactively.
    Next,
    Show,
    Hint,
    Back,
    Reset,
    Quit,
    /// Run a tactic; missing parameters are left as None.
    Tactic { id: TacticId, params: TacticParams },
}

fn no_arguments<'a, I>(command: &str, mut rest: I) -> Result<(), CommandError>
where
    I: Iterator<Item = &'a str>,
{
    match rest.next() {
        Some(argument) => Err(CommandError::UnexpectedArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        }),
        None => Ok(()),
    }
}

fn parse_tactic<'a, I>(id: TacticId, mut rest: I) -> Result<Command, CommandError>
where
    I: Iterator<Item = &'a str>,
{
    let spec = id.spec();
    let mut params = TacticParams::default();

    if spec.needs_hypothesis {
        params.hypothesis = rest.next().map(|name| name.to_string());
    }
    if spec.needs_side {
        params.side = rest.next().map(Side::from_str).transpose()?;
    }
    no_arguments(spec.name, rest)?;

    Ok(Command::Tactic { id, params })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        let command = match head {
            HELP => Command::Help,
            LIST => Command::List,
            BEGIN => {
                let id = words.next().map(|id| id.to_string());
                no_arguments(head, words)?;
                return Ok(Command::Begin(id));
            }
            NEXT => Command::Next,
            SHOW => Command::Show,
            HINT => Command::Hint,
            BACK => Command::Back,
            RESET => Command::Reset,
            QUIT | "exit" => Command::Quit,
            name => return parse_tactic(name.parse()?, words),
        };

        no_arguments(head, words)?;
        Ok(command)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("  show ".parse::<Command>(), Ok(Command::Show));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("begin".parse::<Command>(), Ok(Command::Begin(None)));
        assert_eq!(
            "begin identity".parse::<Command>(),
            Ok(Command::Begin(Some("identity".to_string())))
        );
    }

    #[test]
    fn test_parse_tactic_with_arguments() {
        // Act
        let command = "destruct H1 left".parse::<Command>();

        // Assert
        assert_eq!(
            command,
            Ok(Command::Tactic {
                id: TacticId::Destruct,
                params: TacticParams::hypothesis("H1").with_side(Side::Left),
            })
        );
    }

    #[test]
    fn test_parse_tactic_missing_arguments() {
        // Act
        let command = "exact".parse::<Command>();

        // Assert
        assert_eq!(
            command,
            Ok(Command::Tactic {
                id: TacticId::Exact,
                params: TacticParams::default(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        // Act
        let command = "intro H1".parse::<Command>();

        // Assert
        assert_eq!(
            command,
            Err(CommandError::UnexpectedArgument {
                command: "intro".to_string(),
                argument: "H1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "auto".parse::<Command>(),
            Err(CommandError::Tactic(TacticError::UnknownTactic(
                "auto".to_string()
            )))
        );
        assert_eq!(
            "destruct H1 up".parse::<Command>(),
            Err(CommandError::Tactic(TacticError::InvalidSide("up".to_string())))
        );
    }
}
