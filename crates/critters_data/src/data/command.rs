//! The brain → body command protocol.
//!
//! Brains return structured [`Command`]s. The textual vocabulary
//! (`Stop`, `Go`, `Turn <radians>`, `Accelerate <factor>`, `Attack <target>`,
//! `Eat`) is kept as the wire format and parsed once, at the boundary, by
//! [`Command::from_str`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Collapse speed to near zero, keeping the bearing.
    Stop,
    /// Resume unit speed along the current bearing.
    Go,
    /// New heading at unit speed, bearing rotated by the given radians.
    Turn(f64),
    /// Multiply the current speed by the given factor.
    Accelerate(f64),
    /// Reserved. Carried through the protocol but has no effect.
    Attack(String),
    Eat,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command verb: {0}")]
    UnknownVerb(String),

    #[error("{0} requires an argument")]
    MissingArgument(&'static str),

    #[error("{verb} expects a finite number, got {value:?}")]
    BadNumber { verb: &'static str, value: String },

    #[error("{verb} takes no argument, got {extra:?}")]
    UnexpectedArgument { verb: &'static str, extra: String },
}

impl Command {
    /// The protocol verb for this command.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Stop => "Stop",
            Command::Go => "Go",
            Command::Turn(_) => "Turn",
            Command::Accelerate(_) => "Accelerate",
            Command::Attack(_) => "Attack",
            Command::Eat => "Eat",
        }
    }
}

fn parse_number(verb: &'static str, arg: Option<&str>) -> Result<f64, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument(verb))?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::BadNumber {
            verb,
            value: raw.to_string(),
        }),
    }
}

fn no_argument(verb: &'static str, rest: &str, command: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument {
            verb,
            extra: rest.to_string(),
        })
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        match verb {
            "" => Err(CommandError::Empty),
            "Stop" => no_argument("Stop", rest, Command::Stop),
            "Go" => no_argument("Go", rest, Command::Go),
            "Eat" => no_argument("Eat", rest, Command::Eat),
            "Turn" => {
                let angle = parse_number("Turn", args.next())?;
                no_argument("Turn", &args.collect::<Vec<_>>().join(" "), Command::Turn(angle))
            }
            "Accelerate" => {
                let factor = parse_number("Accelerate", args.next())?;
                no_argument(
                    "Accelerate",
                    &args.collect::<Vec<_>>().join(" "),
                    Command::Accelerate(factor),
                )
            }
            "Attack" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("Attack"))
                } else {
                    Ok(Command::Attack(rest.to_string()))
                }
            }
            other => Err(CommandError::UnknownVerb(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Turn(angle) => write!(f, "Turn {angle}"),
            Command::Accelerate(factor) => write!(f, "Accelerate {factor}"),
            Command::Attack(target) => write!(f, "Attack {target}"),
            other => f.write_str(other.verb()),
        }
    }
}
