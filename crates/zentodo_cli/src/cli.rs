//! Command-line parsing for the zentodo binary.
//!
//! # Responsibility
//! - Map raw argv into one [`Command`].
//! - Resolve user-typed id prefixes against the loaded list.
//!
//! # Invariants
//! - Parsing never touches the store; it is pure over its inputs.

use std::error::Error;
use std::fmt::{Display, Formatter};
use zentodo_core::{Task, TaskId};

/// One parsed invocation of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { text: String },
    List,
    Done { id: String },
    Remove { id: String },
    Stats,
    Help,
    Version,
}

/// Argv-level usage errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    MissingOperand(&'static str),
    UnknownCommand(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand(what) => write!(f, "missing {what} operand"),
            Self::UnknownCommand(command) => write!(f, "unknown command `{command}`"),
        }
    }
}

impl Error for CliError {}

/// Parses argv without the program name. No arguments means `list`.
pub fn parse(args: &[String]) -> Result<Command, CliError> {
    let Some(command) = args.first() else {
        return Ok(Command::List);
    };
    match command.as_str() {
        "add" => {
            let text = args[1..].join(" ");
            if text.trim().is_empty() {
                return Err(CliError::MissingOperand("task text"));
            }
            Ok(Command::Add { text })
        }
        "list" => Ok(Command::List),
        "done" | "toggle" => match args.get(1) {
            Some(id) => Ok(Command::Done { id: id.clone() }),
            None => Err(CliError::MissingOperand("task id")),
        },
        "rm" | "remove" => match args.get(1) {
            Some(id) => Ok(Command::Remove { id: id.clone() }),
            None => Err(CliError::MissingOperand("task id")),
        },
        "stats" | "progress" => Ok(Command::Stats),
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" => Ok(Command::Version),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

/// How a typed id matched against the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatch {
    One(TaskId),
    None,
    Ambiguous(usize),
}

/// Resolves a full task id or a unique id prefix against `tasks`.
pub fn resolve_id(tasks: &[Task], typed: &str) -> IdMatch {
    let typed = typed.trim().to_ascii_lowercase();
    if let Ok(id) = typed.parse::<TaskId>() {
        return if tasks.iter().any(|task| task.id == id) {
            IdMatch::One(id)
        } else {
            IdMatch::None
        };
    }

    let matches: Vec<TaskId> = tasks
        .iter()
        .map(|task| task.id)
        .filter(|id| id.to_string().starts_with(&typed))
        .collect();
    match matches.as_slice() {
        [] => IdMatch::None,
        [id] => IdMatch::One(*id),
        more => IdMatch::Ambiguous(more.len()),
    }
}
