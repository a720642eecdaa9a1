//! Parsing of front-end command lines.

use std::str::FromStr;
use thiserror::Error;
use todo_list_core::{TodoAction, TodoError};

/// Text printed by the `help` command
pub const HELP: &str = "\
Commands:
  add <title>         append a new todo
  done <idx>          mark the todo at <idx> done
  undone <idx>        mark the todo at <idx> not done
  done-title <title>  mark the first todo titled <title> done
  all-done            mark every todo done
  all-undone          mark every todo not done
  remove <idx>        remove the todo at <idx>
  remove-first        remove the first todo
  remove-last         remove the last todo
  get <idx>           print the todo at <idx>
  first | last        print the first or last todo
  size                print the number of todos
  status              print whether every todo is done
  show                print the list
  show-done           print the done todos
  show-pending        print the todos not yet done
  find <title>        print the first todo titled <title>
  json                print the list as JSON
  help                print this message";

/// Errors raised while parsing or executing a command
#[derive(Debug, Error)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Unknown command: {0:?} (try \"help\")")]
    Unknown(String),

    /// A command that needs an argument was given none
    #[error("Missing argument for {0:?}")]
    MissingArgument(&'static str),

    /// A command that takes no argument was given one
    #[error("{0:?} takes no argument")]
    UnexpectedArgument(&'static str),

    /// The index argument is not a non-negative integer
    #[error("Invalid index: {0:?} (expected a non-negative integer)")]
    InvalidIndex(String),

    /// The list rejected the operation
    #[error(transparent)]
    Todo(#[from] TodoError),

    /// The list could not be encoded as JSON
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mutate the list
    Apply(TodoAction),
    /// Print the item at a position
    Get(usize),
    /// Print the first item
    First,
    /// Print the last item
    Last,
    /// Print the number of items
    Size,
    /// Print whether every item is done
    Status,
    /// Print the whole list
    Show,
    /// Print the done items
    ShowDone,
    /// Print the items not yet done
    ShowPending,
    /// Print the first item with a title
    Find(String),
    /// Print the list as JSON
    Json,
    /// Print usage
    Help,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, arg) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => {
                let rest = rest.trim();
                (keyword, (!rest.is_empty()).then_some(rest))
            }
            None => (line, None),
        };

        let command = match keyword {
            "add" => Self::Apply(TodoAction::Add {
                title: required(arg, "add")?.to_string(),
            }),
            "done" => Self::Apply(TodoAction::MarkDoneAt {
                index: index(arg, "done")?,
            }),
            "undone" => Self::Apply(TodoAction::MarkUndoneAt {
                index: index(arg, "undone")?,
            }),
            "done-title" => Self::Apply(TodoAction::MarkDoneByTitle {
                title: required(arg, "done-title")?.to_string(),
            }),
            "remove" => Self::Apply(TodoAction::RemoveAt {
                index: index(arg, "remove")?,
            }),
            "get" => Self::Get(index(arg, "get")?),
            "find" => Self::Find(required(arg, "find")?.to_string()),
            "all-done" => bare(arg, "all-done", Self::Apply(TodoAction::MarkAllDone))?,
            "all-undone" => bare(arg, "all-undone", Self::Apply(TodoAction::MarkAllUndone))?,
            "remove-first" => bare(arg, "remove-first", Self::Apply(TodoAction::RemoveFirst))?,
            "remove-last" => bare(arg, "remove-last", Self::Apply(TodoAction::RemoveLast))?,
            "first" => bare(arg, "first", Self::First)?,
            "last" => bare(arg, "last", Self::Last)?,
            "size" => bare(arg, "size", Self::Size)?,
            "status" => bare(arg, "status", Self::Status)?,
            "show" => bare(arg, "show", Self::Show)?,
            "show-done" => bare(arg, "show-done", Self::ShowDone)?,
            "show-pending" => bare(arg, "show-pending", Self::ShowPending)?,
            "json" => bare(arg, "json", Self::Json)?,
            "help" => bare(arg, "help", Self::Help)?,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required<'a>(arg: Option<&'a str>, command: &'static str) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument(command))
}

fn index(arg: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    let arg = required(arg, command)?;
    arg.parse()
        .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
}

fn bare(
    arg: Option<&str>,
    command: &'static str,
    parsed: Command,
) -> Result<Command, CommandError> {
    match arg {
        Some(_) => Err(CommandError::UnexpectedArgument(command)),
        None => Ok(parsed),
    }
}
