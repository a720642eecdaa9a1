//! A front-end session: one list, fed one command line at a time.

use crate::command::{Command, CommandError, HELP};
use crate::config::{DemoConfig, OutputFormat};
use todo_list_core::{Item, ItemList, Outcome, Reducer, TodoError, TodoReducer};

/// Printed for `first`, `last` and removals when there is no item
const NOTHING: &str = "(none)";

/// Holds the session's list and executes commands against it
#[derive(Debug)]
pub struct Session {
    list: ItemList,
    reducer: TodoReducer,
    output: OutputFormat,
}

impl Session {
    /// Creates a session with an empty list titled from `config`
    #[must_use]
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            list: ItemList::new(config.title.clone()),
            reducer: TodoReducer::new(),
            output: config.output,
        }
    }

    /// Returns the session's list
    #[must_use]
    pub const fn list(&self) -> &ItemList {
        &self.list
    }

    /// Executes one command line, returning the text to print, if any
    ///
    /// Blank lines and lines starting with `#` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the line does not parse or the list
    /// rejects the operation. The list is unchanged in that case.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let command: Command = line.parse()?;
        tracing::debug!(?command, "executing command");

        let output = match command {
            Command::Apply(action) => match self.reducer.reduce(&mut self.list, action)? {
                Outcome::Added(item) => Some(format!("Added {item}")),
                Outcome::Updated => None,
                Outcome::Removed(item) => Some(format!("Removed {}", describe(item.as_ref()))),
            },
            Command::Get(index) => Some(self.list.item_at(index)?.render()),
            Command::First => Some(describe(self.list.first())),
            Command::Last => Some(describe(self.list.last())),
            Command::Size => Some(self.list.len().to_string()),
            Command::Status => Some(status(&self.list).to_string()),
            Command::Show => Some(self.show(&self.list)?),
            Command::ShowDone => Some(self.show(&self.list.all_done())?),
            Command::ShowPending => Some(self.show(&self.list.all_not_done())?),
            Command::Find(title) => Some(
                self.list
                    .find_by_title(&title)
                    .ok_or_else(|| TodoError::TitleNotFound(title.clone()))?
                    .render(),
            ),
            Command::Json => Some(serde_json::to_string_pretty(&self.list)?),
            Command::Help => Some(HELP.to_string()),
        };

        Ok(output)
    }

    fn show(&self, list: &ItemList) -> Result<String, CommandError> {
        match self.output {
            OutputFormat::Text => Ok(list.render().trim_end().to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(list)?),
        }
    }
}

fn status(list: &ItemList) -> &'static str {
    if list.is_done() { "done" } else { "not done" }
}

fn describe(item: Option<&Item>) -> String {
    item.map_or_else(|| NOTHING.to_string(), Item::render)
}
