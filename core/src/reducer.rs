//! Action-driven mutation of an [`ItemList`].
//!
//! Front-ends describe what they want done as a [`TodoAction`] and hand it to
//! [`TodoReducer`], which applies it to the list and reports an [`Outcome`].
//! A rejected action leaves the list untouched.

use crate::error::TodoError;
use crate::item::Item;
use crate::list::ItemList;

/// The Reducer trait - applies an action to some state
///
/// Reduction is synchronous and runs to completion; there are no effects to
/// schedule afterwards.
///
/// # Example
///
/// ```
/// use todo_list_core::{ItemList, Reducer, TodoAction, TodoReducer};
///
/// let mut list = ItemList::new("Today");
/// TodoReducer::new().reduce(&mut list, TodoAction::Add { title: "Buy milk".into() })?;
/// assert_eq!(list.len(), 1);
/// # Ok::<(), todo_list_core::TodoError>(())
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// What a successful reduction reports back
    type Output;

    /// Why an action was rejected
    type Error;

    /// Apply `action` to `state`
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the action cannot be applied. Implementations
    /// must leave `state` unchanged in that case.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
    ) -> Result<Self::Output, Self::Error>;
}

/// Mutations that can be applied to a todo list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new undone item
    Add {
        /// Title of the new item
        title: String,
    },

    /// Mark the item at a position as done
    MarkDoneAt {
        /// Zero-based position
        index: usize,
    },

    /// Mark the item at a position as not done
    MarkUndoneAt {
        /// Zero-based position
        index: usize,
    },

    /// Mark the first item with a title as done
    MarkDoneByTitle {
        /// Title to look up
        title: String,
    },

    /// Mark every item as done
    MarkAllDone,

    /// Mark every item as not done
    MarkAllUndone,

    /// Remove the item at a position
    RemoveAt {
        /// Zero-based position
        index: usize,
    },

    /// Remove the first item
    RemoveFirst,

    /// Remove the last item
    RemoveLast,
}

/// Result of a successfully applied [`TodoAction`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An item was appended
    Added(Item),
    /// One or more done flags were set
    Updated,
    /// An item was removed, or nothing was when the list was empty
    Removed(Option<Item>),
}

/// Reducer for [`ItemList`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = ItemList;
    type Action = TodoAction;
    type Output = Outcome;
    type Error = TodoError;

    fn reduce(&self, state: &mut ItemList, action: TodoAction) -> Result<Outcome, TodoError> {
        tracing::debug!(list = state.title(), ?action, "applying action");

        let outcome = match action {
            TodoAction::Add { title } => {
                let item = Item::new(title);
                state.add(item.clone());
                Outcome::Added(item)
            }
            TodoAction::MarkDoneAt { index } => {
                state.mark_done_at(index)?;
                Outcome::Updated
            }
            TodoAction::MarkUndoneAt { index } => {
                state.mark_undone_at(index)?;
                Outcome::Updated
            }
            TodoAction::MarkDoneByTitle { title } => {
                state.mark_done_by_title(&title)?;
                Outcome::Updated
            }
            TodoAction::MarkAllDone => {
                state.mark_all_done();
                Outcome::Updated
            }
            TodoAction::MarkAllUndone => {
                state.mark_all_undone();
                Outcome::Updated
            }
            TodoAction::RemoveAt { index } => Outcome::Removed(Some(state.remove_at(index)?)),
            TodoAction::RemoveFirst => Outcome::Removed(state.remove_first()),
            TodoAction::RemoveLast => Outcome::Removed(state.remove_last()),
        };

        tracing::debug!(list = state.title(), len = state.len(), "action applied");
        Ok(outcome)
    }
}
