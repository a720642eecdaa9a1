//! Error types for todo list operations

use thiserror::Error;

/// Errors returned by fallible [`ItemList`](crate::ItemList) operations
///
/// Both variants are caller errors: the list is left unchanged and nothing
/// is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No item exists at the requested position
    #[error("Invalid index: {index} (list has {len} items)")]
    IndexOutOfRange {
        /// Requested zero-based position
        index: usize,
        /// Number of items in the list at the time of the call
        len: usize,
    },

    /// No item carries the requested title
    #[error("No todo titled {0:?}")]
    TitleNotFound(String),
}
