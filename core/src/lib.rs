//! # Todo List Core
//!
//! An ordered, in-memory collection of todo items.
//!
//! ## Core Concepts
//!
//! - **Item**: a todo with an immutable title and a done flag
//! - **ItemList**: a titled, ordered list of items with positional access
//! - **TodoAction**: a mutation described as data
//! - **Reducer**: applies actions to a list, `(ItemList, TodoAction) → Outcome`
//!
//! Everything is synchronous and single-threaded. Items are shared handles:
//! a list produced by [`ItemList::filter`] refers to the same items as its
//! source.
//!
//! ## Example
//!
//! ```
//! use todo_list_core::{Item, ItemList};
//!
//! let mut list = ItemList::new("Today");
//! list.add(Item::new("A"));
//! list.add(Item::new("B"));
//! list.add(Item::new("C"));
//! list.mark_done_at(1)?;
//!
//! print!("{list}");
//! // ---- Today's Todos ----
//! // [ ] A
//! // [X] B
//! // [ ] C
//!
//! let removed = list.remove_at(0)?;
//! assert_eq!(removed.title(), "A");
//! assert_eq!(list.item_at(0)?.title(), "B");
//! # Ok::<(), todo_list_core::TodoError>(())
//! ```

pub mod error;
pub mod item;
pub mod list;
pub mod reducer;

// Re-export commonly used types
pub use error::TodoError;
pub use item::{DONE_MARKER, Item, UNDONE_MARKER};
pub use list::{HEADER, ItemList};
pub use reducer::{Outcome, Reducer, TodoAction, TodoReducer};
