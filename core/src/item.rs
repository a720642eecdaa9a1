//! A single todo entry.
//!
//! An [`Item`] is a handle: cloning it yields another handle to the same
//! entry, so marking one clone done is visible through every other clone.
//! This is what lets [`ItemList::filter`](crate::ItemList::filter) hand out
//! items that stay linked to the list they came from. Use [`Item::detach`]
//! for an independent copy.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Marker rendered for a done item
pub const DONE_MARKER: char = 'X';

/// Marker rendered for an undone item
pub const UNDONE_MARKER: char = ' ';

#[derive(Debug)]
struct ItemState {
    title: String,
    done: Cell<bool>,
}

/// A todo with an immutable title and a done flag
///
/// # Example
///
/// ```
/// use todo_list_core::Item;
///
/// let item = Item::new("Buy milk");
/// assert!(!item.is_done());
/// assert_eq!(item.render(), "[ ] Buy milk");
///
/// item.mark_done();
/// assert_eq!(item.render(), "[X] Buy milk");
/// ```
#[derive(Debug, Clone)]
pub struct Item {
    inner: Rc<ItemState>,
}

impl Item {
    /// Creates a new undone item
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ItemState {
                title: title.into(),
                done: Cell::new(false),
            }),
        }
    }

    /// Returns the title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// Returns whether the item is done
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.inner.done.get()
    }

    /// Marks the item as done
    pub fn mark_done(&self) {
        self.inner.done.set(true);
    }

    /// Marks the item as not done
    pub fn mark_undone(&self) {
        self.inner.done.set(false);
    }

    /// Returns the rendering marker for the current state
    #[must_use]
    pub fn marker(&self) -> char {
        if self.is_done() {
            DONE_MARKER
        } else {
            UNDONE_MARKER
        }
    }

    /// Renders the item as `[X] title` or `[ ] title`
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns true if both handles point at the same entry
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns an independent copy with the same title and done flag
    #[must_use]
    pub fn detach(&self) -> Self {
        let copy = Self::new(self.inner.title.clone());
        copy.inner.done.set(self.is_done());
        copy
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.title() == other.title() && self.is_done() == other.is_done()
    }
}

impl Eq for Item {}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title())
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Item", 2)?;
        state.serialize_field("title", self.title())?;
        state.serialize_field("done", &self.is_done())?;
        state.end()
    }
}
