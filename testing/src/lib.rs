//! # Todo List Testing
//!
//! Testing utilities and helpers for the todo list.
//!
//! This crate provides:
//! - Fixtures for commonly used lists
//! - Property-based testing strategies
//! - A Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```
//! use todo_list_testing::fixtures;
//!
//! let list = fixtures::today_scenario();
//! assert_eq!(
//!     list.render(),
//!     "---- Today's Todos ----\n[ ] A\n[X] B\n[ ] C\n"
//! );
//! ```

use todo_list_core::{Item, ItemList};


/// Fixtures for commonly used lists
pub mod fixtures {
    use super::{Item, ItemList};

    /// Build a list titled `title` holding undone items with `titles`, in order
    #[must_use]
    pub fn list_of(title: &str, titles: &[&str]) -> ItemList {
        let mut list = ItemList::new(title);
        for item_title in titles {
            list.add(Item::new(*item_title));
        }
        list
    }

    /// List "Today" with items A, B, C where B is done
    #[must_use]
    pub fn today_scenario() -> ItemList {
        let list = list_of("Today", &["A", "B", "C"]);
        if let Ok(item) = list.item_at(1) {
            item.mark_done();
        }
        list
    }
}

/// Property-based testing strategies using proptest
pub mod properties {
    use super::{Item, ItemList};
    use proptest::prelude::*;
    use todo_list_core::TodoAction;

    /// Arbitrary item titles, including empty ones
    pub fn arb_title() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ]{0,16}"
    }

    /// Arbitrary items in either done state
    pub fn arb_item() -> impl Strategy<Value = Item> {
        (arb_title(), any::<bool>()).prop_map(|(title, done)| {
            let item = Item::new(title);
            if done {
                item.mark_done();
            }
            item
        })
    }

    /// Arbitrary lists of up to `max_len` items
    pub fn arb_list(max_len: usize) -> impl Strategy<Value = ItemList> {
        let items = prop::collection::vec(arb_item(), 0..=max_len);
        (arb_title(), items).prop_map(|(title, items)| {
            let mut list = ItemList::new(title);
            for item in items {
                list.add(item);
            }
            list
        })
    }

    /// Arbitrary actions with indices below `max_index`
    pub fn arb_action(max_index: usize) -> impl Strategy<Value = TodoAction> {
        let index = 0..max_index.max(1);
        prop_oneof![
            arb_title().prop_map(|title| TodoAction::Add { title }),
            index
                .clone()
                .prop_map(|index| TodoAction::MarkDoneAt { index }),
            index
                .clone()
                .prop_map(|index| TodoAction::MarkUndoneAt { index }),
            arb_title()
                .prop_map(|title| TodoAction::MarkDoneByTitle { title }),
            Just(TodoAction::MarkAllDone),
            Just(TodoAction::MarkAllUndone),
            index.prop_map(|index| TodoAction::RemoveAt { index }),
            Just(TodoAction::RemoveFirst),
            Just(TodoAction::RemoveLast),
        ]
    }
}

// Re-export commonly used items
pub use fixtures::{list_of, today_scenario};
pub use reducer_test::{ReducerTest, assertions};
