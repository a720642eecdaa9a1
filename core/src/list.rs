//! Ordered collection of todo items.

use crate::error::TodoError;
use crate::item::Item;
use serde::Serialize;
use std::fmt;

/// Header line written before the items by [`ItemList::render`]
pub const HEADER: &str = "---- Today's Todos ----";

/// An ordered, titled list of [`Item`]s
///
/// Insertion order is preserved. Positional operations use zero-based
/// indices and fail with [`TodoError::IndexOutOfRange`] when no item exists
/// at the position.
///
/// Items are shared handles, so `clone` copies the handles and not the
/// items: a clone sees done flags set through the original and vice versa.
/// Use [`ItemList::detach`] for an independent copy.
///
/// # Example
///
/// ```
/// use todo_list_core::{Item, ItemList};
///
/// let mut list = ItemList::new("Today");
/// list.add(Item::new("A"));
/// list.add(Item::new("B"));
/// list.mark_done_at(1)?;
///
/// assert_eq!(list.render(), "---- Today's Todos ----\n[ ] A\n[X] B\n");
/// # Ok::<(), todo_list_core::TodoError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemList {
    title: String,
    items: Vec<Item>,
}

impl ItemList {
    /// Creates an empty list
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Returns the list title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends an item to the end of the list
    pub fn add(&mut self, item: Item) {
        tracing::trace!(
            title = item.title(),
            position = self.items.len(),
            "adding item"
        );
        self.items.push(item);
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first item, if any
    #[must_use]
    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    /// Returns the last item, if any
    #[must_use]
    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    /// Returns the item at `index`
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if no item exists at `index`.
    pub fn item_at(&self, index: usize) -> Result<&Item, TodoError> {
        self.items.get(index).ok_or(TodoError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Marks the item at `index` as done
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if no item exists at `index`.
    pub fn mark_done_at(&self, index: usize) -> Result<(), TodoError> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the item at `index` as not done
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if no item exists at `index`.
    pub fn mark_undone_at(&self, index: usize) -> Result<(), TodoError> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Returns true if every item is done (vacuously true when empty)
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.items.iter().all(Item::is_done)
    }

    /// Removes and returns the first item
    pub fn remove_first(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(0);
        tracing::trace!(title = item.title(), "removed first item");
        Some(item)
    }

    /// Removes and returns the last item
    pub fn remove_last(&mut self) -> Option<Item> {
        let item = self.items.pop()?;
        tracing::trace!(title = item.title(), "removed last item");
        Some(item)
    }

    /// Removes and returns the item at `index`, shifting later items down
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::IndexOutOfRange`] if no item exists at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Item, TodoError> {
        self.item_at(index)?;
        let item = self.items.remove(index);
        tracing::trace!(title = item.title(), index, "removed item");
        Ok(item)
    }

    /// Renders the header followed by one newline-terminated line per item
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Calls `visitor` once per item, in order
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Item),
    {
        self.items.iter().for_each(visitor);
    }

    /// Returns a new list with the same title holding the items for which
    /// `predicate` returns true, in order
    ///
    /// The returned list shares its items with this one: marking a filtered
    /// item done also marks it done here.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Item) -> bool,
    {
        let mut filtered = Self::new(self.title.clone());
        for item in &self.items {
            if predicate(item) {
                filtered.add(item.clone());
            }
        }
        filtered
    }

    /// Returns an iterator over the items in order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Returns the first item with exactly `title`
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.title() == title)
    }

    /// Returns a list of the done items
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(Item::is_done)
    }

    /// Returns a list of the items not yet done
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|item| !item.is_done())
    }

    /// Marks the first item with exactly `title` as done
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TitleNotFound`] if no item has that title.
    pub fn mark_done_by_title(&self, title: &str) -> Result<(), TodoError> {
        self.find_by_title(title)
            .ok_or_else(|| TodoError::TitleNotFound(title.to_string()))?
            .mark_done();
        Ok(())
    }

    /// Marks every item as done
    pub fn mark_all_done(&self) {
        self.for_each(Item::mark_done);
    }

    /// Marks every item as not done
    pub fn mark_all_undone(&self) {
        self.for_each(Item::mark_undone);
    }

    /// Returns the items as a vector of shared handles
    #[must_use]
    pub fn to_vec(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Returns a copy of the list whose items share no state with this one
    #[must_use]
    pub fn detach(&self) -> Self {
        Self {
            title: self.title.clone(),
            items: self.items.iter().map(Item::detach).collect(),
        }
    }
}

impl fmt::Display for ItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> ItemList {
        let mut list = ItemList::new("Today");
        for title in ["A", "B", "C"] {
            list.add(Item::new(title));
        }
        list
    }

    #[test]
    fn new_list_is_empty() {
        let list = ItemList::new("Today");
        assert_eq!(list.title(), "Today");
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
    }

    #[test]
    fn add_preserves_order() {
        let list = abc();
        assert_eq!(list.len(), 3);
        let titles: Vec<&str> = list.iter().map(Item::title).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(list.first().map(Item::title), Some("A"));
        assert_eq!(list.last().map(Item::title), Some("C"));
    }

    #[test]
    fn item_at_out_of_range() {
        let list = abc();
        assert_eq!(
            list.item_at(3),
            Err(TodoError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(ItemList::new("Empty").item_at(0).is_err());
    }

    #[test]
    fn mark_done_at_then_undone_at() {
        let list = abc();
        list.mark_done_at(1).expect("index in range");
        assert_eq!(list.item_at(1).map(Item::is_done), Ok(true));

        list.mark_undone_at(1).expect("index in range");
        assert_eq!(list.item_at(1).map(Item::is_done), Ok(false));

        assert!(list.mark_done_at(7).is_err());
        assert!(list.mark_undone_at(7).is_err());
    }

    #[test]
    fn is_done_requires_every_item() {
        assert!(ItemList::new("Empty").is_done());

        let list = abc();
        assert!(!list.is_done());
        list.mark_all_done();
        assert!(list.is_done());
        list.mark_undone_at(2).expect("index in range");
        assert!(!list.is_done());
    }

    #[test]
    fn remove_first_and_last() {
        let mut list = abc();
        let first = list.remove_first();
        let last = list.remove_last();
        assert_eq!(first.as_ref().map(Item::title), Some("A"));
        assert_eq!(last.as_ref().map(Item::title), Some("C"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().map(Item::title), Some("B"));

        let mut empty = ItemList::new("Empty");
        assert!(empty.remove_first().is_none());
        assert!(empty.remove_last().is_none());
    }

    #[test]
    fn remove_at_shifts_later_items() {
        let mut list = abc();
        let removed = list.remove_at(0);
        assert_eq!(removed.as_ref().map(Item::title), Ok("A"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.item_at(0).map(Item::title), Ok("B"));

        assert_eq!(
            list.remove_at(2),
            Err(TodoError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn render_empty_list_is_header_only() {
        assert_eq!(ItemList::new("Today").render(), "---- Today's Todos ----\n");
    }

    #[test]
    fn render_scenario() {
        let list = abc();
        list.mark_done_at(1).expect("index in range");
        assert_eq!(
            list.render(),
            "---- Today's Todos ----\n[ ] A\n[X] B\n[ ] C\n"
        );
    }

    #[test]
    fn for_each_visits_in_order() {
        let list = abc();
        let mut seen = Vec::new();
        list.for_each(|item| seen.push(item.title().to_string()));
        assert_eq!(seen, ["A", "B", "C"]);
    }

    #[test]
    fn filter_shares_items_with_source() {
        let list = abc();
        let filtered = list.filter(|item| item.title() != "B");

        assert_eq!(filtered.title(), "Today");
        assert_eq!(filtered.len(), 2);
        assert_eq!(list.len(), 3);

        filtered.mark_done_at(1).expect("index in range");
        assert_eq!(list.item_at(2).map(Item::is_done), Ok(true));
        assert!(
            filtered
                .item_at(0)
                .ok()
                .zip(list.item_at(0).ok())
                .is_some_and(|(a, b)| a.ptr_eq(b))
        );
    }

    #[test]
    fn find_and_mark_by_title() {
        let list = abc();
        assert_eq!(list.find_by_title("C").map(Item::title), Some("C"));
        assert!(list.find_by_title("Z").is_none());

        assert_eq!(list.mark_done_by_title("C"), Ok(()));
        assert_eq!(list.last().map(Item::is_done), Some(true));
        assert_eq!(
            list.mark_done_by_title("Z"),
            Err(TodoError::TitleNotFound("Z".to_string()))
        );
    }

    #[test]
    fn all_done_and_all_not_done_partition() {
        let list = abc();
        list.mark_done_at(0).expect("index in range");

        let done = list.all_done();
        let pending = list.all_not_done();
        assert_eq!(done.len(), 1);
        assert_eq!(pending.len(), 2);
        assert_eq!(pending.first().map(Item::title), Some("B"));
    }

    #[test]
    fn to_vec_is_detached_from_list_length() {
        let list = abc();
        let mut items = list.to_vec();
        items.clear();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn clone_shares_item_state() {
        let list = abc();
        let cloned = list.clone();
        let detached = list.detach();

        list.mark_done_at(0).expect("index in range");
        assert_eq!(cloned.first().map(Item::is_done), Some(true));
        assert_eq!(detached.first().map(Item::is_done), Some(false));
        assert_ne!(detached, list);

        detached.mark_all_done();
        assert_eq!(list.all_done().len(), 1);
    }

    #[test]
    fn serializes_title_and_items() {
        let list = abc();
        list.mark_done_at(0).expect("index in range");

        let json = serde_json::to_value(&list).expect("valid JSON");
        assert_eq!(json["title"], "Today");
        assert_eq!(json["items"][0]["done"], true);
        assert_eq!(json["items"][2]["title"], "C");
    }
}
