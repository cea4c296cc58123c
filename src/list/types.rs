//! Core types and traits for the list engine.
//!
//! The list works over trait objects so one list can hold items of different
//! concrete types. [`to_items`] adapts a vector of any [`Item`] type.

use std::sync::Arc;

/// Something the list can display and filter.
pub trait Item: Send + Sync {
    /// Main line of the item.
    fn title(&self) -> String;

    /// Secondary text, shown by delegates that display descriptions.
    fn description(&self) -> String {
        String::new()
    }

    /// Text the filter is fuzzy-matched against.
    fn filter_value(&self) -> String {
        self.title()
    }
}

/// A shared, type-erased list item.
pub type ListItem = Arc<dyn Item>;

/// Adapts a vector of concrete items into list items.
pub fn to_items<T: Item + 'static>(values: Vec<T>) -> Vec<ListItem> {
    values
        .into_iter()
        .map(|v| Arc::new(v) as ListItem)
        .collect()
}

/// Renders items for the list.
pub trait ItemDelegate {
    /// Renders one item.
    ///
    /// `matches` holds the character indices of `filter_value()` matched by the
    /// active filter, empty when unfiltered. `width` is the list's width in cells.
    fn render(&self, item: &dyn Item, selected: bool, matches: &[usize], width: usize) -> String;

    /// Lines taken by one rendered item.
    fn height(&self) -> usize {
        1
    }

    /// Blank lines between items.
    fn spacing(&self) -> usize {
        0
    }
}

/// A visible item: its index in the full collection and its filter matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FilteredItem {
    pub index: usize,
    pub matches: Vec<usize>,
}
