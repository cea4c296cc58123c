//! Fuzzy filtering for the list engine.
//!
//! Items are matched against their `filter_value()` with a skim-style fuzzy
//! matcher. Matching items keep their original relative order, and the matched
//! character indices are stored for delegates to highlight.

use super::types::FilteredItem;
use super::Model;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl Model {
    /// Sets the filter text and recomputes the visible items.
    ///
    /// Setting the text the list already filters by is a no-op, so callers may
    /// push the current text on every update. Any actual change moves the
    /// cursor back to the first visible item.
    ///
    /// # Examples
    ///
    /// ```
    /// # use teaset::list::{to_items, DefaultDelegate, DefaultItem, Model};
    /// let items = to_items(vec![
    ///     DefaultItem::new("Apple", ""),
    ///     DefaultItem::new("Banana", ""),
    ///     DefaultItem::new("Cherry", ""),
    /// ]);
    /// let mut list = Model::new(items, DefaultDelegate::new(), 80, 24);
    ///
    /// list.set_filter("an");
    /// assert_eq!(list.len(), 1);
    ///
    /// list.set_filter("");
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn set_filter(&mut self, filter: &str) {
        if self.filter == filter {
            return;
        }
        self.filter = filter.to_string();
        self.apply_filter();
        self.cursor = 0;
        self.update_pagination();
    }

    /// The text the list is currently filtered by.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Match indices for the visible item at `index`, empty when unfiltered.
    pub fn matches_for_index(&self, index: usize) -> &[usize] {
        self.filtered
            .get(index)
            .map(|fi| fi.matches.as_slice())
            .unwrap_or(&[])
    }

    pub(super) fn apply_filter(&mut self) {
        if self.filter.is_empty() {
            self.filtered = (0..self.items.len())
                .map(|index| FilteredItem {
                    index,
                    matches: Vec::new(),
                })
                .collect();
            return;
        }

        let matcher = SkimMatcherV2::default();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                matcher
                    .fuzzy_indices(&item.filter_value(), &self.filter)
                    .map(|(_, matches)| FilteredItem { index, matches })
            })
            .collect();
    }
}
