//! List model: item storage, cursor, pagination and navigation.

use super::keys::ListKeyMap;
use super::types::{FilteredItem, ItemDelegate, ListItem};
use crate::paginator;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// Text shown when no item is visible.
pub const NO_ITEMS: &str = "No items.";

/// A paginated, filterable list of items.
///
/// The list renders only the page holding the cursor. The page always follows
/// the cursor: `page == cursor / per_page`, where `per_page` is derived from
/// the height and the delegate's item height and spacing.
pub struct Model {
    pub(super) items: Vec<ListItem>,
    pub(super) filtered: Vec<FilteredItem>,
    pub(super) filter: String,
    pub(super) delegate: Box<dyn ItemDelegate + Send + Sync>,
    pub(super) paginator: paginator::Model,
    pub(super) cursor: usize,
    pub(super) chosen: Option<usize>,
    pub(super) width: usize,
    pub(super) height: usize,
    /// Style of the empty-list message.
    pub no_items_style: Style,
    /// Navigation bindings.
    pub key_map: ListKeyMap,
}

impl Model {
    /// Creates a list of `items` rendered by `delegate` in a `width`×`height` area.
    pub fn new<D>(items: Vec<ListItem>, delegate: D, width: usize, height: usize) -> Self
    where
        D: ItemDelegate + Send + Sync + 'static,
    {
        let mut m = Self {
            items,
            filtered: Vec::new(),
            filter: String::new(),
            delegate: Box::new(delegate),
            paginator: paginator::Model::new(),
            cursor: 0,
            chosen: None,
            width,
            height,
            no_items_style: Style::new().foreground(Color::from("#626262")),
            key_map: ListKeyMap::default(),
        };
        m.apply_filter();
        m.update_pagination();
        m
    }

    /// Replaces the items, clearing the filter and moving the cursor to the top.
    pub fn set_items(&mut self, items: Vec<ListItem>) {
        self.items = items;
        self.filter.clear();
        self.chosen = None;
        self.cursor = 0;
        self.apply_filter();
        self.update_pagination();
    }

    /// All items, ignoring the filter.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Items passing the current filter, in their original order.
    pub fn visible_items(&self) -> Vec<ListItem> {
        self.filtered
            .iter()
            .filter_map(|fi| self.items.get(fi.index).cloned())
            .collect()
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether no item is visible.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Index of the cursor among the visible items.
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// The visible item under the cursor, if any.
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.filtered
            .get(self.cursor)
            .and_then(|fi| self.items.get(fi.index))
    }

    /// Moves the cursor to visible item `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len() {
            self.cursor = index;
            self.sync_page();
        }
    }

    /// Moves the cursor back to the first item and the first page.
    pub fn reset_selected(&mut self) {
        self.cursor = 0;
        self.paginator.page = 0;
    }

    /// The item last chosen with the choose binding, if any.
    pub fn chosen(&self) -> Option<&ListItem> {
        self.chosen.and_then(|i| self.items.get(i))
    }

    /// Width available to the delegate.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the width available to the delegate.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Height of the list in lines.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets the height, recomputing how many items fit on a page.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.update_pagination();
    }

    /// Replaces the delegate, recomputing how many items fit on a page.
    pub fn set_delegate<D>(&mut self, delegate: D)
    where
        D: ItemDelegate + Send + Sync + 'static,
    {
        self.delegate = Box::new(delegate);
        self.update_pagination();
    }

    /// Current page, zero-based.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// Number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Items shown per page.
    pub fn per_page(&self) -> usize {
        self.paginator.per_page
    }

    /// Handles navigation keys. Other messages are ignored.
    pub fn update(&mut self, msg: &Msg) {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return;
        };

        let len = self.len();
        let offset = self.cursor % self.paginator.per_page.max(1);
        let km = &self.key_map;

        if km.cursor_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if km.cursor_down.matches(key_msg) {
            if self.cursor + 1 < len {
                self.cursor += 1;
            }
        } else if km.next_page.matches(key_msg) {
            if !self.paginator.on_last_page() && len > 0 {
                self.paginator.next_page();
                self.cursor = self.cursor_on_page(offset).min(len - 1);
            }
        } else if km.prev_page.matches(key_msg) {
            if !self.paginator.on_first_page() {
                self.paginator.prev_page();
                self.cursor = self.cursor_on_page(offset);
            }
        } else if km.go_to_start.matches(key_msg) {
            self.cursor = 0;
        } else if km.go_to_end.matches(key_msg) {
            self.cursor = len.saturating_sub(1);
        } else if km.choose.matches(key_msg) {
            self.chosen = self.filtered.get(self.cursor).map(|fi| fi.index);
        }

        self.sync_page();
    }

    pub(super) fn update_pagination(&mut self) {
        let item_height = self.delegate.height() + self.delegate.spacing();
        let per_page = if item_height == 0 {
            1
        } else {
            (self.height / item_height).max(1)
        };
        self.paginator.set_per_page(per_page);
        self.paginator.set_total_items(self.len());
        if self.cursor >= self.len() {
            self.cursor = self.len().saturating_sub(1);
        }
        self.sync_page();
    }

    /// Cursor position at `offset` within the current page.
    fn cursor_on_page(&self, offset: usize) -> usize {
        let (start, _) = self.paginator.get_slice_bounds(self.len());
        start + offset
    }

    fn sync_page(&mut self) {
        let per_page = self.paginator.per_page.max(1);
        let last = self.paginator.total_pages.saturating_sub(1);
        self.paginator.page = (self.cursor / per_page).min(last);
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let delegate = super::DefaultDelegate::new();
        (Self::new(Vec::new(), delegate, 80, 24), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, &msg);
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
