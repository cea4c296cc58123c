//! Filter list: a filter field, a selectable list and a page-dot column.
//!
//! The three parts share one focus and one size. Typed characters go to the
//! filter field and narrow the list by fuzzy match; arrow and page keys move
//! the list cursor; `enter` commits the item under the cursor and `esc` clears
//! the filter and moves back to the first item.
//!
//! ```
//! use teaset::filterlist::{self, SyncMsg};
//! use teaset::list::{to_items, DefaultItem};
//!
//! let mut fl = filterlist::new();
//! fl.set_items(to_items(vec![
//!     DefaultItem::new("apple", ""),
//!     DefaultItem::new("banana", ""),
//! ]));
//! fl.focus();
//! fl.update(Box::new(SyncMsg));
//! assert!(fl.focused());
//! assert_eq!(fl.selected_item().map(|i| i.title()), Some("apple".to_string()));
//! ```
//!
//! Configuration lives in the public `text_input`, `list` and `paginator`
//! fields and is pushed into the parts at the start of every update. The
//! computed widths and height are written back into that configuration.

pub mod list;
pub mod paginator;
pub mod textinput;


pub use list::{merge_list_styles, new_delegate, List, ListStyles, DEFAULT_ITEM_INDICATOR};
pub use paginator::{
    merge_paginator_styles, Paginator, PaginatorStyles, DOT_EMPTY, DOT_FILLED,
};
pub use textinput::{
    merge_text_input_styles, text_input_prompt, TextInput, TextInputStyles, DEFAULT_PROMPT_MARK,
    DEFAULT_PROMPT_TEXT,
};

use crate::key::{self, Binding};
use crate::list::ListItem;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use tracing::{debug, warn};

/// Default width in cells.
pub const DEFAULT_WIDTH: usize = 20;

/// Default height in lines.
pub const DEFAULT_HEIGHT: usize = 5;

/// Cells reserved right of the list: indicator, selected padding, column gap
/// and the dot column itself.
const GUTTER: usize = 4;

/// A message that only resynchronizes the widget.
///
/// Any message the widget does not handle has the same effect; this one exists
/// so callers can apply configuration changes without inventing a message type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncMsg;

/// Key bindings handled by the widget itself.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Commit the item under the cursor.
    pub accept: Binding,
    /// Clear the filter and move back to the first item.
    pub cancel: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            accept: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.accept, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.accept, &self.cancel]]
    }
}

/// The filter list widget.
pub struct Model {
    /// Width in cells, including the dot column.
    pub width: usize,
    /// Height in lines, including the filter field.
    pub height: usize,
    /// Filter field configuration.
    pub text_input: TextInput,
    /// List configuration.
    pub list: List,
    /// Dot column configuration.
    pub paginator: Paginator,
    /// Accept and cancel bindings.
    pub key_map: KeyMap,

    focus: bool,
    input: crate::textinput::Model,
    items: crate::list::Model,
    selected_item: Option<ListItem>,
    undersized: Option<(usize, usize)>,
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Creates an empty, blurred filter list with default size and prompt.
pub fn new() -> Model {
    let list = List::default();
    let delegate = new_delegate(&merge_list_styles(list.styles.clone()));

    let mut m = Model {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        text_input: TextInput::default(),
        list,
        paginator: Paginator::default(),
        key_map: KeyMap::default(),
        focus: false,
        input: crate::textinput::new(),
        items: crate::list::Model::new(Vec::new(), delegate, 0, 0),
        selected_item: None,
        undersized: None,
    };
    m.sync();
    m
}

impl Model {
    /// Resynchronizes the parts, then handles `msg` if focused.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.sync();

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.accept.matches(key_msg) {
                self.selected_item = self.items.selected_item().cloned();
                debug!(
                    item = ?self.selected_item.as_ref().map(|i| i.title()),
                    "filter list committed selection"
                );
            } else if self.key_map.cancel.matches(key_msg) {
                self.input.reset();
                self.items.reset_selected();
                debug!("filter list cleared");
            }
        }

        // Accept and cancel keys reach both parts as well.
        self.input.update(&msg);
        self.items.update(&msg);
        self.sync_filter();

        None
    }

    /// Renders the filter field above the list, with the dot column on the right.
    pub fn view(&self) -> String {
        let paginator_styles = merge_paginator_styles(self.paginator.styles.clone());

        let input = self.input.view();
        let items = self.items.view();
        let left = lipgloss::join_vertical(lipgloss::LEFT, &[input.as_str(), items.as_str()]);
        let right = paginator::render(
            self.items.page(),
            self.items.total_pages(),
            self.height,
            &paginator_styles,
        );

        lipgloss::join_horizontal(lipgloss::TOP, &[left.as_str(), right.as_str()])
    }

    /// Current filter text.
    pub fn filter(&self) -> String {
        self.input.value()
    }

    /// The item under the cursor, if any.
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.selected_item()
    }

    /// The item last committed with the accept key, if any.
    pub fn committed_item(&self) -> Option<&ListItem> {
        self.selected_item.as_ref()
    }

    /// Moves the cursor to visible item `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        self.items.select(index);
    }

    /// Replaces the items, keeping them filtered by the current filter text.
    pub fn set_items(&mut self, items: Vec<ListItem>) {
        self.items.set_items(items);
        self.sync_filter();
    }

    /// Whether the widget receives input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the widget focus. The filter field follows on the next update.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus. The filter field follows on the next update.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn sync(&mut self) {
        let input_styles = merge_text_input_styles(self.text_input.styles.clone());
        let list_styles = merge_list_styles(self.list.styles.clone());

        let prompt = text_input_prompt(&self.text_input, &input_styles);
        let prompt_width = lipgloss::width_visible(&prompt);

        // One warning per undersized geometry.
        if self.width < prompt_width + GUTTER || self.height == 0 {
            let size = (self.width, self.height);
            if self.undersized != Some(size) {
                warn!(
                    width = self.width,
                    height = self.height,
                    "filter list too small, clamping parts to zero"
                );
                self.undersized = Some(size);
            }
        } else {
            self.undersized = None;
        }

        self.text_input.width = self.width.saturating_sub(prompt_width + GUTTER);
        self.list.width = self.width.saturating_sub(GUTTER);
        self.list.height = self.height.saturating_sub(1);

        self.input.prompt = prompt;
        self.input.prompt_style = Style::new();
        self.input.text_style = input_styles.text;
        self.input.placeholder_style = input_styles.placeholder;
        self.input.cursor_style = input_styles.cursor;
        self.input.set_placeholder(&self.text_input.placeholder);
        self.input.set_char_limit(self.text_input.char_limit);
        self.input.set_width(self.text_input.width);

        self.items.no_items_style = list_styles.no_items.clone();
        self.items.set_width(self.list.width);
        self.items.set_height(self.list.height);
        self.items.set_delegate(new_delegate(&list_styles));
        self.sync_filter();

        // Focus of the filter field only changes here.
        if self.focus && !self.input.focused() {
            self.input.focus();
        } else if !self.focus && self.input.focused() {
            self.input.blur();
        }
    }

    /// Narrows the list to the filter field's text. A changed filter moves
    /// the cursor to the first match.
    fn sync_filter(&mut self) {
        let filter = self.input.value();
        if filter != self.items.filter() {
            self.items.set_filter(&filter);
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self);
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
