//! Default item implementation and delegate for the list engine.
//!
//! `DefaultItem` is a plain title/description pair. `DefaultDelegate` renders
//! any [`Item`] with a left indicator on the selected row, truncates titles to
//! the list width and underlines the characters matched by the filter.
//!
//! ## Example
//!
//! ```rust
//! use teaset::list::{DefaultDelegate, DefaultItem, Item, ItemDelegate};
//!
//! let item = DefaultItem::new("Task 1", "Complete the documentation");
//! let delegate = DefaultDelegate::new();
//! let line = delegate.render(&item, false, &[], 40);
//! assert!(line.contains("Task 1"));
//! ```

use super::{Item, ItemDelegate};
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Indicator drawn left of the selected item.
pub const DEFAULT_INDICATOR: &str = "│";

/// Cells reserved left of the title for the indicator and padding.
const GUTTER: usize = 2;

/// Wraps the characters at `matches` in `highlight`, leaving the rest untouched.
fn apply_character_highlighting(text: &str, matches: &[usize], highlight: &Style) -> String {
    if matches.is_empty() {
        return text.to_string();
    }

    let mut sorted = matches.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut result = String::new();
    let mut run = String::new();
    let mut next = sorted.iter().peekable();
    for (i, c) in text.chars().enumerate() {
        if next.peek() == Some(&&i) {
            next.next();
            if !run.is_empty() {
                result.push_str(&run);
                run.clear();
            }
            result.push_str(&highlight.render(&c.to_string()));
        } else {
            run.push(c);
        }
    }
    result.push_str(&run);
    result
}

/// Truncates `text` to `width` cells, ending with `…` when shortened.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Styling for the default list item in its two states.
#[derive(Debug, Clone)]
pub struct DefaultItemStyles {
    /// Title style in normal (unselected) state.
    pub normal_title: Style,
    /// Description style in normal (unselected) state.
    pub normal_desc: Style,
    /// Title style when the item is selected.
    pub selected_title: Style,
    /// Description style when the item is selected.
    pub selected_desc: Style,
    /// Style of the selection indicator.
    pub indicator: Style,
    /// Style used to highlight filter matches.
    pub filter_match: Style,
}

impl Default for DefaultItemStyles {
    fn default() -> Self {
        let normal_title = Style::new()
            .foreground(Color::from("#dddddd"))
            .padding_left(2);
        let normal_desc = normal_title.clone().foreground(Color::from("#777777"));
        let selected_title = Style::new()
            .foreground(Color::from("#EE6FF8"))
            .padding_left(1);
        let selected_desc = selected_title.clone().foreground(Color::from("#AD58B4"));
        let indicator = Style::new().foreground(Color::from("#AD58B4"));
        let filter_match = Style::new().underline(true);
        Self {
            normal_title,
            normal_desc,
            selected_title,
            selected_desc,
            indicator,
            filter_match,
        }
    }
}

/// Simple item with a title and optional description.
#[derive(Debug, Clone)]
pub struct DefaultItem {
    /// Main item text.
    pub title: String,
    /// Secondary item text.
    pub desc: String,
}

impl DefaultItem {
    /// Creates a new default item with title and description.
    pub fn new(title: &str, desc: &str) -> Self {
        Self {
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

impl std::fmt::Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Item for DefaultItem {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn description(&self) -> String {
        self.desc.clone()
    }
}

/// Delegate that renders items as a title with an optional description.
#[derive(Debug, Clone)]
pub struct DefaultDelegate {
    /// Whether to show the description beneath the title.
    pub show_description: bool,
    /// Styling used for the normal and selected states.
    pub styles: DefaultItemStyles,
    /// Glyph drawn left of the selected item.
    pub indicator: String,
    height: usize,
    spacing: usize,
}

impl Default for DefaultDelegate {
    fn default() -> Self {
        Self {
            show_description: true,
            styles: Default::default(),
            indicator: DEFAULT_INDICATOR.to_string(),
            height: 2,
            spacing: 1,
        }
    }
}

impl DefaultDelegate {
    /// Creates a new delegate with default styles and layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of lines an item takes when descriptions are shown.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// Sets the number of blank lines between items.
    pub fn set_spacing(&mut self, spacing: usize) {
        self.spacing = spacing;
    }
}

impl ItemDelegate for DefaultDelegate {
    fn render(&self, item: &dyn Item, selected: bool, matches: &[usize], width: usize) -> String {
        if width == 0 {
            return String::new();
        }

        let s = &self.styles;
        let avail = width.saturating_sub(GUTTER);
        let title = item.title();
        let title_text = truncate(&title, avail);
        let desc = truncate(&item.description(), avail);

        // Match indices point into filter_value, so only highlight when it is the title.
        let title_text = if !matches.is_empty() && item.filter_value() == title {
            apply_character_highlighting(&title_text, matches, &s.filter_match)
        } else {
            title_text
        };

        let (title_out, desc_out) = if selected {
            let prefix = s.indicator.render(&self.indicator);
            (
                format!("{}{}", prefix, s.selected_title.render(&title_text)),
                format!("{}{}", prefix, s.selected_desc.render(&desc)),
            )
        } else {
            (s.normal_title.render(&title_text), s.normal_desc.render(&desc))
        };

        if self.show_description && !desc.is_empty() {
            format!("{}\n{}", title_out, desc_out)
        } else {
            title_out
        }
    }

    fn height(&self) -> usize {
        if self.show_description {
            self.height
        } else {
            1
        }
    }

    fn spacing(&self) -> usize {
        self.spacing
    }
}
