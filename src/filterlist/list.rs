//! List configuration and the compact item delegate.

use crate::list::DefaultDelegate;
use lipgloss_extras::prelude::*;

/// Default glyph left of the selected item.
pub const DEFAULT_ITEM_INDICATOR: &str = "❯";

/// Declared configuration of the list.
///
/// `width` and `height` are derived from the widget size on every update;
/// writes to them are overwritten.
#[derive(Debug, Clone, Default)]
pub struct List {
    /// Width available to items.
    pub width: usize,
    /// Number of item rows.
    pub height: usize,
    /// Style overrides.
    pub styles: ListStyles,
}

/// Styles of the list.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Unselected item.
    pub item: Style,
    /// Selected item, drawn behind the indicator.
    pub item_selected: Style,
    /// Glyph left of the selected item. Empty falls back to `❯`.
    pub item_indicator: String,
    /// Message shown when no item is visible.
    pub no_items: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            item: Style::new(),
            item_selected: Style::new(),
            item_indicator: DEFAULT_ITEM_INDICATOR.to_string(),
            no_items: Style::new().foreground(Color::from("#626262")),
        }
    }
}

/// Applies the fixed item padding on top of `styles`.
///
/// The indicator and the selected padding take the same two cells as the
/// unselected padding, so titles line up.
pub fn merge_list_styles(mut styles: ListStyles) -> ListStyles {
    styles.item = styles.item.padding_left(2);
    styles.item_selected = styles.item_selected.padding_left(1);
    if styles.item_indicator.is_empty() {
        styles.item_indicator = DEFAULT_ITEM_INDICATOR.to_string();
    }
    styles
}

/// Builds a single-line delegate without descriptions or spacing.
pub fn new_delegate(styles: &ListStyles) -> DefaultDelegate {
    let mut d = DefaultDelegate::new();
    d.set_spacing(0);
    d.show_description = false;
    d.indicator = styles.item_indicator.clone();
    d.styles.normal_title = styles.item.clone();
    d.styles.selected_title = styles.item_selected.clone();
    d.styles.indicator = Style::new();
    d
}
