//! Vertical page-dot column.

use lipgloss_extras::prelude::*;
use tracing::warn;

/// Glyph of a page other than the current one.
pub const DOT_EMPTY: &str = "○";

/// Glyph of the current page.
pub const DOT_FILLED: &str = "●";

/// Declared configuration of the page-dot column.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    /// Style overrides.
    pub styles: PaginatorStyles,
}

/// Styles of the page-dot column.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// Style around the whole column.
    pub boundary: Style,
    /// Style of a page dot.
    pub dot_empty: Style,
    /// Style of the current page dot.
    pub dot_filled: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        Self {
            boundary: Style::new(),
            dot_empty: Style::new(),
            dot_filled: Style::new(),
        }
    }
}

/// Applies the fixed gap between the list and the column.
pub fn merge_paginator_styles(mut styles: PaginatorStyles) -> PaginatorStyles {
    styles.boundary = styles.boundary.margin_left(1);
    styles
}

/// Renders one dot per page, the dot at `position` filled.
///
/// Returns an empty string when there are no pages. When `total` reaches
/// `height` only the first `height` dots are kept, which can hide the filled
/// one.
pub fn render(position: usize, total: usize, height: usize, styles: &PaginatorStyles) -> String {
    if total == 0 {
        return String::new();
    }

    let position = if position < total {
        position
    } else {
        warn!(position, total, "page position out of range, clamping");
        total - 1
    };

    let mut dots: Vec<String> = (0..total)
        .map(|_| styles.dot_empty.render(DOT_EMPTY))
        .collect();
    if let Some(dot) = dots.get_mut(position) {
        *dot = styles.dot_filled.render(DOT_FILLED);
    }

    if total >= height {
        dots.truncate(height);
    }

    styles.boundary.render(&dots.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;
    use pretty_assertions::assert_eq;

    fn plain(position: usize, total: usize, height: usize) -> String {
        lipgloss::strip_ansi(&render(position, total, height, &PaginatorStyles::default()))
    }

    #[test]
    fn test_no_pages() {
        assert_eq!(render(0, 0, 5, &PaginatorStyles::default()), "");
    }

    #[test]
    fn test_marks_current_page() {
        assert_eq!(plain(1, 3, 5), "○\n●\n○");
        assert_eq!(plain(0, 1, 5), "●");
    }

    #[test]
    fn test_truncates_to_height() {
        let out = plain(0, 9, 3);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out, "●\n○\n○");

        assert_eq!(plain(4, 4, 4).lines().count(), 4);
    }

    #[test]
    fn test_truncation_can_hide_current_page() {
        assert_eq!(plain(5, 9, 3), "○\n○\n○");
    }

    #[test]
    fn test_out_of_range_position_clamps() {
        assert_eq!(plain(7, 3, 5), "○\n○\n●");
    }

    #[test]
    fn test_boundary_margin() {
        let styles = merge_paginator_styles(PaginatorStyles::default());
        let out = lipgloss::strip_ansi(&render(0, 2, 5, &styles));
        assert_eq!(out, " ●\n ○");
    }
}
