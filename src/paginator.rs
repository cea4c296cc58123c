//! Page arithmetic for paged content.
//!
//! This model only tracks which page is current and how many pages exist; it
//! renders nothing. The list engine keeps one of these in step with its cursor,
//! and the filter list reads `page`/`total_pages` to draw its dot column.

/// Pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Zero-based current page.
    pub page: usize,
    /// Number of items on a full page, never less than one.
    pub per_page: usize,
    /// Number of pages, never less than one.
    pub total_pages: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 1,
            total_pages: 1,
        }
    }
}

impl Model {
    /// Creates a paginator with one item per page and a single page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page. Zero is raised to one.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes the page count for the given number of items.
    ///
    /// An empty collection still occupies one page. The current page is pulled
    /// back onto the last page if it no longer exists.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };

        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Start and end indices of the current page within a collection of `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves back one page unless already on the first.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Moves forward one page unless already on the last.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Whether the first page is current.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the last page is current.
    pub fn on_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }
}
