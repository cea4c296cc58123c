//! View rendering for the list engine.

use super::model::NO_ITEMS;
use super::Model;

impl Model {
    /// Renders the current page of items, padded with blank lines to the height.
    ///
    /// Each visible item on the page goes through the delegate with its filter
    /// matches. An empty list renders the no-items message instead.
    pub fn view(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if self.is_empty() {
            lines.push(self.no_items_style.render(NO_ITEMS));
        } else {
            let (start, end) = self.paginator.get_slice_bounds(self.len());
            let spacing = self.delegate.spacing();
            let page = self.filtered.get(start..end).unwrap_or(&[]);
            for (offset, fi) in page.iter().enumerate() {
                let Some(item) = self.items.get(fi.index) else {
                    continue;
                };
                let index = start + offset;
                if offset > 0 {
                    lines.extend((0..spacing).map(|_| String::new()));
                }
                let selected = index == self.cursor;
                let rendered = self.delegate.render(item.as_ref(), selected, &fi.matches, self.width);
                lines.extend(rendered.lines().map(str::to_string));
            }
        }

        while lines.len() < self.height {
            lines.push(String::new());
        }
        lines.join("\n")
    }
}
