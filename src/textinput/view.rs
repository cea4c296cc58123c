//! View rendering for the textinput component.

use super::methods::char_width;
use super::model::Model;

impl Model {
    /// Renders the prompt followed by the visible part of the value.
    ///
    /// The cursor occupies one cell past the value when it sits at the end, so a
    /// field with width `w` renders `w + 1` cells after the prompt.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = self.offset_right.min(self.value.len());
        let start = self.offset.min(end);
        let pos = self.pos.clamp(start, end);

        let mut v = String::new();
        v.push_str(&self.render_text(&self.value[start..pos]));

        let under_cursor = self.value.get(pos).copied().unwrap_or(' ');
        v.push_str(&self.cursor_view(under_cursor));

        if pos + 1 < end {
            v.push_str(&self.render_text(&self.value[pos + 1..end]));
        }

        let val_width: usize = self.value[start..end].iter().map(|&c| char_width(c)).sum();
        if self.width > 0 && val_width <= self.width {
            let mut padding = self.width - val_width;
            if pos < end {
                padding += 1;
            }
            if padding > 0 {
                v.push_str(&self.text_style.render(&" ".repeat(padding)));
            }
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let first = chars.next().unwrap_or(' ');
        let rest: String = chars.collect();

        let mut v = self.cursor_view(first);
        if !rest.is_empty() {
            v.push_str(&self.placeholder_style.render(&rest));
        }

        let used = self.placeholder.chars().map(char_width).sum::<usize>();
        if self.width > 0 && used <= self.width {
            let padding = self.width - used + 1;
            v.push_str(&self.placeholder_style.render(&" ".repeat(padding)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn render_text(&self, chars: &[char]) -> String {
        if chars.is_empty() {
            return String::new();
        }
        let s: String = chars.iter().collect();
        self.text_style.render(&s)
    }

    fn cursor_view(&self, c: char) -> String {
        if self.focus {
            self.cursor_style.render(&c.to_string())
        } else {
            self.text_style.render(&c.to_string())
        }
    }
}
