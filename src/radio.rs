//! Radio selector: one value out of a list, moved with the arrow keys.
//!
//! ```rust
//! use teaset::radio;
//!
//! let mut r = radio::new();
//! r.values = vec!["small".into(), "medium".into(), "large".into()];
//! r.next();
//! assert_eq!(r.value(), "medium");
//!
//! r.select("large");
//! assert_eq!(r.index(), 2);
//! ```
//!
//! With `looping` set, moving past either end wraps around; otherwise the
//! selection stops at the ends.

use crate::key::{self, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

/// Mark of an unselected value.
pub const INACTIVE: &str = "○";

/// Mark of the selected value.
pub const ACTIVE: &str = "●";

/// Styles of the radio selector.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading while focused.
    pub heading_active: Style,
    /// Heading while blurred.
    pub heading_inactive: Style,
    /// Value text.
    pub values: Style,
    /// Mark of the selected value.
    pub active: Style,
    /// Mark of the other values.
    pub inactive: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            heading_active: Style::new().bold(true),
            heading_inactive: Style::new(),
            values: Style::new(),
            active: Style::new(),
            inactive: Style::new(),
        }
    }
}

/// Key bindings of the radio selector.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Select the next value.
    pub next: Binding,
    /// Select the previous value.
    pub previous: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next: Binding::new(vec![KeyCode::Down]).with_help("↓", "next"),
            previous: Binding::new(vec![KeyCode::Up]).with_help("↑", "previous"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.previous]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.next, &self.previous]]
    }
}

/// The radio selector.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Line printed above the values. Not rendered when empty.
    pub heading: String,
    /// Selectable values.
    pub values: Vec<String>,
    /// Wrap around at either end.
    pub looping: bool,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,

    index: usize,
    focus: bool,
}

/// Creates an empty, blurred radio selector with default styles.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// Handles the next and previous keys while focused.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.next.matches(key_msg) {
                self.next();
            } else if self.key_map.previous.matches(key_msg) {
                self.previous();
            }
        }
    }

    /// Renders the heading and one marked line per value.
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(self.values.len() + 1);

        if !self.heading.is_empty() {
            let style = if self.focus {
                &self.styles.heading_active
            } else {
                &self.styles.heading_inactive
            };
            lines.push(style.render(&self.heading));
        }

        for (idx, value) in self.values.iter().enumerate() {
            let mark = if idx == self.index {
                self.styles.active.render(ACTIVE)
            } else {
                self.styles.inactive.render(INACTIVE)
            };
            lines.push(format!("{} {}", mark, self.styles.values.render(value)));
        }

        lines.join("\n")
    }

    /// The selected value, empty when there are no values.
    pub fn value(&self) -> &str {
        self.values
            .get(self.index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Index of the selected value.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Selects the next value.
    pub fn next(&mut self) {
        let Some(last) = self.values.len().checked_sub(1) else {
            return;
        };
        if self.index < last {
            self.index += 1;
        } else if self.looping {
            self.index = 0;
        }
    }

    /// Selects the previous value.
    pub fn previous(&mut self) {
        let Some(last) = self.values.len().checked_sub(1) else {
            return;
        };
        if self.index > 0 {
            self.index -= 1;
        } else if self.looping {
            self.index = last;
        }
    }

    /// Selects the first value equal to `value`. Unknown values are ignored.
    pub fn select(&mut self, value: &str) {
        if let Some(idx) = self.values.iter().position(|v| v == value) {
            self.index = idx;
        }
    }

    /// Whether the selector receives input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the selector focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
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
        Model::update(self, &msg);
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use lipgloss_extras::lipgloss;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn sizes() -> Model {
        let mut m = new();
        m.values = vec!["small".into(), "medium".into(), "large".into()];
        m
    }

    #[test]
    fn test_empty() {
        let mut m = new();
        m.next();
        m.previous();
        assert_eq!(m.value(), "");
        assert_eq!(m.index(), 0);
        assert_eq!(m.view(), "");
    }

    #[test]
    fn test_next_clamps_at_end() {
        let mut m = sizes();
        m.next();
        m.next();
        m.next();
        assert_eq!(m.value(), "large");
        assert_eq!(m.index(), 2);
    }

    #[test]
    fn test_previous_clamps_at_start() {
        let mut m = sizes();
        m.previous();
        assert_eq!(m.value(), "small");
    }

    #[test]
    fn test_looping_wraps() {
        let mut m = sizes();
        m.looping = true;

        m.previous();
        assert_eq!(m.value(), "large");

        m.next();
        assert_eq!(m.value(), "small");
    }

    #[test]
    fn test_select() {
        let mut m = sizes();
        m.select("medium");
        assert_eq!(m.index(), 1);

        m.select("huge");
        assert_eq!(m.index(), 1);
    }

    #[test]
    fn test_keys_while_focused() {
        let mut m = sizes();
        m.focus();
        m.update(&key(KeyCode::Down));
        m.update(&key(KeyCode::Down));
        assert_eq!(m.value(), "large");

        m.update(&key(KeyCode::Up));
        assert_eq!(m.value(), "medium");
    }

    #[test]
    fn test_blurred_ignores_keys() {
        let mut m = sizes();
        m.update(&key(KeyCode::Down));
        m.update(&key(KeyCode::Down));
        assert_eq!(m.value(), "small");
        assert!(!m.focused());
    }

    #[test]
    fn test_focus_and_blur() {
        let mut m = sizes();
        assert!(Component::focus(&mut m).is_none());
        assert!(m.focused());
        m.blur();
        assert!(!m.focused());
    }

    #[test]
    fn test_view() {
        let mut m = sizes();
        m.heading = "Size".into();
        m.next();

        let view = lipgloss::strip_ansi(&m.view());
        assert_eq!(view, "Size\n○ small\n● medium\n○ large");
    }

    #[test]
    fn test_view_without_heading() {
        let m = sizes();
        let view = lipgloss::strip_ansi(&m.view());
        assert_eq!(view, "● small\n○ medium\n○ large");
    }
}
