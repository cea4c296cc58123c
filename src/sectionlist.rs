//! Section list: values grouped under named sections.
//!
//! The selection is a section and a value inside it. Moving past the last
//! value of a section enters the next section at its first value, and moving
//! back from the first value enters the previous section at its last value.
//! The selection never wraps around the ends of the whole list.
//!
//! ```rust
//! use teaset::sectionlist::{self, Section};
//!
//! let mut s = sectionlist::new();
//! s.sections = vec![
//!     Section::new("fruit", &["apple", "pear"]),
//!     Section::new("veg", &["leek"]),
//! ];
//! s.next();
//! s.next();
//! assert_eq!(s.section(), "veg");
//! assert_eq!(s.value(), "leek");
//! ```

use crate::key::{self, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

/// Mark left of an unselected section.
pub const SECTION_EMPTY: &str = " ";
/// Mark left of the selected section.
pub const SECTION_SELECTED: &str = "❯";
/// Prompt of values below the selected one and of other sections.
pub const VALUE_EMPTY: &str = "  ";
/// Prompt of values above the selected one.
pub const VALUE_JOINER: &str = "│ ";
/// Prompt of the selected value.
pub const VALUE_SELECTED: &str = "└▸";

const VALUE_INDENT: &str = "  ";

/// A named group of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Section name.
    pub name: String,
    /// Values of the section.
    pub values: Vec<String>,
}

impl Section {
    /// Creates a section from borrowed strings.
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Styles of the section list.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header while focused.
    pub heading_active: Style,
    /// Header while blurred.
    pub heading_inactive: Style,
    /// Mark of unselected sections.
    pub section_empty: Style,
    /// Mark of the selected section.
    pub section_selected: Style,
    /// Blank value prompt.
    pub value_empty: Style,
    /// Prompt of the selected value.
    pub value_selected: Style,
    /// Prompt of values above the selected one.
    pub value_joiner: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            heading_active: Style::new().bold(true),
            heading_inactive: Style::new(),
            section_empty: Style::new(),
            section_selected: Style::new(),
            value_empty: Style::new(),
            value_selected: Style::new(),
            value_joiner: Style::new(),
        }
    }
}

/// Key bindings of the section list.
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

/// The section list.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Line printed above the sections. Not rendered when empty.
    pub header: String,
    /// Sections in display order.
    pub sections: Vec<Section>,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,

    focus: bool,
    section_index: usize,
    value_index: usize,
}

/// Creates an empty, blurred section list with default styles.
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

    /// Renders each section with its values, sections separated by a blank line.
    pub fn view(&self) -> String {
        let mut blocks = Vec::with_capacity(self.sections.len() + 1);

        if !self.header.is_empty() {
            let style = if self.focus {
                &self.styles.heading_active
            } else {
                &self.styles.heading_inactive
            };
            blocks.push(style.render(&self.header));
        }

        for (idx, section) in self.sections.iter().enumerate() {
            let current = idx == self.section_index;
            let mut lines = vec![self.render_section(section, current)];
            lines.extend(
                section
                    .values
                    .iter()
                    .enumerate()
                    .map(|(vi, v)| self.render_value(v, current, vi)),
            );
            blocks.push(lines.join("\n"));
        }

        blocks.join("\n\n")
    }

    fn render_section(&self, section: &Section, current: bool) -> String {
        let mark = if current {
            self.styles.section_selected.render(SECTION_SELECTED)
        } else {
            self.styles.section_empty.render(SECTION_EMPTY)
        };
        format!("{} {}", mark, section.name)
    }

    fn render_value(&self, value: &str, current: bool, idx: usize) -> String {
        let prompt = if !current || idx > self.value_index {
            self.styles.value_empty.render(VALUE_EMPTY)
        } else if idx == self.value_index {
            self.styles.value_selected.render(VALUE_SELECTED)
        } else {
            self.styles.value_joiner.render(VALUE_JOINER)
        };
        format!("{}{}{}", VALUE_INDENT, prompt, value)
    }

    /// Name of the selected section, empty when there are no sections.
    pub fn section(&self) -> &str {
        self.sections
            .get(self.section_index)
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }

    /// The selected value, empty when the section has no values.
    pub fn value(&self) -> &str {
        self.sections
            .get(self.section_index)
            .and_then(|s| s.values.get(self.value_index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Selects section `n`. Out-of-range sections are ignored.
    ///
    /// The value index is kept when the new section is long enough, otherwise
    /// it restarts at the first value.
    pub fn section_index(&mut self, n: usize) {
        let Some(section) = self.sections.get(n) else {
            return;
        };
        if self.value_index >= section.values.len() {
            self.value_index = 0;
        }
        self.section_index = n;
    }

    /// Selects value `n` of the current section. Out-of-range values are ignored.
    pub fn value_index(&mut self, n: usize) {
        if n < self.current_len() {
            self.value_index = n;
        }
    }

    /// Index of the selected section.
    pub fn selected_section_index(&self) -> usize {
        self.section_index
    }

    /// Index of the selected value inside its section.
    pub fn selected_value_index(&self) -> usize {
        self.value_index
    }

    /// Selects the next value, entering the next section after the last one.
    pub fn next(&mut self) {
        let last_section = self.sections.len().saturating_sub(1);
        let last_value = self.current_len().saturating_sub(1);

        if self.value_index < last_value {
            self.value_index += 1;
        } else if self.section_index < last_section {
            self.section_index += 1;
            self.value_index = 0;
        }
    }

    /// Selects the previous value, entering the previous section at its last value.
    pub fn previous(&mut self) {
        if self.value_index > 0 {
            self.value_index -= 1;
        } else if self.section_index > 0 {
            self.section_index -= 1;
            self.value_index = self.current_len().saturating_sub(1);
        }
    }

    fn current_len(&self) -> usize {
        self.sections
            .get(self.section_index)
            .map(|s| s.values.len())
            .unwrap_or(0)
    }

    /// Whether the list receives input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the list focus.
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

    const DIGITS: [&str; 5] = ["1", "2", "3", "4", "5"];
    const WORDS: [&str; 5] = ["one", "two", "three", "four", "five"];

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn with(sections: Vec<Section>) -> Model {
        let mut m = new();
        m.sections = sections;
        m
    }

    fn two_sections() -> Model {
        with(vec![
            Section::new("test1", &DIGITS),
            Section::new("test2", &WORDS),
        ])
    }

    fn selection(m: &Model) -> (&str, &str) {
        (m.section(), m.value())
    }

    #[test]
    fn test_empty() {
        let mut m = new();
        m.next();
        m.previous();
        m.section_index(0);
        m.value_index(0);
        assert_eq!(selection(&m), ("", ""));
        assert_eq!(m.view(), "");
    }

    #[test]
    fn test_initial_selection() {
        let m = with(vec![Section::new("test", &DIGITS)]);
        assert_eq!(selection(&m), ("test", "1"));
    }

    #[test]
    fn test_next_inside_section() {
        let mut m = with(vec![Section::new("test", &DIGITS)]);
        m.next();
        assert_eq!(selection(&m), ("test", "2"));
    }

    #[test]
    fn test_next_at_global_end_is_noop() {
        let mut m = with(vec![Section::new("test", &DIGITS)]);
        m.value_index(4);
        m.next();
        assert_eq!(selection(&m), ("test", "5"));

        let mut m = two_sections();
        m.section_index(1);
        m.value_index(4);
        m.next();
        assert_eq!(selection(&m), ("test2", "five"));
    }

    #[test]
    fn test_next_enters_next_section() {
        let mut m = two_sections();
        m.value_index(4);
        m.next();
        assert_eq!(selection(&m), ("test2", "one"));
    }

    #[test]
    fn test_previous_inside_section() {
        let mut m = with(vec![Section::new("test", &DIGITS)]);
        m.value_index(1);
        m.previous();
        assert_eq!(selection(&m), ("test", "1"));
    }

    #[test]
    fn test_previous_enters_previous_section_at_its_end() {
        let mut m = two_sections();
        m.section_index(1);
        m.previous();
        assert_eq!(selection(&m), ("test1", "5"));

        let mut m = with(vec![
            Section::new("long", &DIGITS),
            Section::new("short", &["a"]),
        ]);
        m.section_index(1);
        m.previous();
        assert_eq!(selection(&m), ("long", "5"));
    }

    #[test]
    fn test_previous_at_global_start_is_noop() {
        let mut m = two_sections();
        m.previous();
        assert_eq!(selection(&m), ("test1", "1"));
    }

    #[test]
    fn test_section_without_values() {
        let m = with(vec![Section::new("test", &[])]);
        assert_eq!(selection(&m), ("test", ""));
    }

    #[test]
    fn test_empty_section_is_a_single_stop() {
        let mut m = with(vec![
            Section::new("test1", &DIGITS),
            Section::new("test2", &[]),
            Section::new("test3", &WORDS),
        ]);
        m.section_index(1);
        assert_eq!(selection(&m), ("test2", ""));

        m.next();
        assert_eq!(selection(&m), ("test3", "one"));

        m.previous();
        assert_eq!(selection(&m), ("test2", ""));

        m.previous();
        assert_eq!(selection(&m), ("test1", "5"));
    }

    #[test]
    fn test_invalid_indices_are_ignored() {
        let mut m = with(vec![Section::new("test", &DIGITS)]);
        m.value_index(5);
        m.section_index(1);
        assert_eq!(selection(&m), ("test", "1"));
    }

    #[test]
    fn test_section_index_resets_short_value_index() {
        let mut m = with(vec![
            Section::new("long", &DIGITS),
            Section::new("short", &["a", "b"]),
        ]);
        m.value_index(3);
        m.section_index(1);
        assert_eq!(selection(&m), ("short", "a"));

        m.value_index(1);
        m.section_index(0);
        assert_eq!(selection(&m), ("long", "2"));
        assert_eq!(m.selected_section_index(), 0);
        assert_eq!(m.selected_value_index(), 1);
    }

    #[test]
    fn test_keys_while_focused() {
        let mut m = with(vec![Section::new("test", &DIGITS)]);
        m.focus();
        m.update(&key(KeyCode::Down));
        m.update(&key(KeyCode::Down));
        assert_eq!(selection(&m), ("test", "3"));

        m.update(&key(KeyCode::Up));
        assert_eq!(selection(&m), ("test", "2"));
    }

    #[test]
    fn test_blurred_ignores_keys() {
        let mut m = with(vec![Section::new("test", &DIGITS)]);
        m.update(&key(KeyCode::Down));
        assert_eq!(selection(&m), ("test", "1"));
    }

    #[test]
    fn test_view() {
        let mut m = with(vec![
            Section::new("fruit", &["apple", "pear", "plum"]),
            Section::new("veg", &["leek"]),
        ]);
        m.value_index(1);

        let view = lipgloss::strip_ansi(&m.view());
        let want = [
            "❯ fruit",
            "  │ apple",
            "  └▸pear",
            "    plum",
            "",
            "  veg",
            "    leek",
        ]
        .join("\n");
        assert_eq!(view, want);
    }

    #[test]
    fn test_view_with_header_and_empty_section() {
        let mut m = with(vec![Section::new("none", &[]), Section::new("veg", &["leek"])]);
        m.header = "Pick".into();
        m.next();

        let view = lipgloss::strip_ansi(&m.view());
        assert_eq!(view, "Pick\n\n  none\n\n❯ veg\n  └▸leek");
    }
}
