//! On/off switch flipped with the space key.

use crate::key::{self, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

/// Box shown while off.
pub const INACTIVE: &str = "▢";
/// Box shown while on.
pub const ACTIVE: &str = "▣";
/// Label used when `text` is empty.
pub const DEFAULT_TEXT: &str = "Enable";

/// Styles of the toggle.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading while focused.
    pub heading_active: Style,
    /// Heading while blurred.
    pub heading_inactive: Style,
    /// Label text.
    pub text: Style,
    /// Box while on.
    pub active: Style,
    /// Box while off.
    pub inactive: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            heading_active: Style::new().bold(true),
            heading_inactive: Style::new(),
            text: Style::new(),
            active: Style::new(),
            inactive: Style::new(),
        }
    }
}

/// Key bindings of the toggle.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Flip the state.
    pub toggle: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "toggle"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.toggle]]
    }
}

/// The toggle.
#[derive(Debug, Clone)]
pub struct Model {
    /// Line printed above the switch. Not rendered when empty.
    pub heading: String,
    /// Whether the switch is on.
    pub state: bool,
    /// Label right of the box.
    pub text: String,
    /// Styles.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,

    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            heading: String::new(),
            state: false,
            text: DEFAULT_TEXT.to_string(),
            styles: Styles::default(),
            key_map: KeyMap::default(),
            focus: false,
        }
    }
}

/// Creates a blurred toggle in the off state.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// Flips the state on the toggle key while focused.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.toggle.matches(key_msg) {
                self.toggle();
            }
        }
    }

    /// Renders the heading and the labelled box.
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(2);

        if !self.heading.is_empty() {
            let style = if self.focus {
                &self.styles.heading_active
            } else {
                &self.styles.heading_inactive
            };
            lines.push(style.render(&self.heading));
        }

        let mark = if self.state {
            self.styles.active.render(ACTIVE)
        } else {
            self.styles.inactive.render(INACTIVE)
        };
        let text = if self.text.is_empty() {
            DEFAULT_TEXT
        } else {
            self.text.as_str()
        };
        lines.push(format!("{} {}", mark, self.styles.text.render(text)));

        lines.join("\n")
    }

    /// Flips the state.
    pub fn toggle(&mut self) {
        self.state = !self.state;
    }

    /// Whether the toggle receives input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the toggle focus.
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

    fn space() -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut m = new();
        m.toggle();
        assert!(m.state);
        m.toggle();
        assert!(!m.state);
    }

    #[test]
    fn test_space_while_focused() {
        let mut m = new();
        m.focus();
        m.update(&space());
        assert!(m.state);
    }

    #[test]
    fn test_blurred_ignores_space() {
        let mut m = new();
        m.update(&space());
        assert!(!m.state);
    }

    #[test]
    fn test_view() {
        let mut m = new();
        assert_eq!(lipgloss::strip_ansi(&m.view()), "▢ Enable");

        m.heading = "Notifications".into();
        m.text = "Email".into();
        m.state = true;
        assert_eq!(lipgloss::strip_ansi(&m.view()), "Notifications\n▣ Email");

        m.text.clear();
        assert_eq!(lipgloss::strip_ansi(&m.view()), "Notifications\n▣ Enable");
    }
}
