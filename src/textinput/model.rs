//! Core model for the textinput component.

use super::keymap::{default_key_map, KeyMap};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// A single-line text field.
///
/// The value is stored as characters so the cursor position is a character
/// index. When `width` is non-zero the field scrolls horizontally to keep the
/// cursor visible.
#[derive(Debug, Clone)]
pub struct Model {
    /// Prompt rendered before the value.
    pub prompt: String,
    /// Style applied to the prompt.
    pub prompt_style: Style,

    /// Style applied to the value.
    pub text_style: Style,

    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style applied to the placeholder.
    pub placeholder_style: Style,

    /// Style of the cell under the cursor while focused.
    pub cursor_style: Style,

    /// Visible width of the value area in cells. Zero disables scrolling.
    pub width: usize,

    /// Maximum number of characters. Zero means unlimited.
    pub char_limit: usize,

    /// Editing key bindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,

    // Visible window into `value`, in character indices.
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// Creates a blurred, empty text input with the `"> "` prompt.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        width: 0,
        char_limit: 0,
        key_map: default_key_map(),
        value: Vec::new(),
        focus: false,
        pos: 0,
        offset: 0,
        offset_right: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg);
        None
    }

    fn view(&self) -> String {
        self.view()
    }
}
