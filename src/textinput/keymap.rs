//! Key bindings for the textinput component.

use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap as KeyMapTrait};

/// Editing and cursor movement bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
    /// Delete everything after the cursor.
    pub delete_after_cursor: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Jump to the start of the line.
    pub line_start: Binding,
    /// Jump to the end of the line.
    pub line_end: Binding,
}

/// The default emacs-flavoured bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_word_backward: new_binding(vec![
            with_keys_str(&["alt+backspace", "ctrl+w"]),
            with_help("ctrl+w", "delete word"),
        ]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![
            with_keys_str(&["ctrl+u"]),
            with_help("ctrl+u", "clear"),
        ]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.delete_word_backward, &self.delete_before_cursor]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.character_forward,
                &self.character_backward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_word_backward,
                &self.delete_after_cursor,
                &self.delete_before_cursor,
            ],
        ]
    }
}
