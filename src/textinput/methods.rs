//! Editing, focus and message handling for the textinput component.

use super::model::Model;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

pub(super) fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

impl Model {
    /// Replaces the value, truncating it to the character limit.
    pub fn set_value(&mut self, s: &str) {
        let mut runes: Vec<char> = s.chars().collect();
        if self.char_limit > 0 {
            runes.truncate(self.char_limit);
        }
        self.value = runes;

        if self.pos > self.value.len() || self.pos == 0 {
            self.pos = self.value.len();
        }
        self.handle_overflow();
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the field accepts key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field focus so it accepts key input.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus; key input is ignored until focused again.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Clears the value and moves the cursor home.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the placeholder shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width of the value area.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the character limit. Zero removes the limit.
    ///
    /// An existing value longer than the new limit is kept as is; the limit
    /// only applies to further input.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Applies a message. Only key messages are handled, and only while focused.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.handle_deletion_keys(key_msg) && !self.handle_movement_keys(key_msg) {
                self.handle_character_input(key_msg);
            }
            self.handle_overflow();
        }
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;

        if km.delete_word_backward.matches(key_msg) {
            self.delete_word_backward();
        } else if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.delete_after_cursor.matches(key_msg) {
            self.value.truncate(self.pos);
        } else if km.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
            self.offset = 0;
        } else {
            return false;
        }

        true
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;

        if km.character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.cursor_start();
        } else if km.line_end.matches(key_msg) {
            self.cursor_end();
        } else {
            return false;
        }

        true
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(&[ch]);
            }
        }
    }

    pub(super) fn insert_runes(&mut self, runes: &[char]) {
        let mut avail = if self.char_limit > 0 {
            match self.char_limit.checked_sub(self.value.len()) {
                Some(0) | None => return,
                Some(space) => space,
            }
        } else {
            usize::MAX
        };

        for &r in runes {
            if avail == 0 {
                break;
            }
            self.value.insert(self.pos, r);
            self.pos += 1;
            avail -= 1;
        }
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 || self.value.is_empty() {
            return;
        }

        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }

        self.value.drain(start..self.pos);
        self.pos = start;
    }

    /// Keeps `offset..offset_right` covering the cursor within `width` cells.
    pub(super) fn handle_overflow(&mut self) {
        let len = self.value.len();
        let total: usize = self.value.iter().map(|&c| char_width(c)).sum();

        if self.width == 0 || total <= self.width {
            self.offset = 0;
            self.offset_right = len;
            return;
        }

        self.offset_right = self.offset_right.min(len);
        self.offset = self.offset.min(self.offset_right);

        if self.pos < self.offset {
            self.offset = self.pos;

            let mut w = 0;
            let mut i = self.offset;
            while i < len {
                let cw = char_width(self.value[i]);
                if w + cw > self.width {
                    break;
                }
                w += cw;
                i += 1;
            }
            self.offset_right = i;
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;

            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 {
                let cw = char_width(self.value[i - 1]);
                if w + cw > self.width {
                    break;
                }
                w += cw;
                i -= 1;
            }
            self.offset = i;
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus();
        None
    }

    fn blur(&mut self) {
        self.blur();
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
