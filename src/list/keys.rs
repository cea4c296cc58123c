//! Key bindings for list navigation.
//!
//! Only non-printable keys are bound so that a text field sharing the same key
//! stream keeps every character for itself.
//!
//! - **Cursor**: `↑` / `↓`
//! - **Pages**: `pgup` / `pgdown`
//! - **Jumps**: `home` / `end`
//! - **Choose**: `enter`

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Navigation bindings of the list.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the cursor up one item.
    pub cursor_up: Binding,
    /// Move the cursor down one item.
    pub cursor_down: Binding,
    /// Move forward one page.
    pub next_page: Binding,
    /// Move back one page.
    pub prev_page: Binding,
    /// Jump to the first item.
    pub go_to_start: Binding,
    /// Jump to the last item.
    pub go_to_end: Binding,
    /// Mark the item under the cursor as chosen.
    pub choose: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            next_page: Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "next page"),
            prev_page: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            go_to_start: Binding::new(vec![KeyCode::Home]).with_help("home", "go to start"),
            go_to_end: Binding::new(vec![KeyCode::End]).with_help("end", "go to end"),
            choose: Binding::new(vec![KeyCode::Enter]).with_help("enter", "choose"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.choose]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down],
            vec![
                &self.next_page,
                &self.prev_page,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.choose],
        ]
    }
}
