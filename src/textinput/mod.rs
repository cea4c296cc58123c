//! Single-line text input.
//!
//! The filter list embeds one of these as its filter field, but it works on its
//! own as well:
//!
//! ```rust
//! use teaset::textinput;
//!
//! let mut input = textinput::new();
//! input.set_placeholder("Search...");
//! input.set_width(20);
//! input.focus();
//! input.set_value("hello");
//! assert_eq!(input.value(), "hello");
//! ```
//!
//! Editing keys follow readline conventions: `ctrl+a`/`ctrl+e` jump to the line
//! ends, `ctrl+w` deletes a word, `ctrl+u`/`ctrl+k` delete before/after the
//! cursor. The cursor is drawn statically with `cursor_style`.

pub mod keymap;
pub mod methods;
pub mod model;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
