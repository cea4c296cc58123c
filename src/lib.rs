#![warn(missing_docs)]

//! # teaset
//!
//! Focus-aware selection widgets for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Each widget follows the Elm Architecture: it owns its state, consumes
//! messages in `update()` and renders a string in `view()`. Widgets only react
//! to keys while focused.
//!
//! ## Components
//!
//! - **Filter list** (`filterlist`): a filter field, a paginated list and a
//!   page-dot column sharing one focus and one size
//! - **Radio** (`radio`): one value out of a list
//! - **Section list** (`sectionlist`): values grouped under named sections
//! - **Toggle** (`toggle`): an on/off switch
//!
//! The filter list is built from the `textinput`, `list` and `paginator`
//! engines, which can also be used on their own.
//!
//! ## Focus Management
//!
//! All widgets implement the `Component` trait:
//!
//! ```rust
//! use teaset::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut toggle = toggle_new();
//! handle_focus(&mut toggle);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use teaset::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     picker: FilterList,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut picker = filterlist_new();
//!         picker.set_items(to_items(vec![
//!             ListDefaultItem::new("alpha", ""),
//!             ListDefaultItem::new("beta", ""),
//!         ]));
//!         picker.focus();
//!         (Self { picker }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.picker.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.picker.view()
//!     }
//! }
//! ```

pub mod filterlist;
pub mod key;
pub mod list;
pub mod paginator;
pub mod radio;
pub mod sectionlist;
pub mod textinput;
pub mod toggle;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input
/// - **Blurred**: the component ignores keyboard input
///
/// `focus()` may return a command for the runtime; none of the widgets in this
/// crate need one.
///
/// ```rust
/// use teaset::prelude::*;
///
/// let mut radio = radio_new();
/// assert!(!radio.focused());
///
/// radio.focus();
/// assert!(radio.focused());
///
/// radio.blur();
/// assert!(!radio.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use filterlist::{new as filterlist_new, Model as FilterList, SyncMsg};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use list::Model as List;
pub use list::{
    to_items, DefaultDelegate as ListDefaultDelegate, DefaultItem as ListDefaultItem, Item,
    ItemDelegate, ListItem, ListKeyMap,
};
pub use paginator::Model as Paginator;
pub use radio::Model as Radio;
pub use sectionlist::{Model as SectionList, Section};
pub use textinput::{new as textinput_new, Model as TextInput};
pub use toggle::Model as Toggle;

/// Prelude module for convenient imports.
///
/// ```rust
/// use teaset::prelude::*;
///
/// let mut toggle = toggle_new();
/// toggle.toggle();
/// assert!(toggle.state);
/// ```
pub mod prelude {
    pub use crate::filterlist::{new as filterlist_new, Model as FilterList, SyncMsg};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::list::Model as List;
    pub use crate::list::{
        to_items, DefaultDelegate as ListDefaultDelegate, DefaultItem as ListDefaultItem, Item,
        ItemDelegate, ListItem, ListKeyMap,
    };
    pub use crate::paginator::Model as Paginator;
    pub use crate::radio::{new as radio_new, Model as Radio};
    pub use crate::sectionlist::{new as sectionlist_new, Model as SectionList, Section};
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::toggle::{new as toggle_new, Model as Toggle};
    pub use crate::Component;
}
