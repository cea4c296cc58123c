//! Paginated list with fuzzy filtering and pluggable item rendering.
//!
//! The list holds type-erased [`Item`]s and renders the page holding the
//! cursor through an [`ItemDelegate`]. Filtering is driven from outside with
//! [`Model::set_filter`]; the list binds only non-printable navigation keys, so
//! it can share a key stream with a text field.
//!
//! ```
//! use teaset::list::{to_items, DefaultDelegate, DefaultItem, Model};
//!
//! let items = to_items(vec![
//!     DefaultItem::new("Apple", "Red fruit"),
//!     DefaultItem::new("Banana", "Yellow fruit"),
//! ]);
//! let mut list = Model::new(items, DefaultDelegate::new(), 80, 24);
//!
//! list.select(1);
//! assert_eq!(list.selected_item().map(|i| i.title()), Some("Banana".to_string()));
//! ```

/// Default item implementation and delegate.
pub mod defaultitem;

/// Navigation key bindings.
pub mod keys;

mod filtering;
mod model;
mod rendering;
mod types;

#[cfg(test)]
mod tests;

pub use defaultitem::{DefaultDelegate, DefaultItem, DefaultItemStyles, DEFAULT_INDICATOR};
pub use keys::ListKeyMap;
pub use model::{Model, NO_ITEMS};
pub use types::{to_items, Item, ItemDelegate, ListItem};
