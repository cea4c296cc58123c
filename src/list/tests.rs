//! Tests for the list engine.

use super::*;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use pretty_assertions::assert_eq;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn compact_delegate() -> DefaultDelegate {
    let mut d = DefaultDelegate::new();
    d.show_description = false;
    d.set_spacing(0);
    d
}

fn numbered(n: usize) -> Vec<ListItem> {
    to_items((1..=n).map(|i| DefaultItem::new(&format!("item {i}"), "")).collect())
}

fn fruits() -> Vec<ListItem> {
    to_items(vec![
        DefaultItem::new("apple", ""),
        DefaultItem::new("banana", ""),
        DefaultItem::new("cherry", ""),
        DefaultItem::new("grape", ""),
    ])
}

fn selected_title(list: &Model) -> Option<String> {
    list.selected_item().map(|i| i.title())
}

#[test]
fn test_new_paginates_by_height() {
    let list = Model::new(numbered(10), compact_delegate(), 20, 4);

    assert_eq!(list.len(), 10);
    assert_eq!(list.per_page(), 4);
    assert_eq!(list.total_pages(), 3);
    assert_eq!(list.page(), 0);
    assert_eq!(list.index(), 0);
}

#[test]
fn test_default_delegate_takes_three_lines_per_item() {
    let list = Model::new(numbered(10), DefaultDelegate::new(), 20, 9);
    assert_eq!(list.per_page(), 3);
    assert_eq!(list.total_pages(), 4);
}

#[test]
fn test_set_delegate_recomputes_pagination() {
    let mut list = Model::new(numbered(10), DefaultDelegate::new(), 20, 4);
    assert_eq!(list.per_page(), 1);

    list.set_delegate(compact_delegate());
    assert_eq!(list.per_page(), 4);
    assert_eq!(list.total_pages(), 3);
}

#[test]
fn test_cursor_navigation() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);

    list.update(&key(KeyCode::Up));
    assert_eq!(list.index(), 0);

    for _ in 0..4 {
        list.update(&key(KeyCode::Down));
    }
    assert_eq!(list.index(), 4);
    assert_eq!(list.page(), 1);

    list.update(&key(KeyCode::Up));
    assert_eq!(list.index(), 3);
    assert_eq!(list.page(), 0);

    list.update(&key(KeyCode::End));
    assert_eq!(list.index(), 9);
    assert_eq!(list.page(), 2);

    list.update(&key(KeyCode::Down));
    assert_eq!(list.index(), 9);

    list.update(&key(KeyCode::Home));
    assert_eq!(list.index(), 0);
    assert_eq!(list.page(), 0);
}

#[test]
fn test_page_navigation() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);
    list.select(1);

    list.update(&key(KeyCode::PageDown));
    assert_eq!(list.index(), 5);
    assert_eq!(list.page(), 1);

    list.update(&key(KeyCode::PageDown));
    assert_eq!(list.index(), 9);
    assert_eq!(list.page(), 2);

    list.update(&key(KeyCode::PageDown));
    assert_eq!(list.index(), 9);

    list.update(&key(KeyCode::PageUp));
    assert_eq!(list.index(), 5);
    assert_eq!(list.page(), 1);

    list.update(&key(KeyCode::PageUp));
    list.update(&key(KeyCode::PageUp));
    assert_eq!(list.index(), 1);
    assert_eq!(list.page(), 0);
}

#[test]
fn test_page_down_onto_short_page_clamps() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);
    list.select(7);

    list.update(&key(KeyCode::PageDown));
    assert_eq!(list.index(), 9);
    assert_eq!(list.page(), 2);

    list.update(&key(KeyCode::PageUp));
    assert_eq!(list.index(), 5);
    assert_eq!(list.page(), 1);
}

#[test]
fn test_printable_keys_are_ignored() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);
    list.update(&key(KeyCode::Char('j')));
    list.update(&key(KeyCode::Char('G')));
    assert_eq!(list.index(), 0);
}

#[test]
fn test_non_key_messages_are_ignored() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);
    list.update(&(Box::new(42u32) as Msg));
    assert_eq!(list.index(), 0);
}

#[test]
fn test_select() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);

    list.select(6);
    assert_eq!(selected_title(&list), Some("item 7".to_string()));
    assert_eq!(list.page(), 1);

    list.select(10);
    assert_eq!(list.index(), 6);
}

#[test]
fn test_reset_selected() {
    let mut list = Model::new(numbered(10), compact_delegate(), 20, 4);
    list.select(9);
    list.reset_selected();

    assert_eq!(list.index(), 0);
    assert_eq!(list.page(), 0);
}

#[test]
fn test_choose_records_item() {
    let mut list = Model::new(fruits(), compact_delegate(), 20, 4);
    assert!(list.chosen().is_none());

    list.update(&key(KeyCode::Down));
    list.update(&key(KeyCode::Enter));
    assert_eq!(list.chosen().map(|i| i.title()), Some("banana".to_string()));
}

#[test]
fn test_filter_keeps_original_order() {
    let mut list = Model::new(fruits(), compact_delegate(), 20, 4);
    list.select(2);

    list.set_filter("a");
    let titles: Vec<String> = list.visible_items().iter().map(|i| i.title()).collect();
    assert_eq!(titles, vec!["apple", "banana", "grape"]);
    assert_eq!(list.index(), 0);
    assert_eq!(list.filter(), "a");
    assert_eq!(list.items().len(), 4);

    list.set_filter("rr");
    assert_eq!(selected_title(&list), Some("cherry".to_string()));
    assert_eq!(list.matches_for_index(0).len(), 2);
}

#[test]
fn test_same_filter_keeps_cursor() {
    let mut list = Model::new(fruits(), compact_delegate(), 20, 4);
    list.set_filter("a");
    list.select(2);
    list.set_filter("a");
    assert_eq!(list.index(), 2);
}

#[test]
fn test_filter_without_matches() {
    let mut list = Model::new(fruits(), compact_delegate(), 20, 4);
    list.set_filter("xyz");

    assert!(list.is_empty());
    assert!(list.selected_item().is_none());
    assert_eq!(list.total_pages(), 1);
}

#[test]
fn test_set_items_clears_filter() {
    let mut list = Model::new(fruits(), compact_delegate(), 20, 4);
    list.set_filter("ch");
    list.set_items(numbered(3));

    assert_eq!(list.filter(), "");
    assert_eq!(list.len(), 3);
    assert_eq!(list.index(), 0);
}

#[test]
fn test_view_renders_page() {
    let mut list = Model::new(fruits(), compact_delegate(), 20, 3);
    list.select(1);

    let view = lipgloss::strip_ansi(&list.view());
    assert_eq!(view, "  apple\n│ banana\n  cherry");

    list.update(&key(KeyCode::End));
    let view = lipgloss::strip_ansi(&list.view());
    assert_eq!(view, "│ grape\n\n");
}

#[test]
fn test_view_empty() {
    let list = Model::new(Vec::new(), compact_delegate(), 20, 2);
    let view = lipgloss::strip_ansi(&list.view());
    assert_eq!(view, "No items.\n");
}
