//! Tests for the textinput component.

use super::*;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn type_str(input: &mut Model, s: &str) {
    for c in s.chars() {
        input.update(&key(KeyCode::Char(c)));
    }
}

#[test]
fn test_new_default_values() {
    let input = new();

    assert_eq!(input.prompt, "> ");
    assert_eq!(input.placeholder, "");
    assert_eq!(input.char_limit, 0);
    assert_eq!(input.width, 0);
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert!(!input.focused());
}

#[test]
fn test_set_value_with_char_limit() {
    let mut input = new();
    input.set_char_limit(5);
    input.set_value("hello world");

    assert_eq!(input.value(), "hello");
    assert_eq!(input.position(), 5);
}

#[test]
fn test_blurred_input_ignores_keys() {
    let mut input = new();
    type_str(&mut input, "abc");
    assert_eq!(input.value(), "");
}

#[test]
fn test_typing_inserts_at_cursor() {
    let mut input = new();
    input.focus();
    type_str(&mut input, "hllo");
    input.update(&key(KeyCode::Home));
    input.update(&key(KeyCode::Right));
    type_str(&mut input, "e");

    assert_eq!(input.value(), "hello");
    assert_eq!(input.position(), 2);
}

#[test]
fn test_char_limit_drops_extra_input() {
    let mut input = new();
    input.set_char_limit(3);
    input.focus();
    type_str(&mut input, "abcdef");

    assert_eq!(input.value(), "abc");
}

#[test]
fn test_deletion_keys() {
    let mut input = new();
    input.focus();
    type_str(&mut input, "one two three");

    input.update(&ctrl('w'));
    assert_eq!(input.value(), "one two ");

    input.update(&key(KeyCode::Backspace));
    assert_eq!(input.value(), "one two");

    input.update(&key(KeyCode::Home));
    input.update(&key(KeyCode::Delete));
    assert_eq!(input.value(), "ne two");

    input.update(&key(KeyCode::End));
    input.update(&key(KeyCode::Left));
    input.update(&ctrl('k'));
    assert_eq!(input.value(), "ne tw");

    input.update(&ctrl('u'));
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
}

#[test]
fn test_control_chars_are_not_inserted() {
    let mut input = new();
    input.focus();
    input.update(&ctrl('z'));
    assert_eq!(input.value(), "");
}

#[test]
fn test_reset() {
    let mut input = new();
    input.focus();
    type_str(&mut input, "test");
    input.reset();

    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
}

#[test]
fn test_view_pads_to_width() {
    let mut input = new();
    input.set_width(6);
    input.set_value("abc");

    let view = lipgloss::strip_ansi(&input.view());
    assert_eq!(view, "> abc    ");
}

#[test]
fn test_view_placeholder() {
    let mut input = new();
    input.set_placeholder("Search");

    let view = lipgloss::strip_ansi(&input.view());
    assert_eq!(view, "> Search");
}

#[test]
fn test_view_scrolls_to_cursor() {
    let mut input = new();
    input.set_width(4);
    input.focus();
    type_str(&mut input, "abcdefgh");

    let view = lipgloss::strip_ansi(&input.view());
    assert_eq!(view, "> efgh ");

    input.update(&key(KeyCode::Home));
    let view = lipgloss::strip_ansi(&input.view());
    assert_eq!(view, "> abcd ");
}
