//! Filter field configuration.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Default leading mark of the prompt.
pub const DEFAULT_PROMPT_MARK: &str = "?";

/// Default prompt text.
pub const DEFAULT_PROMPT_TEXT: &str = "Filter:";

/// Declared configuration of the filter field.
///
/// `width` is derived from the widget width on every update; writes to it are
/// overwritten.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Width of the editable area, excluding the prompt.
    pub width: usize,
    /// Leading character of the prompt.
    pub prompt_mark: String,
    /// Text shown before the user's input.
    pub prompt_text: String,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Maximum number of characters, `0` for no limit.
    pub char_limit: usize,
    /// Style overrides.
    pub styles: TextInputStyles,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            width: 0,
            prompt_mark: DEFAULT_PROMPT_MARK.to_string(),
            prompt_text: DEFAULT_PROMPT_TEXT.to_string(),
            placeholder: String::new(),
            char_limit: 0,
            styles: TextInputStyles::default(),
        }
    }
}

/// Styles of the filter field.
#[derive(Debug, Clone)]
pub struct TextInputStyles {
    /// Prompt mark style.
    pub prompt_mark: Style,
    /// Prompt text style.
    pub prompt_text: Style,
    /// Style of the entered text.
    pub text: Style,
    /// Placeholder style.
    pub placeholder: Style,
    /// Cursor style.
    pub cursor: Style,
}

impl Default for TextInputStyles {
    fn default() -> Self {
        Self {
            prompt_mark: Style::new(),
            prompt_text: Style::new(),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
            cursor: Style::new().reverse(true),
        }
    }
}

/// Applies the fixed prompt spacing on top of `styles`.
pub fn merge_text_input_styles(mut styles: TextInputStyles) -> TextInputStyles {
    styles.prompt_mark = styles.prompt_mark.margin_right(1);
    styles.prompt_text = styles.prompt_text.margin_right(1);
    styles
}

/// Renders the prompt mark and prompt text side by side.
pub fn text_input_prompt(config: &TextInput, styles: &TextInputStyles) -> String {
    let mark = styles.prompt_mark.render(&config.prompt_mark);
    let text = styles.prompt_text.render(&config.prompt_text);
    lipgloss::join_horizontal(lipgloss::TOP, &[mark.as_str(), text.as_str()])
}
