//! Text input widget
//!
//! A single-line text field with a cursor. The cursor is a character index,
//! so multi-byte input edits cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    /// Replace the content, placing the cursor at the end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Build a renderable view of this input
    pub fn view<'a>(&'a self, theme: &Theme, focused: bool) -> TextInputView<'a> {
        TextInputView {
            input: self,
            theme: *theme,
            focused,
        }
    }
}

/// Borrowed, themed rendering of a [`TextInput`]
pub struct TextInputView<'a> {
    input: &'a TextInput,
    theme: Theme,
    focused: bool,
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let theme = self.theme;

        let label_style = if self.focused {
            theme.title()
        } else {
            Style::default().fg(theme.warning)
        };

        let mut spans = vec![Span::styled(format!("{}: ", input.label), label_style)];
        let value_style = Style::default().fg(theme.foreground);

        if input.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                input.placeholder.clone(),
                Style::default().fg(theme.muted),
            ));
        } else if self.focused {
            let chars: Vec<char> = input.content.chars().collect();
            let cursor = input.cursor.min(chars.len());
            let before: String = chars[..cursor].iter().collect();
            let at = chars.get(cursor).copied().unwrap_or(' ');
            let after: String = chars.iter().skip(cursor + 1).collect();

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                at.to_string(),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(after, value_style));
        } else {
            spans.push(Span::styled(input.content.clone(), value_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
