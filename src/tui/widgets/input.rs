//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so Devanagari input edits cleanly.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Which characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    #[default]
    Any,
    /// ASCII digits only
    Digits,
}

impl InputFilter {
    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Any => !c.is_control(),
            Self::Digits => c.is_ascii_digit(),
        }
    }
}

/// A simple text input field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    filter: InputFilter,
    max_chars: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept ASCII digits
    pub fn digits(mut self) -> Self {
        self.filter = InputFilter::Digits;
        self
    }

    /// Cap the content length
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor; returns whether it was accepted
    pub fn insert(&mut self, c: char) -> bool {
        if !self.filter.accepts(c) {
            return false;
        }
        if self.max_chars.is_some_and(|max| self.len() >= max) {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Apply an editing key; returns whether the key was used
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        use crossterm::event::{KeyCode, KeyModifiers};

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_start();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }

    /// Render as a line, with a block cursor when focused
    pub fn line(&self, prefix: &str, placeholder: &str, focused: bool) -> Line<'static> {
        let mut spans = vec![];

        if !prefix.is_empty() {
            spans.push(Span::raw(prefix.to_string()));
        }

        if self.content.is_empty() && !focused {
            spans.push(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            return Line::from(spans);
        }

        if focused {
            let before: String = self.content.chars().take(self.cursor).collect();
            let mut after = self.content.chars().skip(self.cursor);
            let cursor_char = after.next().unwrap_or(' ');
            let rest: String = after.collect();

            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            if !rest.is_empty() {
                spans.push(Span::styled(rest, Style::default().fg(Color::White)));
            }
        } else {
            spans.push(Span::styled(
                self.content.clone(),
                Style::default().fg(Color::White),
            ));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "200".chars() {
            input.insert(c);
        }
        input.backspace();
        assert_eq!(input.value(), "20");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.set("सब्जी");
        input.move_left();
        input.backspace();
        input.insert('x');
        assert_eq!(input.value().chars().count(), 5);
        input.move_start();
        input.delete();
        assert!(!input.value().starts_with('स'));
    }

    #[test]
    fn test_digit_filter_and_limit() {
        let mut input = TextInput::new().digits().max_chars(6);
        for c in "12a3456789".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "123456");
    }
}
