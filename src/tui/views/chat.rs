//! Assistant chat screen
//!
//! Quick-pick questions, the message history and an input line. Replies
//! appear after the conversation's typing delay; any bot message can be
//! read aloud.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::locale::ChatContent;
use crate::services::{ChatBot, Conversation};
use crate::tui::app::{App, Screen};
use crate::tui::widgets::TextInput;

/// Which part of the chat screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatFocus {
    #[default]
    Input,
    Questions,
    Messages,
}

impl ChatFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Questions,
            Self::Questions => Self::Messages,
            Self::Messages => Self::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Input => Self::Messages,
            Self::Questions => Self::Input,
            Self::Messages => Self::Questions,
        }
    }
}

/// State for the chat screen
#[derive(Debug, Clone)]
pub struct ChatState {
    pub conversation: Conversation,
    pub input: TextInput,
    pub focus: ChatFocus,
    pub selected_question: usize,
    /// Index into the message list; only bot messages are selectable
    pub selected_message: Option<usize>,
}

impl ChatState {
    pub fn new(bot: ChatBot, delay: Duration) -> Self {
        Self {
            conversation: Conversation::new(bot, delay),
            input: TextInput::new(),
            focus: ChatFocus::default(),
            selected_question: 0,
            selected_message: None,
        }
    }

    fn content(&self) -> &'static ChatContent {
        ChatContent::for_language(self.conversation.bot().language())
    }

    /// Send whatever is in the input line
    pub fn send_input(&mut self, now: Instant) -> bool {
        let text = self.input.value().to_string();
        if self.conversation.send(&text, now) {
            self.input.clear();
            true
        } else {
            false
        }
    }

    /// Send the highlighted quick-pick question
    pub fn send_selected_question(&mut self, now: Instant) -> bool {
        self.send_question(self.selected_question, now)
    }

    /// Send a quick-pick question by position
    pub fn send_question(&mut self, index: usize, now: Instant) -> bool {
        let questions = self.conversation.bot().quick_questions();
        match questions.get(index) {
            Some(question) => {
                self.selected_question = index;
                self.conversation.send(question, now)
            }
            None => false,
        }
    }

    fn bot_message_indices(&self) -> Vec<usize> {
        self.conversation
            .messages()
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_user())
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the message selection between bot messages
    pub fn select_message(&mut self, forward: bool) {
        let indices = self.bot_message_indices();
        if indices.is_empty() {
            self.selected_message = None;
            return;
        }

        let current = self
            .selected_message
            .and_then(|sel| indices.iter().position(|&i| i == sel));
        let pos = match (current, forward) {
            (None, _) => indices.len() - 1,
            (Some(p), true) => (p + 1).min(indices.len() - 1),
            (Some(p), false) => p.saturating_sub(1),
        };
        self.selected_message = Some(indices[pos]);
    }

    /// Text of the selected bot message
    pub fn selected_text(&self) -> Option<String> {
        self.selected_message
            .and_then(|i| self.conversation.messages().get(i))
            .map(|m| m.text.clone())
    }
}

/// Render the chat screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.chat.as_ref() else {
        return;
    };
    let t = state.content();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Quick questions
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(area);

    render_questions(frame, state, chunks[0]);
    render_messages(frame, state, t, chunks[1]);

    let listening = app.is_listening_for(Screen::Chat);
    let title = if listening {
        format!(" {} ", t.listening)
    } else {
        format!(" [Ctrl+R] {} ", t.speak)
    };
    let input = Paragraph::new(state.input.line(
        "> ",
        t.placeholder,
        state.focus == ChatFocus::Input,
    ))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_border(state.focus == ChatFocus::Input)),
    );
    frame.render_widget(input, chunks[2]);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_questions(frame: &mut Frame, state: &ChatState, area: Rect) {
    let items: Vec<ListItem> = state
        .conversation
        .bot()
        .quick_questions()
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("F{} ", i + usize::from(FIRST_QUESTION_KEY)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(q),
            ]))
        })
        .collect();

    let focused = state.focus == ChatFocus::Questions;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selected_question));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_messages(frame: &mut Frame, state: &ChatState, t: &ChatContent, area: Rect) {
    let focused = state.focus == ChatFocus::Messages;
    let width = area.width.saturating_sub(2).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, message) in state.conversation.messages().iter().enumerate() {
        let selected = focused && state.selected_message == Some(i);
        let (style, alignment) = if message.is_user() {
            (Style::default().fg(Color::Cyan), Alignment::Right)
        } else if selected {
            (Style::default().fg(Color::Black).bg(Color::White), Alignment::Left)
        } else {
            (Style::default().fg(Color::White), Alignment::Left)
        };

        let stamp = message
            .timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string();
        lines.push(Line::from(Span::styled(message.text.clone(), style)).alignment(alignment));
        lines.push(
            Line::from(Span::styled(stamp, Style::default().fg(Color::DarkGray)))
                .alignment(alignment),
        );
    }
    if state.conversation.is_typing() {
        lines.push(Line::from(Span::styled(
            t.typing,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest message in view
    let rendered: usize = lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(width))
        .sum();
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = rendered.saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Function key that sends the first quick-pick question; the rest follow
pub const FIRST_QUESTION_KEY: u8 = 2;

fn question_for_key(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::F(n) if n >= FIRST_QUESTION_KEY => Some(usize::from(n - FIRST_QUESTION_KEY)),
        _ => None,
    }
}

/// Handle key events for the chat screen
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_listening(Screen::Chat);
        return true;
    }

    if key.code == KeyCode::Esc {
        app.switch_screen(Screen::Dashboard);
        return true;
    }

    let Some(state) = app.chat.as_mut() else {
        return false;
    };
    let now = Instant::now();

    if let Some(index) = question_for_key(key.code) {
        return state.send_question(index, now);
    }

    match (state.focus, key.code) {
        (_, KeyCode::Tab) => {
            state.focus = state.focus.next();
            if state.focus == ChatFocus::Messages && state.selected_message.is_none() {
                state.select_message(true);
            }
            true
        }
        (_, KeyCode::BackTab) => {
            state.focus = state.focus.prev();
            if state.focus == ChatFocus::Messages && state.selected_message.is_none() {
                state.select_message(true);
            }
            true
        }
        (ChatFocus::Input, KeyCode::Enter) => {
            state.send_input(now);
            true
        }
        (ChatFocus::Input, _) => state.input.handle_key(key),
        (ChatFocus::Questions, KeyCode::Up) => {
            state.selected_question = state.selected_question.saturating_sub(1);
            true
        }
        (ChatFocus::Questions, KeyCode::Down) => {
            let last = state.conversation.bot().quick_questions().len().saturating_sub(1);
            state.selected_question = (state.selected_question + 1).min(last);
            true
        }
        (ChatFocus::Questions, KeyCode::Enter) => {
            state.send_selected_question(now);
            true
        }
        (ChatFocus::Messages, KeyCode::Up) => {
            state.select_message(false);
            true
        }
        (ChatFocus::Messages, KeyCode::Down) => {
            state.select_message(true);
            true
        }
        (ChatFocus::Messages, KeyCode::Enter) => {
            if let Some(text) = state.selected_text() {
                app.speak(&text);
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{IncomeBracket, Language, PhoneNumber, UserProfile};

    fn state() -> ChatState {
        let bot = ChatBot::new(Language::English, IncomeBracket::TenToFifteen);
        ChatState::new(bot, Duration::from_millis(1500))
    }

    #[test]
    fn test_send_input_clears_line() {
        let mut chat = state();
        chat.input.set("What is SIP?");
        assert!(chat.send_input(Instant::now()));
        assert!(chat.input.value().is_empty());
        assert!(chat.conversation.is_typing());
    }

    #[test]
    fn test_blank_input_not_sent() {
        let mut chat = state();
        chat.input.set("   ");
        assert!(!chat.send_input(Instant::now()));
        assert_eq!(chat.conversation.messages().len(), 1);
    }

    #[test]
    fn test_quick_question_gets_its_answer() {
        let mut chat = state();
        chat.selected_question = 1;
        let start = Instant::now();
        assert!(chat.send_selected_question(start));

        chat.conversation.poll(start + Duration::from_secs(2));
        let reply = chat.conversation.last_bot_message().unwrap();
        assert!(reply.text.starts_with("SIP means"));
    }

    #[test]
    fn test_function_keys_send_quick_questions() {
        let settings = Settings::default();
        let mut app = App::new(&settings).unwrap();
        app.complete_login(UserProfile::new(
            PhoneNumber::parse("9876543210").unwrap(),
            Language::English,
            IncomeBracket::TenToFifteen,
        ));
        app.switch_screen(Screen::Chat);

        assert!(handle_key(&mut app, KeyEvent::from(KeyCode::F(3))));
        let chat = app.chat.as_ref().unwrap();
        assert_eq!(chat.conversation.messages()[1].text, "What is SIP?");
        assert_eq!(chat.selected_question, 1);

        assert!(handle_key(&mut app, KeyEvent::from(KeyCode::F(6))));
        assert!(!handle_key(&mut app, KeyEvent::from(KeyCode::F(7))));
        assert_eq!(app.chat.as_ref().unwrap().conversation.messages().len(), 3);
    }

    #[test]
    fn test_message_selection_skips_user_messages() {
        let mut chat = state();
        let start = Instant::now();
        chat.conversation.send("What is SIP?", start);
        chat.conversation.poll(start + Duration::from_secs(2));

        chat.select_message(true);
        assert_eq!(chat.selected_message, Some(2));
        chat.select_message(false);
        assert_eq!(chat.selected_message, Some(0));
        chat.select_message(false);
        assert_eq!(chat.selected_message, Some(0));
        assert!(chat.selected_text().unwrap().starts_with("Hello!"));
    }
}
