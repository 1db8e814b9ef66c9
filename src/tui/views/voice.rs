//! Voice expense screen
//!
//! A transcript (spoken or typed) goes through an artificial "processing"
//! delay, then the parser fills in amount, category and description. The
//! user can correct all three before confirming.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::locale::VoiceContent;
use crate::models::{ExpenseCategory, Rupees};
use crate::services::ExpenseParser;
use crate::tui::app::{App, Screen};
use crate::tui::widgets::{Notification, TextInput};

/// Longest amount the form accepts, in digits
const AMOUNT_MAX_DIGITS: usize = 9;

/// Which field is focused in the voice form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceField {
    #[default]
    Transcript,
    Amount,
    Category,
    Description,
}

impl VoiceField {
    pub fn next(self) -> Self {
        match self {
            Self::Transcript => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Transcript,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Transcript => Self::Description,
            Self::Amount => Self::Transcript,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
        }
    }
}

/// State for the voice expense form
#[derive(Debug, Clone)]
pub struct VoiceFormState {
    pub transcript: TextInput,
    pub amount: TextInput,
    pub category: ExpenseCategory,
    pub description: TextInput,
    pub focused_field: VoiceField,
    /// Set while the artificial processing delay runs
    processing_until: Option<Instant>,
    /// Whether parsed fields are on screen
    reviewing: bool,
}

impl VoiceFormState {
    pub fn new() -> Self {
        Self {
            transcript: TextInput::new(),
            amount: TextInput::new().digits().max_chars(AMOUNT_MAX_DIGITS),
            category: ExpenseCategory::Other,
            description: TextInput::new(),
            focused_field: VoiceField::Transcript,
            processing_until: None,
            reviewing: false,
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_processing(&self) -> bool {
        self.processing_until.is_some()
    }

    pub fn is_reviewing(&self) -> bool {
        self.reviewing
    }

    /// Whether anything has been entered
    pub fn is_dirty(&self) -> bool {
        self.reviewing || !self.transcript.is_blank()
    }

    /// Take a transcript and start the processing delay
    pub fn submit_transcript(&mut self, text: &str, due: Instant) {
        self.transcript.set(text.trim());
        self.processing_until = Some(due);
        self.reviewing = false;
    }

    /// Parse the transcript once the delay is over; returns whether it ran
    pub fn poll(&mut self, now: Instant, parser: &ExpenseParser) -> bool {
        match self.processing_until {
            Some(due) if due <= now => {}
            _ => return false,
        }

        let parsed = parser.parse(self.transcript.value());
        self.amount.set(
            parsed
                .amount
                .map(|a| a.value().to_string())
                .unwrap_or_default(),
        );
        self.category = parsed.category;
        self.description.set(parsed.description);

        self.processing_until = None;
        self.reviewing = true;
        self.focused_field = VoiceField::Amount;
        true
    }

    /// The entered amount, if it is a positive number
    pub fn amount_value(&self) -> Option<Rupees> {
        Rupees::parse(self.amount.value())
            .ok()
            .filter(|a| a.is_positive())
    }

    pub fn can_confirm(&self) -> bool {
        self.reviewing && self.amount_value().is_some()
    }

    fn next_field(&mut self) {
        if self.reviewing {
            self.focused_field = self.focused_field.next();
        }
    }

    fn prev_field(&mut self) {
        if self.reviewing {
            self.focused_field = self.focused_field.prev();
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            VoiceField::Transcript => Some(&mut self.transcript),
            VoiceField::Amount => Some(&mut self.amount),
            VoiceField::Description => Some(&mut self.description),
            VoiceField::Category => None,
        }
    }
}

impl Default for VoiceFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the voice expense screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.voice;
    let t = VoiceContent::for_language(app.language());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Recording control
            Constraint::Length(3), // Transcript
            Constraint::Min(6),    // Review or examples
        ])
        .split(area);

    let listening = app.is_listening_for(Screen::Voice);
    let control = if state.is_processing() {
        Line::from(Span::styled(
            t.processing,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else if listening {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled("[Ctrl+R] ", Style::default().fg(Color::Cyan)),
            Span::raw(t.stop_recording),
        ])
    } else {
        Line::from(vec![
            Span::styled("○ ", Style::default().fg(Color::Gray)),
            Span::styled("[Ctrl+R] ", Style::default().fg(Color::Cyan)),
            Span::raw(t.start_recording),
        ])
    };
    frame.render_widget(
        Paragraph::new(control).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let transcript = Paragraph::new(state.transcript.line(
        "",
        t.try_saying,
        state.focused_field == VoiceField::Transcript,
    ))
    .block(
        Block::default()
            .title(format!(" {} ", t.you_said))
            .borders(Borders::ALL)
            .border_style(field_border(state.focused_field == VoiceField::Transcript)),
    );
    frame.render_widget(transcript, chunks[1]);

    if state.is_reviewing() {
        render_review(frame, state, t, chunks[2]);
    } else {
        render_examples(frame, t, chunks[2]);
    }
}

fn field_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn render_review(frame: &mut Frame, state: &VoiceFormState, t: &VoiceContent, area: Rect) {
    let focus = state.focused_field;

    let mut amount = vec![Span::styled(
        format!("{:<14}", t.amount),
        label_style(focus == VoiceField::Amount),
    )];
    amount.extend(state.amount.line("₹", "0", focus == VoiceField::Amount).spans);

    let category_style = if focus == VoiceField::Category {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let category = Line::from(vec![
        Span::styled(
            format!("{:<14}", t.category),
            label_style(focus == VoiceField::Category),
        ),
        Span::raw("< "),
        Span::styled(t.category_name(state.category), category_style),
        Span::raw(" >"),
    ]);

    let mut description = vec![Span::styled(
        format!("{:<14}", t.description),
        label_style(focus == VoiceField::Description),
    )];
    description.extend(
        state
            .description
            .line("", "", focus == VoiceField::Description)
            .spans,
    );

    let confirm_style = if state.can_confirm() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(amount),
        Line::from(""),
        category,
        Line::from(""),
        Line::from(description),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", confirm_style),
            Span::styled(t.confirm, confirm_style),
            Span::raw("  "),
            Span::styled("[Esc] ", Style::default().fg(Color::Yellow)),
            Span::raw(t.cancel),
            Span::raw("  "),
            Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
            Span::raw(" Fields"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_examples(frame: &mut Frame, t: &VoiceContent, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(t.try_saying, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    lines.extend(
        t.examples
            .iter()
            .map(|e| Line::from(format!("\u{201c}{}\u{201d}", e))),
    );

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", t.examples_title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Handle key events for the voice screen
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_listening(Screen::Voice);
        return true;
    }

    if key.code == KeyCode::Esc {
        if app.is_listening_for(Screen::Voice) {
            app.stop_listening();
        } else if app.voice.is_dirty() {
            app.voice.reset();
        } else {
            app.switch_screen(Screen::Dashboard);
        }
        return true;
    }

    // Input is locked while the transcript is being processed
    if app.voice.is_processing() {
        return true;
    }

    let state = &mut app.voice;
    match key.code {
        KeyCode::Tab => {
            state.next_field();
            true
        }
        KeyCode::BackTab => {
            state.prev_field();
            true
        }
        KeyCode::Enter if state.focused_field == VoiceField::Transcript => {
            if !state.transcript.is_blank() {
                let text = state.transcript.value().to_string();
                let now = Instant::now();
                let due = now.checked_add(app.settings.processing_delay()).unwrap_or(now);
                app.voice.submit_transcript(&text, due);
            }
            true
        }
        KeyCode::Enter => {
            confirm(app);
            true
        }
        KeyCode::Left if state.focused_field == VoiceField::Category => {
            state.category = state.category.prev();
            true
        }
        KeyCode::Right | KeyCode::Char(' ') if state.focused_field == VoiceField::Category => {
            state.category = state.category.next();
            true
        }
        _ => state
            .focused_input()
            .is_some_and(|input| input.handle_key(key)),
    }
}

/// Record the reviewed expense and return to the dashboard
/// Record the reviewed expense
///
/// The toast echoes the amount as entered, without digit grouping.
fn confirm(app: &mut App) {
    let t = VoiceContent::for_language(app.language());
    let Some(amount) = app.voice.amount_value() else {
        app.notify(Notification::error(t.invalid_amount));
        return;
    };
    let category = app.voice.category;
    let description = app.voice.description.value().to_string();

    let added = app
        .expenses
        .add(amount, category, &description)
        .map(|e| format!("₹{} in {}", e.amount.value(), t.category_name(e.category)));

    match added {
        Ok(message) => {
            app.notify(Notification::success(message).with_title(t.added));
            app.voice.reset();
            app.switch_screen(Screen::Dashboard);
        }
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{IncomeBracket, Language, PhoneNumber, UserProfile};
    use std::time::Duration;

    fn parser() -> ExpenseParser {
        ExpenseParser::new().unwrap()
    }

    fn app_on_voice(settings: &Settings) -> App<'_> {
        app_on_voice_in(settings, Language::English)
    }

    fn app_on_voice_in(settings: &Settings, language: Language) -> App<'_> {
        let mut app = App::new(settings).unwrap();
        let phone = PhoneNumber::parse("9876543210").unwrap();
        app.complete_login(UserProfile::new(phone, language, IncomeBracket::TenToFifteen));
        app.switch_screen(Screen::Voice);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_transcript_parsed_after_delay() {
        let mut state = VoiceFormState::new();
        let start = Instant::now();
        state.submit_transcript(
            "Spent 200 rupees on vegetables today",
            start + Duration::from_millis(1500),
        );

        assert!(state.is_processing());
        assert!(!state.poll(start, &parser()));
        assert!(state.poll(start + Duration::from_millis(1500), &parser()));

        assert_eq!(state.amount.value(), "200");
        assert_eq!(state.category, ExpenseCategory::Groceries);
        assert_eq!(state.description.value(), "Spent 200 rupees on vegetables today");
        assert!(state.can_confirm());
    }

    #[test]
    fn test_no_amount_cannot_confirm() {
        let mut state = VoiceFormState::new();
        let now = Instant::now();
        state.submit_transcript("bought some vegetables", now);
        state.poll(now, &parser());

        assert!(state.is_reviewing());
        assert_eq!(state.amount.value(), "");
        assert!(!state.can_confirm());
    }

    #[test]
    fn test_zero_amount_cannot_confirm() {
        let mut state = VoiceFormState::new();
        let now = Instant::now();
        state.submit_transcript("200 rupees", now);
        state.poll(now, &parser());
        state.amount.set("0");
        assert!(!state.can_confirm());
    }

    #[test]
    fn test_typed_transcript_and_confirm() {
        let mut settings = Settings::default();
        settings.processing_delay_ms = 0;
        let mut app = app_on_voice(&settings);

        for c in "500 rupees for medicine".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.voice.is_processing());

        app.on_tick(Instant::now());
        assert!(app.voice.is_reviewing());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.expenses.len(), 1);

        let expense = app.expenses.iter().next().unwrap();
        assert_eq!(expense.amount, Rupees::new(500));
        assert_eq!(expense.category, ExpenseCategory::Medical);

        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.display_title(), "Expense Added!");
        assert_eq!(toast.message, "₹500 in Medical");
    }

    #[test]
    fn test_added_toast_keeps_amount_ungrouped() {
        let mut settings = Settings::default();
        settings.processing_delay_ms = 0;
        let mut app = app_on_voice_in(&settings, Language::Hindi);

        for c in "1200 रुपये दवा".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        app.on_tick(Instant::now());
        press(&mut app, KeyCode::Enter);

        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.display_title(), "खर्च जोड़ा गया!");
        assert_eq!(toast.message, "₹1200 in दवाई");
    }

    #[test]
    fn test_invalid_amount_toast_is_localized() {
        let mut settings = Settings::default();
        settings.processing_delay_ms = 0;
        let mut app = app_on_voice_in(&settings, Language::Hindi);

        for c in "200 rupees".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        app.on_tick(Instant::now());
        app.voice.amount.set("0");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Voice);
        assert!(app.expenses.is_empty());
        assert_eq!(
            app.notifications.current().unwrap().message,
            "कृपया सही रकम डालें"
        );
    }

    #[test]
    fn test_escape_cancels_then_leaves() {
        let settings = Settings::default();
        let mut app = app_on_voice(&settings);

        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Voice);
        assert!(!app.voice.is_dirty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn test_category_can_be_changed() {
        let settings = Settings::default();
        let mut app = app_on_voice(&settings);
        let now = Instant::now();
        app.voice.submit_transcript("50 rupees auto", now);
        app.voice.poll(now, &app.parser);
        assert_eq!(app.voice.category, ExpenseCategory::Transport);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.voice.focused_field, VoiceField::Category);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.voice.category, ExpenseCategory::Food);
    }
}
