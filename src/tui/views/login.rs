//! Login screen
//!
//! Phone step (number, language, income) followed by the OTP step. The
//! screen's own strings follow the language currently selected.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::locale::login::{LoginContent, CHANGE_NUMBER, OTP_SENT};
use crate::models::{IncomeBracket, Language, PHONE_DIGITS};
use crate::services::login::OTP_DIGITS;
use crate::services::{LoginFlow, LoginStep};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, TextInput};

/// Which field is focused on the phone step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Phone,
    Language,
    Income,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            Self::Phone => Self::Language,
            Self::Language => Self::Income,
            Self::Income => Self::Phone,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Phone => Self::Income,
            Self::Language => Self::Phone,
            Self::Income => Self::Language,
        }
    }
}

/// State for the login form
#[derive(Debug, Clone)]
pub struct LoginFormState {
    pub flow: LoginFlow,
    pub phone: TextInput,
    pub otp: TextInput,
    pub focused_field: LoginField,
}

impl LoginFormState {
    pub fn new(language: Language, income: IncomeBracket) -> Self {
        Self {
            flow: LoginFlow::new(language, income),
            phone: TextInput::new().digits().max_chars(PHONE_DIGITS),
            otp: TextInput::new().digits().max_chars(OTP_DIGITS),
            focused_field: LoginField::default(),
        }
    }

    pub fn content(&self) -> &'static LoginContent {
        LoginContent::for_language(self.flow.language)
    }

    fn cycle_choice(&mut self, forward: bool) {
        match self.focused_field {
            LoginField::Language => self.flow.language = self.flow.language.toggled(),
            LoginField::Income => {
                self.flow.income = if forward {
                    self.flow.income.next()
                } else {
                    self.flow.income.prev()
                }
            }
            LoginField::Phone => {}
        }
    }
}

/// Render the login screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.login;
    let t = state.content();

    let form = centered_rect_fixed(56, 14, area);
    let block = Block::default()
        .title(format!(" {} ", t.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form);
    frame.render_widget(block, form);

    match state.flow.step() {
        LoginStep::Phone => render_phone_step(frame, state, t, inner),
        LoginStep::Otp => render_otp_step(frame, state, t, inner),
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

fn choice_line(value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::raw("< "),
        Span::styled(value.to_string(), style),
        Span::raw(" >"),
    ])
}

fn action_line(label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("[Enter] ", style),
        Span::styled(label.to_string(), style),
    ])
}

fn render_phone_step(frame: &mut Frame, state: &LoginFormState, t: &LoginContent, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Phone label
            Constraint::Length(1), // Phone input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Language
            Constraint::Length(1), // Income
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Action
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(t.subtitle, Style::default().fg(Color::Gray))),
        chunks[0],
    );

    let focus = state.focused_field;
    frame.render_widget(
        Paragraph::new(Span::styled(t.phone_label, label_style(focus == LoginField::Phone))),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            state
                .phone
                .line("+91 ", "9876543210", focus == LoginField::Phone),
        ),
        chunks[3],
    );

    let mut language = vec![Span::styled(
        format!("{:<18}", t.language),
        label_style(focus == LoginField::Language),
    )];
    language.extend(
        choice_line(state.flow.language.native_name(), focus == LoginField::Language).spans,
    );
    frame.render_widget(Paragraph::new(Line::from(language)), chunks[5]);

    let mut income = vec![Span::styled(
        format!("{:<18}", t.income),
        label_style(focus == LoginField::Income),
    )];
    income.extend(choice_line(state.flow.income.label(), focus == LoginField::Income).spans);
    frame.render_widget(Paragraph::new(Line::from(income)), chunks[6]);

    let enabled = LoginFlow::can_send_otp(state.phone.value());
    frame.render_widget(Paragraph::new(action_line(t.send_otp, enabled)), chunks[8]);

    let instructions = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Change"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[9]);
}

fn render_otp_step(frame: &mut Frame, state: &LoginFormState, t: &LoginContent, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Banner
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // OTP label
            Constraint::Length(1), // OTP input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Action
            Constraint::Length(1), // Change number
            Constraint::Min(0),
        ])
        .split(area);

    let phone = state
        .flow
        .phone()
        .map(|p| p.to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} {}", OTP_SENT, phone),
            Style::default().fg(Color::Green),
        )),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(t.otp_label, label_style(true))),
        chunks[2],
    );
    frame.render_widget(Paragraph::new(state.otp.line("", "000000", true)), chunks[3]);

    let enabled = LoginFlow::can_verify(state.otp.value());
    frame.render_widget(Paragraph::new(action_line(t.verify_otp, enabled)), chunks[5]);

    let change = Line::from(vec![
        Span::styled("[Esc] ", Style::default().fg(Color::Yellow)),
        Span::raw(CHANGE_NUMBER),
    ]);
    frame.render_widget(Paragraph::new(change), chunks[6]);
}

/// Handle key events for the login screen
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.login.flow.step() {
        LoginStep::Phone => handle_phone_key(app, key),
        LoginStep::Otp => handle_otp_key(app, key),
    }
}

fn handle_phone_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.login;

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focused_field = state.focused_field.next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focused_field = state.focused_field.prev();
            true
        }
        KeyCode::Left if state.focused_field != LoginField::Phone => {
            state.cycle_choice(false);
            true
        }
        KeyCode::Right | KeyCode::Char(' ') if state.focused_field != LoginField::Phone => {
            state.cycle_choice(true);
            true
        }
        KeyCode::Enter => {
            let phone = app.login.phone.value().to_string();
            match app.login.flow.send_otp(&phone).map(|_| ()) {
                Ok(()) => app.login.otp.clear(),
                Err(e) => app.notify(Notification::error(e.to_string())),
            }
            true
        }
        _ if state.focused_field == LoginField::Phone => state.phone.handle_key(key),
        _ => false,
    }
}

fn handle_otp_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.login.flow.change_number();
            app.login.focused_field = LoginField::Phone;
            true
        }
        KeyCode::Enter => {
            match app.login.flow.verify_otp(app.login.otp.value()) {
                Ok(profile) => app.complete_login(profile),
                Err(e) => app.notify(Notification::error(e.to_string())),
            }
            true
        }
        _ => app.login.otp.handle_key(key),
    }
}
