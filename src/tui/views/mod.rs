//! TUI Views module
//!
//! One view per screen (login, dashboard, voice, chat) plus the shared
//! header and status bar. Toasts and the help overlay draw on top.

pub mod chat;
pub mod dashboard;
pub mod login;
pub mod status_bar;
pub mod voice;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::dialogs;
use super::layout::{notification_area, AppLayout};
use super::widgets::NotificationWidget;
use crate::locale::{ChatContent, DashboardContent, LoginContent, VoiceContent};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.screen {
        Screen::Login => login::render(frame, app, layout.main),
        Screen::Dashboard => dashboard::render(frame, app, layout.main),
        Screen::Voice => voice::render(frame, app, layout.main),
        Screen::Chat => chat::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(44, 5, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

/// Title and subtitle for the active screen
fn header_text(app: &App) -> (String, String) {
    let language = app.language();
    match app.screen {
        Screen::Login => {
            let t = LoginContent::for_language(language);
            (t.title.to_string(), t.subtitle.to_string())
        }
        Screen::Dashboard => {
            let t = DashboardContent::for_language(language);
            let phone = app
                .profile
                .as_ref()
                .map(|p| p.phone.to_string())
                .unwrap_or_default();
            (t.greeting.to_string(), phone)
        }
        Screen::Voice => {
            let t = VoiceContent::for_language(language);
            (t.title.to_string(), t.subtitle.to_string())
        }
        Screen::Chat => {
            let t = ChatContent::for_language(language);
            (t.title.to_string(), t.subtitle.to_string())
        }
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (title, subtitle) = header_text(app);

    let back = if matches!(app.screen, Screen::Voice | Screen::Chat) {
        Span::styled("← Esc  ", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("")
    };

    let lines = vec![
        Line::from(vec![
            back,
            Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}
