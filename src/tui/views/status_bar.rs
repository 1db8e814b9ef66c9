//! Status bar view
//!
//! Shows who is logged in, the active screen and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => " Enter:Submit  Tab:Fields  F1:Help  Ctrl+C:Quit ",
        Screen::Dashboard => " v:Voice  c:Chat  ?:Help  q:Quit ",
        Screen::Voice => " Ctrl+R:Mic  Enter:Submit  Esc:Back  F1:Help ",
        Screen::Chat => " Ctrl+R:Mic  F2-F6:Ask  Tab:Focus  Esc:Back  F1:Help ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    match &app.profile {
        Some(profile) => {
            spans.push(Span::styled(
                format!(" {} ", profile.phone),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("│ "));
            spans.push(Span::styled(
                profile.income.label(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                profile.language.native_name(),
                Style::default().fg(Color::Cyan),
            ));
        }
        None => spans.push(Span::styled(" Paisa Tracker", Style::default().fg(Color::Cyan))),
    }

    let hints = hints(app.screen);

    // Pad so the hints sit on the right edge
    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
