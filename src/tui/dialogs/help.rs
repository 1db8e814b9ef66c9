//! Help dialog
//!
//! Shows the keys for the active screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.screen))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Get help lines for the active screen
fn help_lines(screen: Screen) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+C", "Quit application"),
        key_line("F1", "Show/hide help"),
        Line::from(""),
    ];

    match screen {
        Screen::Login => {
            lines.push(section("Login"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/↓", "Next field"));
            lines.push(key_line("←/→", "Change language or income"));
            lines.push(key_line("Enter", "Send OTP / Verify"));
            lines.push(key_line("Esc", "Change number (OTP step)"));
        }
        Screen::Dashboard => {
            lines.push(section("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("v", "Add expense by voice"));
            lines.push(key_line("c", "Ask the assistant"));
            lines.push(key_line("?", "Show/hide help"));
            lines.push(key_line("q", "Quit application"));
        }
        Screen::Voice => {
            lines.push(section("Voice Expense"));
            lines.push(Line::from(""));
            lines.push(key_line("Ctrl+R", "Start/stop recording"));
            lines.push(key_line("Enter", "Process typed text / Confirm"));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("←/→", "Change category"));
            lines.push(key_line("Ctrl+U", "Clear field"));
            lines.push(key_line("Esc", "Cancel / Back to dashboard"));
        }
        Screen::Chat => {
            lines.push(section("Assistant"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Send message or question"));
            lines.push(key_line("Tab", "Input / questions / messages"));
            lines.push(key_line("↑/↓", "Select question or message"));
            lines.push(key_line("F2-F6", "Ask a quick question"));
            lines.push(key_line("Enter", "Read selected message aloud"));
            lines.push(key_line("Ctrl+R", "Ask by voice"));
            lines.push(key_line("Esc", "Back to dashboard"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_help() {
        for screen in [Screen::Login, Screen::Dashboard, Screen::Voice, Screen::Chat] {
            assert!(help_lines(screen).len() > 8);
        }
    }
}
