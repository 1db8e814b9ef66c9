//! Dashboard screen
//!
//! Income, expenses and savings for the profile's bracket, the category
//! split, tips and the rating. Every figure is derived from the bracket.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::locale::DashboardContent;
use crate::models::Rupees;
use crate::services::DashboardSummary;
use crate::tui::app::{App, Screen};
use crate::tui::layout::DashboardLayout;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(profile) = app.profile.as_ref() else {
        return;
    };
    let t = DashboardContent::for_language(profile.language);
    let summary = DashboardSummary::for_bracket(profile.income);
    let layout = DashboardLayout::new(area);

    render_summary(frame, t, &summary, layout.summary);
    render_gauge(frame, &summary, layout.gauge);
    render_categories(frame, t, &summary, layout.categories);
    render_side(frame, app, t, &summary, layout.side);
}

fn card(
    frame: &mut Frame,
    title: &str,
    amount: Rupees,
    note: Option<String>,
    color: Color,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let mut lines = vec![Line::from(Span::styled(
        amount.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(note) = note {
        lines.push(Line::from(Span::styled(note, Style::default().fg(Color::Gray))));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_summary(frame: &mut Frame, t: &DashboardContent, summary: &DashboardSummary, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    card(
        frame,
        t.income,
        summary.income,
        Some(t.this_month.to_string()),
        Color::Cyan,
        cards[0],
    );
    card(frame, t.expenses, summary.expenses, None, Color::Yellow, cards[1]);
    card(
        frame,
        t.savings,
        summary.savings,
        Some(t.savings_share_text(summary.savings_percent)),
        Color::Green,
        cards[2],
    );
}

fn render_gauge(frame: &mut Frame, summary: &DashboardSummary, area: Rect) {
    let ratio = (summary.expense_ratio / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        .label(format!("{} / {}", summary.expenses, summary.income))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn render_categories(
    frame: &mut Frame,
    t: &DashboardContent,
    summary: &DashboardSummary,
    area: Rect,
) {
    let rows: Vec<Row> = summary
        .categories
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.category.icon()),
                Cell::from(t.category_name(c.category)),
                Cell::from(c.amount.to_string()).style(Style::default().fg(Color::Yellow)),
                Cell::from(format!("{}%", c.percent)).style(Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(10),
            Constraint::Length(5),
        ],
    )
    .block(
        Block::default()
            .title(format!(" {} ", t.categories))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}

fn render_side(
    frame: &mut Frame,
    app: &App,
    t: &DashboardContent,
    summary: &DashboardSummary,
    area: Rect,
) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", t.rating), Style::default().fg(Color::Yellow)),
            Span::styled(summary.rating_stars(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", t.session_entries), Style::default().fg(Color::Gray)),
            Span::styled(
                app.expenses.len().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            t.recommendations,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(t.tips.iter().map(|tip| Line::from(format!("• {}", tip))));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[v] ", Style::default().fg(Color::Green)),
        Span::raw(format!("{}  ", t.voice_input)),
        Span::styled("[c] ", Style::default().fg(Color::Green)),
        Span::raw(t.ask_bot),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Handle key events for the dashboard
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.switch_screen(Screen::Voice);
            true
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.switch_screen(Screen::Chat);
            true
        }
        _ => false,
    }
}
