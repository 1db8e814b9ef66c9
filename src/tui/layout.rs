//! Layout definitions for the TUI
//!
//! Every screen shares the same frame: a header, the screen body and a
//! one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions shared by all screens
pub struct AppLayout {
    /// Title and subtitle
    pub header: Rect,
    /// Screen content
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(5),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the dashboard body
pub struct DashboardLayout {
    /// Income, expenses and savings cards
    pub summary: Rect,
    /// Expense gauge
    pub gauge: Rect,
    /// Category breakdown
    pub categories: Rect,
    /// Tips and rating
    pub side: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Summary cards
                Constraint::Length(3), // Gauge
                Constraint::Min(7),    // Categories and tips
            ])
            .split(area);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        Self {
            summary: rows[0],
            gauge: rows[1],
            categories: bottom[0],
            side: bottom[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for forms
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner
pub fn notification_area(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits_full_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.height, 19);
    }

    #[test]
    fn test_fixed_rect_is_clamped() {
        let area = centered_rect_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(area.width, 40);
        assert_eq!(area.y, 5);
    }

    #[test]
    fn test_notification_area_hugs_right_edge() {
        let area = notification_area(30, 5, Rect::new(0, 0, 80, 24));
        assert_eq!(area.x + area.width, 80);
        assert_eq!(area.y, 0);
    }
}
