//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, dashboard, main panel,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Dashboard metric cards
    pub dashboard: Rect,
    /// Main content area
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
                Constraint::Length(1), // Header
                Constraint::Length(4), // Dashboard
                Constraint::Min(6),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            dashboard: chunks[1],
            main: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Layout for the list view
pub struct ListLayout {
    /// Search box and status filter
    pub toolbar: Rect,
    /// Column filter inputs
    pub column_filters: Rect,
    /// Invoice table
    pub table: Rect,
}

impl ListLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Toolbar
                Constraint::Length(1), // Column filters
                Constraint::Min(3),    // Table
            ])
            .split(area);

        Self {
            toolbar: chunks[0],
            column_filters: chunks[1],
            table: chunks[2],
        }
    }
}

/// Split an area into `n` equal columns
pub fn equal_columns(area: Rect, n: u16) -> Vec<Rect> {
    let n = n.max(1);
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n as u32)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
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

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.dashboard.height, 4);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.main.height, 34);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(72, 22, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect_fixed(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_equal_columns() {
        let cols = equal_columns(Rect::new(0, 0, 100, 4), 4);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols.iter().map(|c| c.width).sum::<u16>(), 100);
    }
}
