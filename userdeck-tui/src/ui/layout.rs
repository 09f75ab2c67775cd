use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard 3-section layout: header, main, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// 4-section layout with an errors panel
pub fn create_layout_with_errors(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(5), // Errors
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Split the main band into the form pane and the user table
pub fn split_main(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Form (outer border + 3-line inputs)
            Constraint::Min(1),    // Table
        ])
        .split(area)
        .to_vec()
}
