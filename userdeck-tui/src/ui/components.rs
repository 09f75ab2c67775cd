use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::LoadError;

pub fn render_header(title: &str, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}

pub fn render_load_errors(errors: &[LoadError], frame: &mut Frame, area: Rect) {
    if errors.is_empty() {
        return;
    }

    let error_lines: Vec<Line> = errors
        .iter()
        .flat_map(|err| {
            vec![
                Line::from(vec![
                    Span::styled(
                        "✗ ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(&err.endpoint, Style::default().fg(Color::Yellow)),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(&err.message, Style::default().fg(Color::Gray)),
                ]),
            ]
        })
        .collect();

    let error_widget = Paragraph::new(error_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Load Errors")
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(error_widget, area);
}
