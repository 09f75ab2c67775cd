use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::{App, Focus};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.loading {
        let msg = Paragraph::new("Loading users...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Users"));
        frame.render_widget(msg, area);
        return;
    }

    if app.store.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from("No users in the list."),
            Line::from(""),
            Line::from("Press 'n' to create one locally."),
        ])
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Users"))
        .wrap(Wrap { trim: true });
        frame.render_widget(empty_msg, area);
        return;
    }

    let header = Row::new(["Name", "Email", "Phone"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .store
        .users()
        .iter()
        .map(|user| {
            Row::new(vec![
                user.name.clone(),
                user.email.clone(),
                user.phone.clone(),
            ])
            .style(Style::default().fg(Color::White))
        })
        .collect();

    let highlight_style = if app.focus == Focus::Table {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .row_highlight_style(highlight_style)
    .highlight_symbol("> ")
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Users ({})", app.store.len())),
    );

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
