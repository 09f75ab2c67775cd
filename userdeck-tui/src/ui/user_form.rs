use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, FormField};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form_focused = app.focus == Focus::Form;

    let border_style = if form_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(app.submit_label())
        .border_style(border_style);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(inner);

    render_input(
        "Name",
        &app.form.name,
        form_focused && app.form.focus == FormField::Name,
        frame,
        fields[0],
    );
    render_input(
        "Email",
        &app.form.email,
        form_focused && app.form.focus == FormField::Email,
        frame,
        fields[1],
    );
    render_input(
        "Phone",
        &app.form.phone,
        form_focused && app.form.focus == FormField::Phone,
        frame,
        fields[2],
    );
}

fn render_input(label: &str, value: &str, focused: bool, frame: &mut Frame, area: Rect) {
    // A trailing underscore stands in for the cursor on the focused input
    let display = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(display).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}
