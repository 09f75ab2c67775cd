pub mod components;
pub mod layout;
pub mod user_form;
pub mod user_table;

use ratatui::Frame;

use crate::app::{App, Focus};

pub fn render(app: &App, frame: &mut Frame) {
    if app.load_errors.is_empty() {
        let chunks = layout::create_layout(frame.area());
        components::render_header("Userdeck - User Directory", frame, chunks[0]);
        render_main(app, frame, chunks[1]);
        components::render_footer(footer_text(app), frame, chunks[2]);
    } else {
        let chunks = layout::create_layout_with_errors(frame.area());
        components::render_header("Userdeck - User Directory", frame, chunks[0]);
        render_main(app, frame, chunks[1]);
        components::render_load_errors(&app.load_errors, frame, chunks[2]);
        components::render_footer(footer_text(app), frame, chunks[3]);
    }
}

fn render_main(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let panes = layout::split_main(area);
    user_form::render(app, frame, panes[0]);
    user_table::render(app, frame, panes[1]);
}

fn footer_text(app: &App) -> &'static str {
    match app.focus {
        Focus::Table => "j/k: Navigate | e/Enter: Edit | d: Delete | n: New | Tab: Form | q: Quit",
        Focus::Form => {
            if app.form.editing.is_some() {
                "Enter: Update User | Tab: Next Field | Esc: Cancel Edit"
            } else {
                "Enter: Create User | Tab: Next Field | Esc: Back"
            }
        }
    }
}
