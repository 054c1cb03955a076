//! The todos screen: header, new-task form, controls and list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::input::{self, InputBox};
use super::{controls_bar, task_panel};
use crate::app::{App, TodoFocus};
use crate::auth::{SESSION_KEY, SessionStorage};
use crate::tasks::all_completed;

/// Render the whole todos screen into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(controls_bar::HEIGHT),
            Constraint::Min(3),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_add_form(frame, chunks[1], chunks[2], app);
    controls_bar::render(frame, chunks[3], app);
    task_panel::render(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let user = app
        .session
        .get(SESSION_KEY)
        .unwrap_or_else(|| "guest".to_string());
    let check_all = if all_completed(app.store.state()) {
        "[✓] All done"
    } else {
        "[ ] Check all (A)"
    };

    let line = Line::from(vec![
        Span::styled("My Todos", palette.bold()),
        Span::raw("  "),
        Span::styled(check_all, palette.dimmed()),
        Span::raw("  "),
        Span::styled(format!("{user} · Logout (L)"), palette.dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.normal()), area);
}

fn render_add_form(frame: &mut Frame, form_area: Rect, error_area: Rect, app: &App) {
    let palette = app.theme.palette();
    let todos = &app.todos;
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(form_area);

    let title = InputBox {
        title: "New task (a)",
        placeholder: "What needs to be done?",
        focused: todos.focus == TodoFocus::NewTitle,
        secret: false,
    };
    input::render(frame, halves[0], &todos.new_title, title, palette);

    let description = InputBox {
        title: "Description",
        placeholder: "Optional details",
        focused: todos.focus == TodoFocus::NewDescription,
        secret: false,
    };
    input::render(frame, halves[1], &todos.new_description, description, palette);

    if let Some(error) = &todos.new_error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), palette.error())),
            error_area,
        );
    }
}
