//! Login and signup forms.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::input::{self, InputBox};
use crate::app::{AuthForm, AuthFormKind};
use crate::ui::theme::Palette;

const FORM_WIDTH: u16 = 48;

/// Render `form` centred in `area`.
pub fn render(frame: &mut Frame, area: Rect, form: &AuthForm, palette: &Palette) {
    let (title, submit, busy, switch) = match form.kind {
        AuthFormKind::Login => (
            "Login",
            "Enter: Login",
            "Logging in...",
            "Ctrl-N: Don't have an account? Sign up",
        ),
        AuthFormKind::Signup => (
            "Sign Up",
            "Enter: Sign Up",
            "Creating account...",
            "Ctrl-N: Already have an account? Login",
        ),
    };

    let area = centered(area, FORM_WIDTH);
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(palette.highlighted());
    let inner = outer.inner(area);
    frame.render_widget(outer.style(palette.normal()), area);

    // Each field: 3 rows of input plus 1 row for its error.
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .flat_map(|_| [Constraint::Length(3), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let spec = InputBox {
            title: field.label,
            placeholder: "",
            focused: i == form.focus && !form.loading,
            secret: field.secret,
        };
        input::render(frame, rows[i * 2], &field.input, spec, palette);
        if let Some(message) = form.errors.get(field.field) {
            frame.render_widget(
                Paragraph::new(Span::styled(message, palette.error())),
                rows[i * 2 + 1],
            );
        }
    }

    let base = form.fields.len() * 2;
    let status = if form.loading {
        Line::from(Span::styled(busy, palette.dimmed()))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(error.as_str(), palette.error()))
    } else {
        Line::from(Span::styled(submit, palette.bold()))
    };
    frame.render_widget(Paragraph::new(status), rows[base]);
    frame.render_widget(
        Paragraph::new(Span::styled(switch, palette.dimmed())),
        rows[base + 1],
    );
}

/// A column of `width` centred horizontally in `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
