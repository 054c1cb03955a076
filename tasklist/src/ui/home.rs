//! Landing screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::auth::{SESSION_KEY, SessionStorage};

/// Render the home screen with links to login and signup.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("Tasklist", palette.highlighted())),
        Line::default(),
        Line::from(Span::styled(
            "Keep track of what needs doing.",
            palette.normal(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[l]", palette.highlighted()),
            Span::styled(" Login    ", palette.normal()),
            Span::styled("[s]", palette.highlighted()),
            Span::styled(" Sign up", palette.normal()),
        ]),
    ];
    if let Some(email) = app.session.get(SESSION_KEY) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Last signed in as {email}"),
            palette.dimmed(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.normal());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(palette.normal())
        .block(block);
    frame.render_widget(paragraph, area);
}
