//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, TodoFocus};
use crate::router::Route;

/// Key help for the current screen and focus.
#[must_use]
pub const fn help_text(route: Route, focus: TodoFocus) -> &'static str {
    match route {
        Route::Home => "l: login | s: sign up | t: theme | q: quit",
        Route::Login | Route::Signup => {
            "Tab: next field | Enter: submit | Ctrl-N: switch form | Esc: back"
        }
        Route::Todos => match focus {
            TodoFocus::List => {
                "jk: move | Space: toggle | e: edit | d: delete | v: details | 1-3/f: filter | s/o: sort | C: clear done | q: quit"
            }
            TodoFocus::NewTitle | TodoFocus::NewDescription => {
                "Enter: add | Tab: title/description | Esc: done"
            }
            TodoFocus::Search => "Type to search | Enter/Esc: back to list",
            TodoFocus::EditTitle | TodoFocus::EditDescription => {
                "Enter: save | Tab: title/description | Esc: cancel"
            }
        },
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let status_line = Line::from(vec![
        Span::styled(
            concat!("Tasklist v", env!("CARGO_PKG_VERSION")),
            palette.status_bar().add_modifier(ratatui::style::Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::raw(app.router.current().path()),
        Span::raw(" | "),
        Span::raw(help_text(app.router.current(), app.todos.focus)),
    ]);

    let paragraph = Paragraph::new(status_line).style(palette.status_bar());
    frame.render_widget(paragraph, area);
}
