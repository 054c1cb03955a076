//! Search box, filter buttons and sort controls above the task list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tasklist_proto::view::{Filter, SortField};

use super::input::{self, InputBox};
use crate::app::{App, TodoFocus};

/// Rows needed by [`render`].
pub const HEIGHT: u16 = 5;

/// Render the search box, then one row each for filters and sorting.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let state = app.store.state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let search = InputBox {
        title: "Search (/)",
        placeholder: "Search todos...",
        focused: app.todos.focus == TodoFocus::Search,
        secret: false,
    };
    input::render(frame, rows[0], &app.todos.search, search, palette);

    let mut filters = vec![Span::styled("Filter: ", palette.dimmed())];
    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        let style = if filter == state.filter {
            palette.selected()
        } else {
            palette.normal()
        };
        filters.push(Span::styled(format!(" {} {} ", i + 1, filter.label()), style));
        filters.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(filters)).style(palette.normal()), rows[1]);

    let mut sort = vec![Span::styled("Sort by (s): ", palette.dimmed())];
    for field in SortField::ALL {
        let style = if field == state.sort_field {
            palette.highlighted()
        } else {
            palette.dimmed()
        };
        sort.push(Span::styled(field.label(), style));
        sort.push(Span::raw("  "));
    }
    sort.push(Span::styled("Order (o): ", palette.dimmed()));
    sort.push(Span::styled(state.sort_order.label(), palette.bold()));
    frame.render_widget(Paragraph::new(Line::from(sort)).style(palette.normal()), rows[2]);
}
