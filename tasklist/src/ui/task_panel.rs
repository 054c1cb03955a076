//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tasklist_proto::task::Task;

use super::input::display_text;
use super::theme::Palette;
use crate::app::{App, EditState, TodoFocus};
use crate::tasks::{completion_summary, empty_message, shows_no_results};

/// Message shown when a search matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No todos found matching your search";

/// Render the visible tasks, or the appropriate empty-state hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let state = app.store.state();
    let visible = app.visible_tasks();
    let is_focused = matches!(
        app.todos.focus,
        TodoFocus::List | TodoFocus::EditTitle | TodoFocus::EditDescription
    );

    let block = Block::default()
        .title(format!("Todos ({})", completion_summary(state)))
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused));

    if visible.is_empty() {
        let hint = if shows_no_results(state, &visible) {
            NO_RESULTS_MESSAGE
        } else {
            empty_message(state.filter)
        };
        let paragraph = Paragraph::new(Span::styled(hint, palette.dimmed()))
            .wrap(Wrap { trim: true })
            .style(palette.normal())
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| match &app.todos.editing {
            Some(edit) if edit.id == task.id => edit_item(edit, app.todos.focus, palette),
            _ => task_item(
                task,
                app.todos.expanded.as_ref() == Some(&task.id),
                &app.timestamp_format,
                palette,
            ),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(palette.normal())
        .highlight_style(if is_focused {
            palette.highlighted()
        } else {
            palette.normal()
        })
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(app.todos.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn task_item<'a>(task: &'a Task, expanded: bool, timestamp_format: &str, palette: &Palette) -> ListItem<'a> {
    let (checkbox, checkbox_style, title_style) = if task.completed {
        ("[✓]", palette.success(), palette.done())
    } else {
        ("[ ]", palette.normal(), palette.normal())
    };

    let mut meta = format!(
        "created {}",
        format_timestamp_ms(task.created_at, timestamp_format)
    );
    if let Some(updated) = task.updated_at {
        meta.push_str(" · updated ");
        meta.push_str(&format_timestamp_ms(updated, timestamp_format));
    }

    let mut title = vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(task.title.as_str(), title_style),
    ];
    if task.description.is_some() && !expanded {
        title.push(Span::styled(" …", palette.dimmed()));
    }

    let mut lines = vec![Line::from(title)];
    if let Some(description) = task.description.as_ref().filter(|_| expanded) {
        lines.push(Line::from(Span::styled(
            format!("    {description}"),
            palette.normal(),
        )));
    }
    lines.push(Line::from(Span::styled(format!("    {meta}"), palette.dimmed())));
    ListItem::new(lines)
}

fn edit_item(edit: &EditState, focus: TodoFocus, palette: &Palette) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Title: ", palette.dimmed()),
            Span::styled(
                display_text(&edit.title, focus == TodoFocus::EditTitle, false),
                palette.normal(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Description: ", palette.dimmed()),
            Span::styled(
                display_text(&edit.description, focus == TodoFocus::EditDescription, false),
                palette.normal(),
            ),
        ]),
    ];
    if let Some(error) = &edit.error {
        lines.push(Line::from(Span::styled(error.clone(), palette.error())));
    }
    ListItem::new(lines)
}

/// Format a unix-millisecond timestamp in local time.
///
/// Returns `"?"` if the timestamp is out of range or `format` contains an
/// invalid specifier.
#[must_use]
pub fn format_timestamp_ms(ms: u64, format: &str) -> String {
    use std::fmt::Write;

    use chrono::{Local, TimeZone};
    let secs = (ms / 1000).cast_signed();
    let nsecs = u32::try_from((ms % 1000) * 1_000_000).unwrap_or(0);
    let chrono::LocalResult::Single(dt) = Local.timestamp_opt(secs, nsecs) else {
        return "?".to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => "?".to_string(),
    }
}
