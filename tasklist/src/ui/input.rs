//! Bordered single-line input box.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::Palette;
use crate::app::TextInput;

/// How an input box should be drawn.
#[derive(Debug, Clone, Copy)]
pub struct InputBox<'a> {
    /// Border title.
    pub title: &'a str,
    /// Dimmed text shown when empty and unfocused.
    pub placeholder: &'a str,
    /// Draw the cursor and highlight the border.
    pub focused: bool,
    /// Mask every character.
    pub secret: bool,
}

/// Text to display for `input`, with a block cursor when focused.
#[must_use]
pub fn display_text(input: &TextInput, focused: bool, secret: bool) -> String {
    let mut text: String = if secret {
        "•".repeat(input.value().chars().count())
    } else {
        input.value().to_string()
    };
    if focused {
        let idx = text
            .char_indices()
            .nth(input.cursor())
            .map_or(text.len(), |(i, _)| i);
        text.insert(idx, '█');
    }
    text
}

/// Render `input` as a bordered box.
pub fn render(frame: &mut Frame, area: Rect, input: &TextInput, spec: InputBox<'_>, palette: &Palette) {
    let line = if input.value().is_empty() && !spec.focused {
        Line::from(Span::styled(spec.placeholder, palette.dimmed()))
    } else {
        Line::from(Span::styled(
            display_text(input, spec.focused, spec.secret),
            palette.normal(),
        ))
    };

    let block = Block::default()
        .title(spec.title)
        .borders(Borders::ALL)
        .border_style(palette.border(spec.focused));

    frame.render_widget(Paragraph::new(line).style(palette.normal()).block(block), area);
}
