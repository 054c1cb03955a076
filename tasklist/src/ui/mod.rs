//! Terminal UI rendering.

pub mod auth_form;
pub mod controls_bar;
pub mod home;
pub mod input;
pub mod status_bar;
pub mod task_panel;
pub mod theme;
pub mod todos;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::app::App;
use crate::router::Route;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    frame.render_widget(Block::default().style(palette.normal()), frame.area());

    // Content on top, status bar at the bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let content_area = main_chunks[0];
    let status_area = main_chunks[1];

    match app.router.current() {
        Route::Home => home::render(frame, content_area, app),
        Route::Login => auth_form::render(frame, content_area, &app.login, palette),
        Route::Signup => auth_form::render(frame, content_area, &app.signup, palette),
        Route::Todos => todos::render(frame, content_area, app),
    }

    status_bar::render(frame, status_area, app);
}
