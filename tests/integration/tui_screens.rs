//! Integration tests for screen rendering.
//!
//! Draws each route into a ratatui `TestBackend` and checks the text that
//! reaches the terminal buffer.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tasklist::app::App;
use tasklist::router::Route;
use tasklist::tasks::Action;
use tasklist::ui;
use tasklist::ui::theme::Theme;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

/// Render `app` and return the screen as one string per row.
fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn todos_app() -> App {
    let mut app = App::new();
    app.router.navigate(Route::Todos);
    app
}

#[test]
fn home_screen_offers_login_and_signup() {
    let screen = render(&App::new());
    assert!(screen.contains("Login"));
    assert!(screen.contains("Sign up"));
    assert!(screen.contains("Tasklist v"));
}

#[test]
fn login_screen_shows_fields_and_errors() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Email"));
    assert!(screen.contains("Password"));
    assert!(screen.contains("Invalid email address"));
    assert!(screen.contains("Password must be at least 6 characters"));
}

#[test]
fn login_screen_masks_password() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Tab);
    for c in "hunter22".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(!screen.contains("hunter22"));
    assert!(screen.contains("••••••••"));
}

#[test]
fn loading_form_shows_progress() {
    let mut app = App::new();
    app.router.navigate(Route::Signup);
    app.signup.loading = true;
    let screen = render(&app);
    assert!(screen.contains("Creating account..."));
}

#[test]
fn empty_todos_shows_filter_hint() {
    let mut app = todos_app();
    assert!(render(&app).contains("No tasks yet. Add your first task to get started"));

    press(&mut app, KeyCode::Char('3'));
    assert!(render(&app).contains("No completed tasks yet"));
}

#[test]
fn todos_list_shows_tasks_and_summary() {
    let mut app = todos_app();
    app.store.dispatch(Action::add("Buy milk", None));
    app.store.dispatch(Action::add("Walk dog", None));
    press(&mut app, KeyCode::Char(' '));

    let screen = render(&app);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Walk dog"));
    assert!(screen.contains("1 of 2 completed"));
    assert!(screen.contains("[✓]"));
}

#[test]
fn unmatched_search_shows_no_results_message() {
    let mut app = todos_app();
    app.store.dispatch(Action::add("Buy milk", None));
    press(&mut app, KeyCode::Char('/'));
    for c in "xyz".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("No todos found matching your search"));
    assert!(!screen.contains("Buy milk"));
}

#[test]
fn inline_edit_error_is_rendered() {
    let mut app = todos_app();
    app.store.dispatch(Action::add("X", None));
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);
    assert!(render(&app).contains("Title cannot be empty"));
}

#[test]
fn sort_controls_show_current_order() {
    let mut app = todos_app();
    press(&mut app, KeyCode::Char('o'));
    let screen = render(&app);
    assert!(screen.contains("Date Created"));
    assert!(screen.contains("Descending"));
}

#[test]
fn dark_theme_renders() {
    let mut app = todos_app();
    app.theme = Theme::Dark;
    app.store.dispatch(Action::add("Night task", None));
    assert!(render(&app).contains("Night task"));
}
