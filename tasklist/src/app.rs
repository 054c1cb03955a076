//! Application state and event handling.
//!
//! [`App`] is the view collaborator around the task [`Store`]: it keeps
//! per-screen input state (form fields, focus, selection), turns key
//! presses into store actions, and produces [`AuthCommand`]s for the auth
//! worker. It never holds task data of its own.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_proto::task::{MAX_TASK_TITLE_LENGTH, Task, TaskId, TaskPatch};
use tasklist_proto::view::Filter;

use crate::auth::validation::{validate_login, validate_signup, validate_title};
use crate::auth::{AuthCommand, AuthEvent, FieldErrors, FormField, InMemorySession};
use crate::config::ClientConfig;
use crate::router::{Route, Router};
use crate::tasks::{Action, Store, controls};
use crate::ui::theme::Theme;

/// Shown when the auth worker cannot take a request.
pub const AUTH_UNAVAILABLE_MESSAGE: &str = "Authentication service unavailable";

/// Single-line text input with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// An input pre-filled with `value`, cursor at the end.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Byte offset of the cursor.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    pub fn enter_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    /// Apply an editing key. Returns `true` if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.enter_char(c);
                true
            }
            KeyCode::Backspace => {
                let had_text = self.cursor > 0;
                self.delete_char();
                had_text
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                false
            }
            _ => false,
        }
    }
}

/// Which authentication form this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormKind {
    /// Email + password.
    Login,
    /// Name + email + password + confirmation.
    Signup,
}

/// One labelled field of an auth form.
#[derive(Debug, Clone)]
pub struct FormInput {
    /// Which field this is.
    pub field: FormField,
    /// Label shown above the input.
    pub label: &'static str,
    /// Mask the value when rendering.
    pub secret: bool,
    /// The text being edited.
    pub input: TextInput,
}

impl FormInput {
    fn new(field: FormField, label: &'static str, secret: bool) -> Self {
        Self {
            field,
            label,
            secret,
            input: TextInput::default(),
        }
    }
}

/// State of the login or signup form.
#[derive(Debug, Clone)]
pub struct AuthForm {
    /// Login or signup.
    pub kind: AuthFormKind,
    /// Fields in tab order.
    pub fields: Vec<FormInput>,
    /// Index of the focused field.
    pub focus: usize,
    /// Inline per-field errors from the last submit.
    pub errors: FieldErrors,
    /// Message from a failed request.
    pub error: Option<String>,
    /// A request is in flight.
    pub loading: bool,
}

impl AuthForm {
    /// An empty login form.
    #[must_use]
    pub fn login() -> Self {
        Self::with_fields(
            AuthFormKind::Login,
            vec![
                FormInput::new(FormField::Email, "Email", false),
                FormInput::new(FormField::Password, "Password", true),
            ],
        )
    }

    /// An empty signup form.
    #[must_use]
    pub fn signup() -> Self {
        Self::with_fields(
            AuthFormKind::Signup,
            vec![
                FormInput::new(FormField::Name, "Name", false),
                FormInput::new(FormField::Email, "Email", false),
                FormInput::new(FormField::Password, "Password", true),
                FormInput::new(FormField::ConfirmPassword, "Confirm Password", true),
            ],
        )
    }

    fn with_fields(kind: AuthFormKind, fields: Vec<FormInput>) -> Self {
        Self {
            kind,
            fields,
            focus: 0,
            errors: FieldErrors::default(),
            error: None,
            loading: false,
        }
    }

    /// Current text of `field`, or `""` if the form has no such field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map_or("", |f| f.input.value())
    }

    /// Mutable access to a field's input.
    pub fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        self.fields
            .iter_mut()
            .find(|f| f.field == field)
            .map(|f| &mut f.input)
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Validate and build the request for this form.
    ///
    /// Returns `None` (with `errors` populated) if validation fails, or if a
    /// request is already in flight.
    pub fn submit(&mut self) -> Option<AuthCommand> {
        if self.loading {
            return None;
        }
        let email = self.value(FormField::Email).to_string();
        let password = self.value(FormField::Password).to_string();
        let validated = match self.kind {
            AuthFormKind::Login => validate_login(&email, &password),
            AuthFormKind::Signup => validate_signup(
                self.value(FormField::Name),
                &email,
                &password,
                self.value(FormField::ConfirmPassword),
            ),
        };
        if let Err(errors) = validated {
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::default();
        self.error = None;
        self.loading = true;
        Some(match self.kind {
            AuthFormKind::Login => AuthCommand::Login { email, password },
            AuthFormKind::Signup => AuthCommand::Signup {
                name: self.value(FormField::Name).to_string(),
                email,
                password,
            },
        })
    }

    /// Clear the in-flight flag and show `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Empty every field and message.
    pub fn reset(&mut self) {
        for f in &mut self.fields {
            f.input.clear();
        }
        self.focus = 0;
        self.errors = FieldErrors::default();
        self.error = None;
        self.loading = false;
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AuthCommand> {
        match key.code {
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ => {
                let focused = &mut self.fields[self.focus];
                if focused.input.handle_key(key) {
                    self.errors.clear_field(focused.field);
                }
            }
        }
        None
    }
}

/// Which part of the todos screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFocus {
    /// The task list (default).
    List,
    /// Title of the new-task form.
    NewTitle,
    /// Description of the new-task form.
    NewDescription,
    /// The search box.
    Search,
    /// Title of the task being edited.
    EditTitle,
    /// Description of the task being edited.
    EditDescription,
}

/// Inline edit of one task.
#[derive(Debug, Clone)]
pub struct EditState {
    /// The task being edited.
    pub id: TaskId,
    /// Edited title.
    pub title: TextInput,
    /// Edited description.
    pub description: TextInput,
    /// Validation error for the title.
    pub error: Option<String>,
}

/// Input state of the todos screen.
#[derive(Debug, Clone)]
pub struct TodosScreen {
    /// Focused part of the screen.
    pub focus: TodoFocus,
    /// Index into the visible list.
    pub selected: usize,
    /// New-task title.
    pub new_title: TextInput,
    /// New-task description.
    pub new_description: TextInput,
    /// Validation error for the new-task title.
    pub new_error: Option<String>,
    /// Search box contents. Mirrors the store's query.
    pub search: TextInput,
    /// The task being edited, if any.
    pub editing: Option<EditState>,
    /// The task whose description is expanded.
    pub expanded: Option<TaskId>,
}

impl Default for TodosScreen {
    fn default() -> Self {
        Self {
            focus: TodoFocus::List,
            selected: 0,
            new_title: TextInput::default(),
            new_description: TextInput::default(),
            new_error: None,
            search: TextInput::default(),
            editing: None,
            expanded: None,
        }
    }
}

/// Main application state.
pub struct App {
    /// The task store.
    pub store: Store,
    /// Current screen.
    pub router: Router,
    /// Session storage shared with the auth worker.
    pub session: Arc<InMemorySession>,
    /// Colour theme.
    pub theme: Theme,
    /// Login form state.
    pub login: AuthForm,
    /// Signup form state.
    pub signup: AuthForm,
    /// Todos screen state.
    pub todos: TodosScreen,
    /// Maximum task title length in characters.
    pub max_title_len: usize,
    /// chrono format used for task timestamps.
    pub timestamp_format: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application on the home screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            router: Router::default(),
            session: Arc::new(InMemorySession::new()),
            theme: Theme::default(),
            login: AuthForm::login(),
            signup: AuthForm::signup(),
            todos: TodosScreen::default(),
            max_title_len: MAX_TASK_TITLE_LENGTH,
            timestamp_format: "%Y-%m-%d %H:%M".to_string(),
            should_quit: false,
        }
    }

    /// Create an application configured from `config`.
    #[must_use]
    pub fn with_config(config: &ClientConfig) -> Self {
        let mut app = Self::new();
        app.store = Store::new().with_view_options(config.view_options());
        app.theme = config.theme;
        app.max_title_len = config.max_title_len;
        app.timestamp_format.clone_from(&config.timestamp_format);
        app
    }

    /// Use `session` instead of a private session store.
    #[must_use]
    pub fn with_session(mut self, session: Arc<InMemorySession>) -> Self {
        self.session = session;
        self
    }

    /// The visible tasks, in display order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.visible_tasks()
    }

    /// The task under the list cursor.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.todos.selected).copied()
    }

    /// Handle a key event.
    ///
    /// Returns `Some` when the key submits an auth form and the request
    /// must be sent to the auth worker.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<AuthCommand> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match self.router.current() {
            Route::Home => {
                self.handle_home_key(key);
                None
            }
            Route::Login | Route::Signup => self.handle_auth_key(key),
            Route::Todos => {
                self.handle_todos_key(key);
                None
            }
        }
    }

    /// Apply a result from the auth worker.
    pub fn apply_auth_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::LoggedIn { .. } => {
                self.login.reset();
                self.router.navigate(Route::Todos);
            }
            AuthEvent::SignedUp { .. } => {
                self.signup.reset();
                self.router.navigate(Route::Todos);
            }
            AuthEvent::LoginFailed(message) => self.login.fail(message),
            AuthEvent::SignupFailed(message) => self.signup.fail(message),
        }
    }

    /// The auth worker could not accept a request.
    pub fn auth_unavailable(&mut self) {
        match self.router.current() {
            Route::Signup => self.signup.fail(AUTH_UNAVAILABLE_MESSAGE),
            _ => self.login.fail(AUTH_UNAVAILABLE_MESSAGE),
        }
    }

    /// Sign out and return to the login screen.
    pub fn logout(&mut self) {
        controls::logout(&mut self.store, &self.session, &mut self.router);
        self.todos = TodosScreen::default();
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') => self.router.navigate(Route::Login),
            KeyCode::Char('s') => self.router.navigate(Route::Signup),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) -> Option<AuthCommand> {
        let on_login = self.router.current() == Route::Login;
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                if self.router.back().is_none() {
                    self.router.navigate(Route::Home);
                }
                None
            }
            (KeyCode::Char('n'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.router
                    .navigate(if on_login { Route::Signup } else { Route::Login });
                None
            }
            _ if on_login => self.login.handle_key(key),
            _ => self.signup.handle_key(key),
        }
    }

    fn handle_todos_key(&mut self, key: KeyEvent) {
        match self.todos.focus {
            TodoFocus::List => self.handle_list_key(key),
            TodoFocus::NewTitle | TodoFocus::NewDescription => self.handle_new_task_key(key),
            TodoFocus::Search => self.handle_search_key(key),
            TodoFocus::EditTitle | TodoFocus::EditDescription => self.handle_edit_key(key),
        }
        self.clamp_selection();
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.todos.selected = self.todos.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => self.todos.selected += 1,
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.store.dispatch(Action::ToggleTask(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.store.dispatch(Action::DeleteTask(id));
                }
            }
            KeyCode::Char('e') => self.start_editing(),
            KeyCode::Char('v') => {
                let id = self.selected_task().map(|t| t.id.clone());
                self.todos.expanded = if self.todos.expanded == id { None } else { id };
            }
            KeyCode::Char('a' | 'n') => self.todos.focus = TodoFocus::NewTitle,
            KeyCode::Char('/') => self.todos.focus = TodoFocus::Search,
            KeyCode::Char('1') => controls::set_filter(&mut self.store, Filter::All),
            KeyCode::Char('2') => controls::set_filter(&mut self.store, Filter::Active),
            KeyCode::Char('3') => controls::set_filter(&mut self.store, Filter::Completed),
            KeyCode::Char('f') => {
                let next = match self.store.state().filter {
                    Filter::All => Filter::Active,
                    Filter::Active => Filter::Completed,
                    Filter::Completed => Filter::All,
                };
                controls::set_filter(&mut self.store, next);
            }
            KeyCode::Char('s') => {
                let next = self.store.state().sort_field.next();
                controls::set_sort_field(&mut self.store, next);
            }
            KeyCode::Char('o') => {
                let next = self.store.state().sort_order.flipped();
                controls::set_sort_order(&mut self.store, next);
            }
            KeyCode::Char('A') => self.store.dispatch(Action::ToggleAll),
            KeyCode::Char('C') => self.store.dispatch(Action::ClearCompleted),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_new_task_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_new_task();
            return;
        }
        let todos = &mut self.todos;
        match key.code {
            KeyCode::Esc => {
                todos.focus = TodoFocus::List;
                todos.new_error = None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                todos.focus = if todos.focus == TodoFocus::NewTitle {
                    TodoFocus::NewDescription
                } else {
                    TodoFocus::NewTitle
                };
            }
            _ => {
                if todos.focus == TodoFocus::NewTitle {
                    if todos.new_title.handle_key(key) {
                        todos.new_error = None;
                    }
                } else {
                    todos.new_description.handle_key(key);
                }
            }
        }
    }

    /// Validate the new-task form and dispatch `AddTask`.
    fn submit_new_task(&mut self) {
        let todos = &mut self.todos;
        match validate_title(todos.new_title.value(), self.max_title_len) {
            Ok(title) => {
                let description = Some(todos.new_description.value().to_string());
                self.store.dispatch(Action::add(title, description));
                todos.new_title.clear();
                todos.new_description.clear();
                todos.new_error = None;
                todos.focus = TodoFocus::NewTitle;
            }
            Err(errors) => {
                todos.new_error = errors.get(FormField::Title).map(str::to_string);
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.todos.focus = TodoFocus::List,
            _ => {
                if self.todos.search.handle_key(key) {
                    let query = self.todos.search.value().to_string();
                    controls::set_search(&mut self.store, query);
                    self.todos.selected = 0;
                }
            }
        }
    }

    fn start_editing(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let edit = EditState {
            id: task.id.clone(),
            title: TextInput::with_value(task.title.clone()),
            description: TextInput::with_value(task.description.clone().unwrap_or_default()),
            error: None,
        };
        self.todos.editing = Some(edit);
        self.todos.focus = TodoFocus::EditTitle;
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(edit) = self.todos.editing.as_mut() else {
            self.todos.focus = TodoFocus::List;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.todos.editing = None;
                self.todos.focus = TodoFocus::List;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.todos.focus = if self.todos.focus == TodoFocus::EditTitle {
                    TodoFocus::EditDescription
                } else {
                    TodoFocus::EditTitle
                };
            }
            KeyCode::Enter => match validate_title(edit.title.value(), self.max_title_len) {
                Ok(title) => {
                    let description = edit.description.value().trim();
                    let patch = TaskPatch {
                        title: Some(title),
                        description: Some((!description.is_empty()).then(|| description.to_string())),
                        completed: None,
                    };
                    let id = edit.id.clone();
                    self.store.dispatch(Action::EditTask { id, patch });
                    self.todos.editing = None;
                    self.todos.focus = TodoFocus::List;
                }
                Err(errors) => {
                    edit.error = errors.get(FormField::Title).map(str::to_string);
                }
            },
            _ => {
                if self.todos.focus == TodoFocus::EditTitle {
                    if edit.title.handle_key(key) {
                        edit.error = None;
                    }
                } else {
                    edit.description.handle_key(key);
                }
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.todos.selected = self.todos.selected.min(len.saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
