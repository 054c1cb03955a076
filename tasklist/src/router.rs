//! Screen routing keyed by path.
//!
//! The task store never refers to routes; only the app and the view
//! controls navigate.

use std::collections::VecDeque;
use std::fmt;

/// Number of previous routes kept for [`Router::back`].
pub const MAX_HISTORY: usize = 16;

/// A screen of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page with links to login and signup.
    #[default]
    Home,
    /// Login form.
    Login,
    /// Signup form.
    Signup,
    /// The task list.
    Todos,
}

impl Route {
    /// The path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Todos => "/todos",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the current route and the navigation history.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: VecDeque<Route>,
}

impl Router {
    /// Create a router starting at `start`.
    #[must_use]
    pub const fn new(start: Route) -> Self {
        Self {
            current: start,
            history: VecDeque::new(),
        }
    }

    /// The route currently shown.
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `route`. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::debug!(from = %self.current, to = %route, "navigate");
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(self.current);
        self.current = route;
    }

    /// Jump to `route` and forget the history.
    pub fn reset(&mut self, route: Route) {
        tracing::debug!(from = %self.current, to = %route, "reset");
        self.history.clear();
        self.current = route;
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop_back()?;
        self.current = previous;
        Some(previous)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
