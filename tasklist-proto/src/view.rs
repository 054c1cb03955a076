//! View-state enums: status filter, sort field and sort order.
//!
//! Each enum has a stable lowercase/camelCase `Display` name, used in logs,
//! and a capitalized label for the UI.

use std::fmt;

/// Which tasks the status filter keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Only tasks that are not completed.
    Active,
    /// Only completed tasks.
    Completed,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns `true` if a task with the given completion flag passes.
    #[must_use]
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    /// Capitalized label for buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// The key the visible list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Lexicographic by title.
    Title,
    /// Chronological by creation time.
    #[default]
    CreatedAt,
    /// Incomplete before complete.
    Completed,
}

impl SortField {
    /// All sort fields in selector order.
    pub const ALL: [Self; 3] = [Self::Title, Self::CreatedAt, Self::Completed];

    /// Human-readable label for the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::CreatedAt => "Date Created",
            Self::Completed => "Completion Status",
        }
    }

    /// The next field in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::CreatedAt,
            Self::CreatedAt => Self::Completed,
            Self::Completed => Self::Title,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::CreatedAt => write!(f, "createdAt"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Direction applied on top of the sort field comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Comparator as-is.
    #[default]
    Ascending,
    /// Comparator reversed.
    Descending,
}

impl SortOrder {
    /// Human-readable label for the order selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}
