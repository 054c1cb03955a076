//! Task record types for `Tasklist`.
//!
//! A [`Task`] is the unit held by the task store. Its identifier and
//! creation time are fixed at construction; every other field is changed
//! only through store transitions.

use uuid::Uuid;

/// Maximum allowed task title length in characters.
pub const MAX_TASK_TITLE_LENGTH: usize = 256;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task identifier, immutable once assigned.
    pub id: TaskId,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional free-form description. `None` means no description.
    pub description: Option<String>,
    /// Whether the task has been completed.
    pub completed: bool,
    /// When the task was created (milliseconds since epoch).
    pub created_at: u64,
    /// When the task was last changed (milliseconds since epoch), if ever.
    pub updated_at: Option<u64>,
}

impl Task {
    /// Creates a fresh, incomplete task.
    ///
    /// The caller is responsible for having trimmed and validated `title`.
    #[must_use]
    pub const fn new(
        id: TaskId,
        title: String,
        description: Option<String>,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at,
            updated_at: None,
        }
    }
}

/// A partial update to a task's editable fields.
///
/// `None` leaves a field untouched. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description (`Some(None)` removes it).
    pub description: Option<Option<String>>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that replaces only the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if the patch carries no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}
