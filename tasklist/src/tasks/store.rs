//! The task store: state container, actions and the reducer.
//!
//! [`reduce`] is a pure transition from one [`TaskState`] to the next. The
//! [`Store`] wraps the current state together with a [`Clock`] and applies
//! actions one at a time; nothing else ever writes to the state.

use tasklist_proto::task::{Task, TaskId, TaskPatch};
use tasklist_proto::view::{Filter, SortField, SortOrder};

use super::clock::{Clock, SystemClock};
use super::view::{ViewOptions, visible_tasks};

/// Complete task and view state held by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskState {
    /// All tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Status filter applied to the visible list.
    pub filter: Filter,
    /// Case-insensitive search text. Stored verbatim.
    pub search_query: String,
    /// Key the visible list is sorted by.
    pub sort_field: SortField,
    /// Direction of the sort.
    pub sort_order: SortOrder,
}

impl TaskState {
    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|t| &t.id == id)
    }
}

/// A named transition request with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new task. Ignored if the trimmed title is empty.
    AddTask {
        /// Raw title; trimmed before storing.
        title: String,
        /// Optional description; trimmed, and dropped if empty.
        description: Option<String>,
        /// Caller-supplied id. A fresh one is generated when `None`.
        id: Option<TaskId>,
    },
    /// Flip the completion flag of a task.
    ToggleTask(TaskId),
    /// Remove a task.
    DeleteTask(TaskId),
    /// Merge a partial update into a task.
    EditTask {
        /// Task to edit.
        id: TaskId,
        /// Fields to replace. Applied verbatim.
        patch: TaskPatch,
    },
    /// Replace the status filter.
    SetFilter(Filter),
    /// Replace the search query (not trimmed).
    SetSearchQuery(String),
    /// Replace the sort field.
    SetSortField(SortField),
    /// Replace the sort order.
    SetSortOrder(SortOrder),
    /// Remove every completed task.
    ClearCompleted,
    /// Complete every task, or un-complete all of them if all are done.
    ToggleAll,
    /// Return to the default state.
    ResetStore,
}

impl Action {
    /// Convenience constructor for an [`Action::AddTask`] with a generated id.
    pub fn add(title: impl Into<String>, description: Option<String>) -> Self {
        Self::AddTask {
            title: title.into(),
            description,
            id: None,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::ToggleTask(_) => "toggle_task",
            Self::DeleteTask(_) => "delete_task",
            Self::EditTask { .. } => "edit_task",
            Self::SetFilter(_) => "set_filter",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::SetSortField(_) => "set_sort_field",
            Self::SetSortOrder(_) => "set_sort_order",
            Self::ClearCompleted => "clear_completed",
            Self::ToggleAll => "toggle_all",
            Self::ResetStore => "reset_store",
        }
    }
}

/// Applies `action` to `state`, stamping any changed task with `now_ms`.
///
/// Total over every action: unknown ids, empty titles and duplicate
/// caller-supplied ids all leave the state unchanged.
#[must_use]
pub fn reduce(mut state: TaskState, action: Action, now_ms: u64) -> TaskState {
    match action {
        Action::AddTask {
            title,
            description,
            id,
        } => {
            let title = title.trim();
            if title.is_empty() {
                return state;
            }
            let id = id.unwrap_or_default();
            if state.contains(&id) {
                tracing::warn!(task_id = %id, "duplicate task id ignored");
                return state;
            }
            let description = description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
            state
                .tasks
                .push(Task::new(id, title.to_string(), description, now_ms));
        }
        Action::ToggleTask(id) => {
            if let Some(task) = state.get_mut(&id) {
                task.completed = !task.completed;
                task.updated_at = Some(now_ms);
            }
        }
        Action::DeleteTask(id) => {
            state.tasks.retain(|t| t.id != id);
        }
        Action::EditTask { id, patch } => {
            if let Some(task) = state.get_mut(&id) {
                if let Some(title) = patch.title {
                    task.title = title;
                }
                if let Some(description) = patch.description {
                    task.description = description;
                }
                if let Some(completed) = patch.completed {
                    task.completed = completed;
                }
                task.updated_at = Some(now_ms);
            }
        }
        Action::SetFilter(filter) => state.filter = filter,
        Action::SetSearchQuery(query) => state.search_query = query,
        Action::SetSortField(field) => state.sort_field = field,
        Action::SetSortOrder(order) => state.sort_order = order,
        Action::ClearCompleted => state.tasks.retain(|t| !t.completed),
        Action::ToggleAll => {
            let all_completed = state.tasks.iter().all(|t| t.completed);
            for task in &mut state.tasks {
                task.completed = !all_completed;
                task.updated_at = Some(now_ms);
            }
        }
        Action::ResetStore => return TaskState::default(),
    }
    state
}

/// Owns the current [`TaskState`] and applies actions to it.
pub struct Store<C = SystemClock> {
    state: TaskState,
    clock: C,
    view: ViewOptions,
}

impl Store<SystemClock> {
    /// Creates an empty store using wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Store<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Store<C> {
    /// Creates an empty store with the given time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: TaskState::default(),
            clock,
            view: ViewOptions::default(),
        }
    }

    /// Sets the options used when deriving the visible list.
    #[must_use]
    pub fn with_view_options(mut self, view: ViewOptions) -> Self {
        self.view = view;
        self
    }

    /// Applies an action, replacing the current state with the result.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let now = self.clock.now_ms();
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action, now);
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &TaskState {
        &self.state
    }

    /// The options used for [`visible_tasks`](Self::visible_tasks).
    #[must_use]
    pub const fn view_options(&self) -> &ViewOptions {
        &self.view
    }

    /// The filtered, searched and sorted task list for rendering.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible_tasks(&self.state, &self.view)
    }
}
