//! Derived view of the task state.
//!
//! [`visible_tasks`] runs the status filter, then the search filter, then a
//! stable sort. It borrows the state and never modifies it, so it is re-run
//! on every render.

use std::cmp::Ordering;
use std::fmt;

use tasklist_proto::task::Task;
use tasklist_proto::view::{Filter, SortField, SortOrder};

use super::store::TaskState;

/// Options that change how the visible list is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Also match the search query against task descriptions.
    pub search_includes_description: bool,
}

/// Computes the ordered list of tasks the UI should show.
#[must_use]
pub fn visible_tasks<'a>(state: &'a TaskState, options: &ViewOptions) -> Vec<&'a Task> {
    let query = state.search_query.to_lowercase();
    let mut tasks: Vec<&Task> = state
        .tasks
        .iter()
        .filter(|t| state.filter.matches(t.completed))
        .filter(|t| matches_search(t, &query, options))
        .collect();

    // `sort_by` is stable, and reversing the comparator keeps equal keys in
    // insertion order for descending sorts too.
    tasks.sort_by(|a, b| {
        let ordering = compare(a, b, state.sort_field);
        match state.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    tasks
}

/// Returns `true` if `task` matches an already-lowercased query.
fn matches_search(task: &Task, query: &str, options: &ViewOptions) -> bool {
    if query.is_empty() {
        return true;
    }
    if task.title.to_lowercase().contains(query) {
        return true;
    }
    options.search_includes_description
        && task
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

fn compare(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title)),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Completed => a.completed.cmp(&b.completed),
    }
}

/// Count of completed tasks out of all tasks, ignoring filter and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSummary {
    /// Number of completed tasks.
    pub completed: usize,
    /// Total number of tasks.
    pub total: usize,
}

impl fmt::Display for CompletionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} completed", self.completed, self.total)
    }
}

/// Summarises completion over the whole task collection.
#[must_use]
pub fn completion_summary(state: &TaskState) -> CompletionSummary {
    CompletionSummary {
        completed: state.tasks.iter().filter(|t| t.completed).count(),
        total: state.tasks.len(),
    }
}

/// `true` when there is at least one task and every task is completed.
#[must_use]
pub fn all_completed(state: &TaskState) -> bool {
    !state.tasks.is_empty() && state.tasks.iter().all(|t| t.completed)
}

/// Whether the "no results" indicator should show: a non-empty query
/// that matched nothing.
#[must_use]
pub fn shows_no_results(state: &TaskState, visible: &[&Task]) -> bool {
    !state.search_query.is_empty() && visible.is_empty()
}

/// Hint shown when the visible list is empty and no search is active.
#[must_use]
pub const fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::Active => "No active tasks. Add a new task or mark some as active",
        Filter::Completed => "No completed tasks yet. Complete some tasks to see them here",
        Filter::All => "No tasks yet. Add your first task to get started",
    }
}
