//! Property-based tests for the task reducer and the view pipeline.
//!
//! Uses proptest to verify:
//! 1. Toggling a task twice restores its completion flag.
//! 2. Filters select exactly the tasks with the matching flag.
//! 3. Search keeps exactly the case-insensitive title matches.
//! 4. Sorting is stable and never adds or drops tasks.
//! 5. `ToggleAll` leaves every task with the same flag, and applying it
//!    twice to a uniform list restores the original flags.
//! 6. Deleting the same id twice equals deleting it once.
//! 7. `ResetStore` always yields the default state.
//! 8. Whitespace-only titles are never added.

use proptest::prelude::*;
use tasklist::tasks::{Action, TaskState, ViewOptions, reduce, visible_tasks};
use tasklist_proto::task::{Task, TaskId};
use tasklist_proto::view::{Filter, SortField, SortOrder};
use uuid::Uuid;

// --- Strategies ---

fn arb_task() -> impl Strategy<Value = Task> {
    (
        any::<u128>(),
        "[a-zA-Z ]{1,12}",
        any::<bool>(),
        0u64..1_000,
    )
        .prop_map(|(id, title, completed, created_at)| {
            let mut task = Task::new(
                TaskId::from_uuid(Uuid::from_u128(id)),
                title,
                None,
                created_at,
            );
            task.completed = completed;
            task
        })
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop::sample::select(Filter::ALL.to_vec())
}

fn arb_sort_field() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
    prop::sample::select(vec![SortOrder::Ascending, SortOrder::Descending])
}

/// A state with unique task ids.
fn arb_state() -> impl Strategy<Value = TaskState> {
    prop::collection::vec(arb_task(), 0..16).prop_map(|mut tasks| {
        let mut seen = std::collections::HashSet::new();
        tasks.retain(|t| seen.insert(t.id.clone()));
        TaskState {
            tasks,
            ..TaskState::default()
        }
    })
}

/// Sort key matching the view's comparator: titles compare case-insensitively
/// first, then by their raw text.
fn key_of(task: &Task, field: SortField) -> (String, String, u64, bool) {
    match field {
        SortField::Title => (task.title.to_lowercase(), task.title.clone(), 0, false),
        SortField::CreatedAt => (String::new(), String::new(), task.created_at, false),
        SortField::Completed => (String::new(), String::new(), 0, task.completed),
    }
}

proptest! {
    #[test]
    fn toggle_twice_restores_flag(state in arb_state(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!state.tasks.is_empty());
        let id = state.tasks[pick.index(state.tasks.len())].id.clone();
        let once = reduce(state.clone(), Action::ToggleTask(id.clone()), 1);
        let twice = reduce(once, Action::ToggleTask(id.clone()), 2);
        prop_assert_eq!(
            twice.get(&id).map(|t| t.completed),
            state.get(&id).map(|t| t.completed)
        );
    }

    #[test]
    fn filter_selects_exactly_matching(state in arb_state(), filter in arb_filter()) {
        let state = reduce(state, Action::SetFilter(filter), 0);
        let visible = visible_tasks(&state, &ViewOptions::default());
        let expected = state.tasks.iter().filter(|t| filter.matches(t.completed)).count();
        prop_assert_eq!(visible.len(), expected);
        prop_assert!(visible.iter().all(|t| filter.matches(t.completed)));
    }

    #[test]
    fn search_keeps_case_insensitive_matches(state in arb_state(), query in "[a-zA-Z]{0,3}") {
        let state = reduce(state, Action::SetSearchQuery(query.clone()), 0);
        let visible = visible_tasks(&state, &ViewOptions::default());
        let needle = query.to_lowercase();
        let expected = state
            .tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(visible.len(), expected);
        prop_assert!(visible.iter().all(|t| t.title.to_lowercase().contains(&needle)));
    }

    #[test]
    fn sort_is_stable_permutation(
        state in arb_state(),
        field in arb_sort_field(),
        order in arb_sort_order(),
    ) {
        let state = reduce(state, Action::SetSortField(field), 0);
        let state = reduce(state, Action::SetSortOrder(order), 0);
        let visible = visible_tasks(&state, &ViewOptions::default());
        prop_assert_eq!(visible.len(), state.tasks.len());

        let position = |t: &Task| state.tasks.iter().position(|s| s.id == t.id);
        for pair in visible.windows(2) {
            let (a, b) = (key_of(pair[0], field), key_of(pair[1], field));
            match order {
                SortOrder::Ascending => prop_assert!(a <= b),
                SortOrder::Descending => prop_assert!(a >= b),
            }
            if a == b {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    #[test]
    fn toggle_all_makes_flags_uniform(state in arb_state()) {
        let all_done = !state.tasks.is_empty() && state.tasks.iter().all(|t| t.completed);
        let next = reduce(state, Action::ToggleAll, 7);
        prop_assert!(next.tasks.iter().all(|t| t.completed == !all_done));
        prop_assert!(next.tasks.iter().all(|t| t.updated_at == Some(7)));
    }

    #[test]
    fn toggle_all_twice_restores_uniform_flags(
        state in arb_state(),
        completed in any::<bool>(),
    ) {
        prop_assume!(!state.tasks.is_empty());
        let mut state = state;
        for task in &mut state.tasks {
            task.completed = completed;
        }
        let once = reduce(state.clone(), Action::ToggleAll, 1);
        let twice = reduce(once, Action::ToggleAll, 2);
        let flags = |s: &TaskState| s.tasks.iter().map(|t| t.completed).collect::<Vec<_>>();
        prop_assert_eq!(flags(&twice), flags(&state));
    }

    #[test]
    fn delete_twice_is_idempotent(state in arb_state(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!state.tasks.is_empty());
        let id = state.tasks[pick.index(state.tasks.len())].id.clone();
        let once = reduce(state.clone(), Action::DeleteTask(id.clone()), 1);
        prop_assert!(once.get(&id).is_none());
        prop_assert_eq!(once.tasks.len(), state.tasks.len() - 1);
        let twice = reduce(once.clone(), Action::DeleteTask(id), 2);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn clear_completed_is_idempotent(state in arb_state()) {
        let once = reduce(state, Action::ClearCompleted, 0);
        prop_assert!(once.tasks.iter().all(|t| !t.completed));
        let twice = reduce(once.clone(), Action::ClearCompleted, 0);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reset_always_yields_default(state in arb_state(), query in ".{0,8}") {
        let state = reduce(state, Action::SetSearchQuery(query), 0);
        prop_assert_eq!(reduce(state, Action::ResetStore, 0), TaskState::default());
    }

    #[test]
    fn blank_titles_are_never_added(state in arb_state(), blank in "[ \t\n]{0,6}") {
        let before = state.clone();
        let after = reduce(state, Action::add(blank, None), 0);
        prop_assert_eq!(after, before);
    }
}
