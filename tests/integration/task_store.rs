//! Integration tests for the task store and the derived view pipeline.
//!
//! Drives a `Store` with a manual clock through realistic sequences of
//! actions and checks both the stored state and the visible list.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use tasklist::tasks::{
    Action, ManualClock, Store, TaskState, ViewOptions, all_completed, completion_summary,
    controls, empty_message, reduce, shows_no_results, visible_tasks,
};
use tasklist_proto::task::{TaskId, TaskPatch};
use tasklist_proto::view::{Filter, SortField, SortOrder};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates a store whose clock starts at 1000 ms and is shared with the test.
fn make_store() -> (Store<Arc<ManualClock>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000));
    (Store::with_clock(Arc::clone(&clock)), clock)
}

/// Adds a task and returns its id.
fn add(store: &mut Store<Arc<ManualClock>>, title: &str) -> TaskId {
    let id = TaskId::new();
    store.dispatch(Action::AddTask {
        title: title.to_string(),
        description: None,
        id: Some(id.clone()),
    });
    id
}

fn visible_titles(store: &Store<Arc<ManualClock>>) -> Vec<String> {
    store
        .visible_tasks()
        .into_iter()
        .map(|t| t.title.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn title_sort_ascending_reorders_insertion() {
    let (mut store, _clock) = make_store();
    add(&mut store, "B");
    let a = add(&mut store, "A");
    store.dispatch(Action::ToggleTask(a));

    controls::set_sort_field(&mut store, SortField::Title);
    controls::set_sort_order(&mut store, SortOrder::Ascending);

    assert_eq!(visible_titles(&store), ["A", "B"]);
    // Stored order is untouched.
    assert_eq!(store.state().tasks[0].title, "B");
}

#[test]
fn filters_partition_tasks() {
    let (mut store, clock) = make_store();
    add(&mut store, "open");
    clock.advance(10);
    let done = add(&mut store, "done");
    store.dispatch(Action::ToggleTask(done));

    controls::set_filter(&mut store, Filter::Active);
    assert_eq!(visible_titles(&store), ["open"]);

    controls::set_filter(&mut store, Filter::Completed);
    assert_eq!(visible_titles(&store), ["done"]);

    controls::set_filter(&mut store, Filter::All);
    assert_eq!(visible_titles(&store), ["open", "done"]);
}

#[test]
fn unmatched_search_shows_no_results() {
    let (mut store, _clock) = make_store();
    add(&mut store, "Buy milk");
    controls::set_search(&mut store, "xyz");

    let visible = store.visible_tasks();
    assert!(visible.is_empty());
    assert!(shows_no_results(store.state(), &visible));
}

#[test]
fn empty_store_shows_filter_hint_not_no_results() {
    let (store, _clock) = make_store();
    let visible = store.visible_tasks();
    assert!(!shows_no_results(store.state(), &visible));
    assert_eq!(
        empty_message(store.state().filter),
        "No tasks yet. Add your first task to get started"
    );
}

#[test]
fn store_edit_with_empty_title_applies_verbatim() {
    let (mut store, _clock) = make_store();
    let id = add(&mut store, "Keep me");
    store.dispatch(Action::EditTask {
        id: id.clone(),
        patch: TaskPatch::title(""),
    });
    assert_eq!(store.state().get(&id).unwrap().title, "");
}

#[test]
fn search_is_case_insensitive_and_combines_with_filter() {
    let (mut store, _clock) = make_store();
    add(&mut store, "Buy MILK");
    let oat = add(&mut store, "oat milk latte");
    add(&mut store, "Bread");
    store.dispatch(Action::ToggleTask(oat));

    controls::set_search(&mut store, "Milk");
    assert_eq!(visible_titles(&store), ["Buy MILK", "oat milk latte"]);

    controls::set_filter(&mut store, Filter::Active);
    assert_eq!(visible_titles(&store), ["Buy MILK"]);
}

#[test]
fn description_search_is_opt_in() {
    let clock = Arc::new(ManualClock::new(0));
    let mut store = Store::with_clock(Arc::clone(&clock)).with_view_options(ViewOptions {
        search_includes_description: true,
    });
    store.dispatch(Action::add("Groceries", Some("milk and eggs".to_string())));
    controls::set_search(&mut store, "eggs");
    assert_eq!(store.visible_tasks().len(), 1);

    let plain = reduce(store.state().clone(), Action::SetSearchQuery("eggs".into()), 0);
    assert!(visible_tasks(&plain, &ViewOptions::default()).is_empty());
}

#[test]
fn created_at_sort_descending_is_newest_first() {
    let (mut store, clock) = make_store();
    add(&mut store, "first");
    clock.advance(5);
    add(&mut store, "second");
    clock.advance(5);
    add(&mut store, "third");

    controls::set_sort_order(&mut store, SortOrder::Descending);
    assert_eq!(visible_titles(&store), ["third", "second", "first"]);
}

#[test]
fn completion_sort_keeps_ties_in_insertion_order() {
    let (mut store, _clock) = make_store();
    let a = add(&mut store, "a");
    add(&mut store, "b");
    let c = add(&mut store, "c");
    add(&mut store, "d");
    store.dispatch(Action::ToggleTask(a));
    store.dispatch(Action::ToggleTask(c));

    controls::set_sort_field(&mut store, SortField::Completed);
    assert_eq!(visible_titles(&store), ["b", "d", "a", "c"]);

    controls::set_sort_order(&mut store, SortOrder::Descending);
    assert_eq!(visible_titles(&store), ["a", "c", "b", "d"]);
}

#[test]
fn toggle_stamps_updated_at_from_clock() {
    let (mut store, clock) = make_store();
    let id = add(&mut store, "task");
    assert_eq!(store.state().get(&id).unwrap().created_at, 1_000);
    clock.set(5_000);
    store.dispatch(Action::ToggleTask(id.clone()));
    let task = store.state().get(&id).unwrap();
    assert!(task.completed);
    assert_eq!(task.updated_at, Some(5_000));
}

#[test]
fn toggle_all_then_clear_completed() {
    let (mut store, _clock) = make_store();
    add(&mut store, "one");
    let two = add(&mut store, "two");
    store.dispatch(Action::ToggleTask(two));
    assert!(!all_completed(store.state()));

    store.dispatch(Action::ToggleAll);
    assert!(all_completed(store.state()));
    assert_eq!(completion_summary(store.state()).to_string(), "2 of 2 completed");

    store.dispatch(Action::ToggleAll);
    assert_eq!(completion_summary(store.state()).completed, 0);

    store.dispatch(Action::ToggleAll);
    store.dispatch(Action::ClearCompleted);
    assert!(store.state().tasks.is_empty());
}

#[test]
fn toggle_all_on_mixed_list_does_not_round_trip() {
    let (mut store, _clock) = make_store();
    let done = add(&mut store, "done");
    let open = add(&mut store, "open");
    store.dispatch(Action::ToggleTask(done.clone()));

    store.dispatch(Action::ToggleAll);
    assert!(all_completed(store.state()));

    store.dispatch(Action::ToggleAll);
    assert!(!store.state().get(&done).unwrap().completed);
    assert!(!store.state().get(&open).unwrap().completed);
}

#[test]
fn delete_same_id_twice_is_idempotent() {
    let (mut store, _clock) = make_store();
    let keep = add(&mut store, "keep");
    let gone = add(&mut store, "gone");

    store.dispatch(Action::DeleteTask(gone.clone()));
    let after_first = store.state().clone();
    store.dispatch(Action::DeleteTask(gone));

    assert_eq!(store.state(), &after_first);
    assert_eq!(store.state().tasks.len(), 1);
    assert!(store.state().get(&keep).is_some());
}

#[test]
fn unknown_ids_are_ignored() {
    let (mut store, _clock) = make_store();
    add(&mut store, "only");
    let before = store.state().clone();
    let ghost = TaskId::new();
    store.dispatch(Action::ToggleTask(ghost.clone()));
    store.dispatch(Action::DeleteTask(ghost.clone()));
    store.dispatch(Action::EditTask {
        id: ghost,
        patch: TaskPatch::title("x"),
    });
    assert_eq!(store.state(), &before);
}

#[test]
fn reset_returns_default_state() {
    let (mut store, _clock) = make_store();
    add(&mut store, "one");
    controls::set_filter(&mut store, Filter::Completed);
    controls::set_search(&mut store, "one");
    controls::set_sort_field(&mut store, SortField::Title);
    store.dispatch(Action::ResetStore);
    assert_eq!(store.state(), &TaskState::default());
}
