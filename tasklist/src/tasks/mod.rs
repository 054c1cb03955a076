//! Task state management for `Tasklist`.
//!
//! The [`Store`] owns the single authoritative [`TaskState`]. UI code sends
//! [`Action`]s through [`Store::dispatch`] (usually via the thin wrappers in
//! [`controls`]) and reads the visible list back through [`visible_tasks`].
//! Transitions never fail: unknown ids and empty titles are absorbed as
//! no-ops.

pub mod clock;
pub mod controls;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{Action, Store, TaskState, reduce};
pub use view::{
    CompletionSummary, ViewOptions, all_completed, completion_summary, empty_message,
    shows_no_results, visible_tasks,
};
