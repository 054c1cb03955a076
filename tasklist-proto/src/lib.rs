//! Shared task and view-state definitions for `Tasklist`.

pub mod task;
pub mod view;
