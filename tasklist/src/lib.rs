//! `Tasklist` — terminal task list library.

pub mod app;
pub mod auth;
pub mod config;
pub mod router;
pub mod tasks;
pub mod ui;
