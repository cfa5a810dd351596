//! An in-memory task list.
//!
//! [`engine`] holds the task record and the pure operations over a
//! collection of them, plus [`engine::TaskStore`], the single owner of the
//! authoritative collection. [`config`] and [`logging`] carry the session
//! settings the `tasklist` binary starts from.

pub mod config;
pub mod engine;
pub mod logging;
