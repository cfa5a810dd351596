//! One handler per shell command.

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod list;
pub mod render;
pub mod show;
pub mod sort;
pub mod stats;
pub mod toggle;
