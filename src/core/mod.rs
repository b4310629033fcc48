//! Business logic sitting between the CLI handlers and the store.

pub mod add;
pub mod config;
pub mod log;
pub mod report;
