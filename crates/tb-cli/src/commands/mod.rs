//! Subcommand handlers. Each writes its user-facing output to `out`.

pub mod classify;
pub mod history;
pub mod report;
pub mod submit;
