//! Subcommand implementations.

pub mod auth;
pub mod expense;
pub mod farm;
pub mod predict;
pub mod yields;
