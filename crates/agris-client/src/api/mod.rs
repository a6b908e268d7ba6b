//! Typed endpoint operations, grouped by resource.

mod auth;
mod expenses;
mod farms;
mod prediction;
mod reports;
mod yields;
