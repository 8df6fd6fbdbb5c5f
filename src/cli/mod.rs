//! CLI command implementations.

pub mod add;
pub mod list;
pub mod review;
