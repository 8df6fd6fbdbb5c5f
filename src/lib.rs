//! revise - spelling revision with spaced repetition.
//!
//! Words live in a CSV file with their repetition level and due date. A
//! review session speaks each due word, checks what was typed and moves the
//! word along the interval table: up a level when spelled right, down a level
//! when spelled wrong.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod speech;
pub mod storage;
pub mod terminal;

pub use config::Config;
pub use error::{Error, Result};
