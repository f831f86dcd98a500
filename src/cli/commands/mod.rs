//! Command implementations.

pub mod console;
pub mod list;
pub mod script;
