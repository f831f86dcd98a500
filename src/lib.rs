//! xlcmd - XL compiler inspection commands for LLDB.
//!
//! This crate is the source of truth for a small catalog of debugger
//! console commands that inspect an XL compiler's runtime structures
//! (parse trees, LLVM values, type tables, unification records, scopes,
//! contexts). Each command forwards a single object reference to a
//! formatting routine already compiled into the debuggee; the host
//! debugger's expression evaluator does the actual memory inspection
//! and printing.
//!
//! # Architecture
//!
//! - [`catalog`] - Argument metadata, the generic command type, and the
//!   fixed seven-command catalog
//! - [`dispatch`] - Host stand-in: tokenize a console line and route it
//!   to a catalog command
//! - [`eval`] - The evaluator boundary trait and the echo stand-in
//! - [`script`] - LLDB Python script generation from the catalog
//! - [`cli`] - Command-line interface using clap
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod eval;
pub mod script;

pub use error::{Error, Result};
