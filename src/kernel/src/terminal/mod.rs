//! Terminal subsystem for mljOS.
//!
//! Provides the command-line interface on top of the console line editor.
//!
//! # Architecture
//!
//! - `shell`: Prompt and read/execute loop
//! - `commands`: Built-in shell commands

pub mod commands;
pub mod shell;

pub use commands::Command;
pub use shell::Shell;
