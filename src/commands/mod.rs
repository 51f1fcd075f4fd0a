//! # CLI Command Implementations
//!
//! This module contains the implementation for each entry point of the
//! `rbxts-scaffold` command-line tool. Each command is defined in its own
//! file, with an `Args` struct derived using `clap` and an `execute` function
//! that calls into the `rbxts_scaffold` library.

pub mod completions;
pub mod init;
