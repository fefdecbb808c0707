//! Git Rewind CLI library.
//!
//! Input loading and the command implementations behind the `gitrewind`
//! binary.

pub mod commands;
pub mod input;
