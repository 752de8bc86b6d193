//! showbuild command-line driver.
//!
//! Runs the rundown engine against a local state directory and the show
//! API: durations, cue markup, validation, colors, sessions and routes.

pub mod cli;
pub mod commands;
