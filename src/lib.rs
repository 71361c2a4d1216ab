//! Prompt Library
//!
//! Core of the prompt library tool: a decoder for the hand-written
//! two-column (`name,content`) CSV dataset, whose quoted content may span
//! several lines, and a case-insensitive search over the decoded records.
//! The remaining modules support the command-line front end.

pub mod cli;
pub mod csv_handler;
pub mod debounce;
pub mod display;
pub mod error;
pub mod search;
