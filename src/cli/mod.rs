//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Input validation

pub mod args;
pub mod commands;
pub mod router;
pub mod validation;

pub use args::{Cli, Commands};
pub use router::execute_command;
pub use validation::{validate_input_file, validate_output_dir};
