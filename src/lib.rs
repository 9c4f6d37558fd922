//! # racedb
//!
//! Cleanup utilities for a cross-country skiing results dataset.
//!
//! ## Usage
//!
//! ```bash
//! racedb split [-i results.json] [-o out/]
//! racedb split-ranges [--boundaries 0,23000,26000] [--open-ended]
//! racedb cleanup [-a input.json] [-r races-info.json] [-o OUTPUT.json]
//! racedb classify "Men's Sprint Qual"
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup, verbosity and fatal error reporting
//! - `classify` - Race type and gender from a discipline string
//! - `cli` - Argument parsing and the batch job drivers
//! - `config` - `racedb.toml` and environment configuration
//! - `document` - Loading and atomically writing JSON documents
//! - `error` - Error type with codes and exit statuses
//! - `model` - Race and athlete record types
//! - `partition` - Category and raceid-range partitioning
//! - `validate` - Pruning athlete raceids against the canonical race list
pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod partition;
pub mod validate;

#[cfg(test)]
mod property_tests;
