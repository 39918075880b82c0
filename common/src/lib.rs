//! Shared utilities for the schema provisioning binaries
//!
//! This crate provides common functionality used by every binary:
//! - Structured logging initialization
//! - Environment variable parsing helpers
//! - Command execution utilities

pub mod command;
pub mod config;
pub mod logging;

pub use command::psql;
pub use config::ConfigExt;
pub use logging::init_logging;
