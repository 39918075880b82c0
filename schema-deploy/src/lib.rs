//! PostgreSQL schema provisioning from a YAML declaration
//!
//! Three binaries share these components:
//! - `generate-sql` renders the declaration into CREATE TABLE statements
//! - `deploy` applies the rendered file to a database through psql
//! - `verify-db` checks the declared tables against the catalog

pub mod config;
pub mod deploy;
pub mod render;
pub mod schema;
pub mod verify;

pub use config::ConnectionConfig;
pub use schema::TableDecl;

/// Schema declaration file consumed by every binary.
pub const CONFIG_FILE: &str = "config.yaml";

/// Rendered SQL file produced by generate-sql and consumed by deploy.
pub const INIT_SQL_FILE: &str = "init.sql";
