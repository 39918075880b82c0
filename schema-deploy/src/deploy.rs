//! SQL file deployment through the psql client
//!
//! psql's exit status is the only success signal; a non-zero exit
//! surfaces the captured stderr in the returned error.

use crate::config::ConnectionConfig;
use anyhow::{bail, Result};
use common::psql;
use std::path::Path;

/// Apply a rendered SQL file to the target database as a batch script.
pub async fn apply_sql_file(config: &ConnectionConfig, sql_file: &str) -> Result<String> {
    if !Path::new(sql_file).exists() {
        bail!("SQL file '{}' not found, run generate-sql first", sql_file);
    }

    let conninfo = config.psql_conninfo();
    psql(&[conninfo.as_str(), "-f", sql_file]).await
}
