//! Schema Renderer entrypoint
//!
//! Reads the YAML declaration and writes its CREATE TABLE statements
//! to init.sql, overwriting any previous render.

use anyhow::{Context, Result};
use common::init_logging;
use schema_deploy::{render, schema, CONFIG_FILE, INIT_SQL_FILE};
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let _guard = init_logging("generate-sql");

    let tables = schema::load_schema(CONFIG_FILE)?;
    let sql = render::render_schema(&tables);

    fs::write(INIT_SQL_FILE, &sql).context("Failed to write SQL file")?;

    info!(
        path = INIT_SQL_FILE,
        tables = tables.len(),
        "SQL initialization file generated"
    );

    for line in sql.lines() {
        info!("  {}", line);
    }

    Ok(())
}
