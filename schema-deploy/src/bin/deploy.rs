//! Deployer entrypoint
//!
//! Applies the rendered SQL file to the configured PostgreSQL instance
//! through psql, then verifies that the declared tables landed.
//! A failed deployment is reported, not fatal: the verification pass
//! still runs and shows what actually reached the database.

use anyhow::Result;
use common::init_logging;
use schema_deploy::{config, deploy, schema, verify, ConnectionConfig, CONFIG_FILE, INIT_SQL_FILE};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let _guard = init_logging("deploy");

    let tables = schema::load_schema(CONFIG_FILE)?;
    let conn = ConnectionConfig::from_env()?;

    info!(file = INIT_SQL_FILE, host = %conn.host, "Deploying SQL file");

    match deploy::apply_sql_file(&conn, INIT_SQL_FILE).await {
        Ok(output) => {
            for line in output.lines() {
                info!("  {}", line);
            }
            info!("Deployment successful");
        }
        Err(e) => error!(error = %e, "Error deploying init.sql"),
    }

    let target = conn.verification_target(config::is_cloud_deployment());
    verify::run_verification(&target, &tables).await;

    Ok(())
}
