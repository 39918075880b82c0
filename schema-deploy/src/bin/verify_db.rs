//! Verifier entrypoint
//!
//! Connects to the local or cloud instance, selected by
//! CHECKCLOUDDEPLOYMENT, and checks every declared table against
//! information_schema.

use anyhow::Result;
use common::init_logging;
use schema_deploy::{config, schema, verify, ConnectionConfig, CONFIG_FILE};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let _guard = init_logging("verify-db");

    let tables = schema::load_schema(CONFIG_FILE)?;
    let conn = ConnectionConfig::from_env()?;

    let cloud = config::is_cloud_deployment();
    let target = conn.verification_target(cloud);

    info!(host = %target.host, port = target.port, cloud, "Verifying schema");

    verify::run_verification(&target, &tables).await;

    Ok(())
}
